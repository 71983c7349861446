// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property definitions and the registry that owns them.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;

use hashbrown::HashMap;

use crate::accessor::{ErasedAccessors, PropertyAccessors};
use crate::error::DefinitionError;

/// The identity of one registered property definition.
///
/// Definitions compare by identity. Two lookups of the same (owner type,
/// name) pair yield equal definitions; string comparison only happens at
/// registration time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyDefinition(u32);

impl PropertyDefinition {
    /// Returns the raw registry index of this definition.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn test_new(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Debug for PropertyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyDefinition({})", self.0)
    }
}

/// A [`PropertyDefinition`] that remembers its owner and value types.
///
/// The phantom types are compile-time convenience only; the typed and
/// untyped forms identify the same registry entry.
pub struct TypedDefinition<O, T> {
    definition: PropertyDefinition,
    _marker: PhantomData<fn(&O) -> T>,
}

impl<O, T> TypedDefinition<O, T> {
    /// Returns the untyped definition identity.
    #[must_use]
    #[inline]
    pub const fn untyped(self) -> PropertyDefinition {
        self.definition
    }
}

impl<O, T> Clone for TypedDefinition<O, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, T> Copy for TypedDefinition<O, T> {}

impl<O, T> PartialEq for TypedDefinition<O, T> {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
    }
}

impl<O, T> Eq for TypedDefinition<O, T> {}

impl<O, T> fmt::Debug for TypedDefinition<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedDefinition({})", self.definition.0)
    }
}

/// One registered definition: its name, its types, and its accessors.
pub struct DefinitionRecord {
    name: &'static str,
    owner_type: TypeId,
    accessors: Rc<dyn ErasedAccessors>,
}

impl DefinitionRecord {
    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the owner type.
    #[must_use]
    pub fn owner_type(&self) -> TypeId {
        self.owner_type
    }

    /// Returns the [`TypeId`] of the value type.
    #[must_use]
    pub fn value_type(&self) -> TypeId {
        self.accessors.value_type()
    }

    /// Returns the type-erased accessors.
    #[must_use]
    pub fn accessors(&self) -> &dyn ErasedAccessors {
        &*self.accessors
    }
}

impl fmt::Debug for DefinitionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinitionRecord")
            .field("name", &self.name)
            .field("owner_type", &self.owner_type)
            .field("value_type", &self.value_type())
            .finish()
    }
}

/// The registry of property definitions.
///
/// Definitions are registered during application setup and live for the
/// registry's lifetime; nothing is ever removed. Registering the same
/// (owner type, name) pair again returns the original definition, so a
/// definition's identity is stable no matter how many call sites request
/// it.
///
/// # Example
///
/// ```rust
/// use thicket_binding::{DefinitionRegistry, PropertyAccessors};
///
/// struct Label {
///     opacity: f32,
/// }
///
/// let mut registry = DefinitionRegistry::new();
/// let accessors = PropertyAccessors::<Label, f32> {
///     get: |label| label.opacity,
///     set: |label, value| {
///         let changed = label.opacity != value;
///         label.opacity = value;
///         changed
///     },
/// };
///
/// let first = registry.define("Opacity", accessors).unwrap();
/// let again = registry.define("Opacity", accessors).unwrap();
/// assert_eq!(first, again);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    records: Vec<DefinitionRecord>,
    by_key: HashMap<(TypeId, &'static str), PropertyDefinition>,
}

impl DefinitionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or re-fetches) the property `name` on owner type `O` with
    /// value type `T`.
    ///
    /// The first call for a given (owner type, name) pair creates the
    /// definition; later calls return the same definition after verifying
    /// that the requested accessor type matches the registered one.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::AccessorMismatch`] if the pair is already
    /// registered with a different value type or accessor shape.
    pub fn define<O: 'static, T: Clone + 'static>(
        &mut self,
        name: &'static str,
        accessors: PropertyAccessors<O, T>,
    ) -> Result<TypedDefinition<O, T>, DefinitionError> {
        let key = (TypeId::of::<O>(), name);
        if let Some(&definition) = self.by_key.get(&key) {
            let record = &self.records[definition.0 as usize];
            if record
                .accessors
                .as_any()
                .downcast_ref::<PropertyAccessors<O, T>>()
                .is_none()
            {
                return Err(DefinitionError::AccessorMismatch { name });
            }
            return Ok(TypedDefinition {
                definition,
                _marker: PhantomData,
            });
        }

        let index = u32::try_from(self.records.len()).expect("definition capacity");
        let definition = PropertyDefinition(index);
        self.records.push(DefinitionRecord {
            name,
            owner_type: TypeId::of::<O>(),
            accessors: Rc::new(accessors),
        });
        self.by_key.insert(key, definition);
        Ok(TypedDefinition {
            definition,
            _marker: PhantomData,
        })
    }

    /// Returns the record backing `definition`, or `None` if it was not
    /// created by this registry.
    #[must_use]
    pub fn get(&self, definition: PropertyDefinition) -> Option<&DefinitionRecord> {
        self.records.get(definition.0 as usize)
    }

    /// Iterates every registered definition with its record, in
    /// registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyDefinition, &DefinitionRecord)> {
        (0_u32..)
            .zip(self.records.iter())
            .map(|(index, record)| (PropertyDefinition(index), record))
    }

    /// Returns the number of registered definitions.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been registered yet.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
