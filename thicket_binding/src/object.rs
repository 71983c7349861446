// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The object side of data binding: storage, exposure, and attachment.

use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use smallvec::SmallVec;

use crate::binding::Binding;
use crate::definition::{DefinitionRegistry, PropertyDefinition};
use crate::handle::{ObjectHandle, PropertyHandle};

/// The outcome of a binding attachment attempt.
///
/// Attachment failures are reported as values, never as panics or errors:
/// a caller wiring up a UI wants to know which of its bindings took hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BindResult {
    /// The binding was stored and will resolve on following frames.
    Bound,
    /// The target object does not expose the property, or the source
    /// property definition is unknown.
    NotFound,
    /// The value produced by the binding does not match the target
    /// property's type.
    IncompatibleTypes,
}

/// Per-object binding state embedded in every [`BindableObject`].
///
/// At most one binding exists per target property; setting a binding for a
/// property that already has one replaces it. Storage is a sorted vector,
/// matching the small per-object binding counts seen in practice.
pub struct BindingStorage {
    handle: ObjectHandle,
    bindings: SmallVec<[(PropertyDefinition, Binding); 2]>,
}

impl BindingStorage {
    /// Creates empty storage for the object registered as `handle`.
    #[must_use]
    pub fn new(handle: ObjectHandle) -> Self {
        Self {
            handle,
            bindings: SmallVec::new(),
        }
    }

    /// Returns the owning object's handle.
    #[must_use]
    #[inline]
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    /// Stores `binding` as the binding for `target`. Returns `true` if an
    /// existing binding was replaced.
    pub fn set(&mut self, target: PropertyDefinition, binding: Binding) -> bool {
        match self.bindings.binary_search_by_key(&target, |entry| entry.0) {
            Ok(position) => {
                self.bindings[position].1 = binding;
                true
            }
            Err(position) => {
                self.bindings.insert(position, (target, binding));
                false
            }
        }
    }

    /// Removes the binding for `target`. Returns `true` if one existed.
    pub fn clear(&mut self, target: PropertyDefinition) -> bool {
        match self.bindings.binary_search_by_key(&target, |entry| entry.0) {
            Ok(position) => {
                self.bindings.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the binding for `target`, if any.
    #[must_use]
    pub fn get(&self, target: PropertyDefinition) -> Option<&Binding> {
        self.bindings
            .binary_search_by_key(&target, |entry| entry.0)
            .ok()
            .map(|position| &self.bindings[position].1)
    }

    /// Iterates all (target, binding) pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyDefinition, &Binding)> {
        self.bindings.iter().map(|(target, binding)| (*target, binding))
    }

    /// Returns the number of stored bindings.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no bindings are stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for BindingStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingStorage")
            .field("handle", &self.handle)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

/// An object that exposes bindable properties.
///
/// Implementors embed a [`BindingStorage`] and report the properties they
/// expose. A type that extends another bindable type lists the base type's
/// properties first in [`extract_properties`](Self::extract_properties) and
/// appends its own, so lookups see the whole chain.
pub trait BindableObject: 'static {
    /// Returns the embedded binding storage.
    fn binding_storage(&self) -> &BindingStorage;

    /// Returns the embedded binding storage mutably.
    fn binding_storage_mut(&mut self) -> &mut BindingStorage;

    /// Appends every property definition this object exposes to `out`,
    /// base-type properties before the object's own.
    fn extract_properties(&self, out: &mut Vec<PropertyDefinition>);

    /// Upcasts to [`Any`] for the accessor thunks.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to [`Any`] mutably for the accessor thunks.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Convenience operations available on every [`BindableObject`].
pub trait BindableObjectExt: BindableObject {
    /// Returns this object's handle.
    fn object_handle(&self) -> ObjectHandle {
        self.binding_storage().handle()
    }

    /// Returns `true` if this object exposes `definition`, searching its
    /// own properties and the whole base chain.
    fn exposes(&self, definition: PropertyDefinition) -> bool {
        let mut properties = Vec::new();
        self.extract_properties(&mut properties);
        properties.contains(&definition)
    }

    /// Returns a handle to `definition` on this object, or `None` if the
    /// object does not expose that property.
    fn try_property_handle(&self, definition: PropertyDefinition) -> Option<PropertyHandle> {
        self.exposes(definition)
            .then(|| PropertyHandle::new(self.object_handle(), definition))
    }

    /// Attaches `binding` to `target` on this object.
    ///
    /// The attempt is checked up front: the target property must be exposed
    /// by this object, both definitions must be known to `registry`, and
    /// the type the binding produces must match the target property's type.
    /// Nothing about the source object's liveness is checked here; a source
    /// that dies later simply makes the binding inert.
    fn try_set_binding(
        &mut self,
        registry: &DefinitionRegistry,
        target: PropertyDefinition,
        binding: Binding,
    ) -> BindResult {
        if !self.exposes(target) {
            return BindResult::NotFound;
        }
        let (Some(target_record), Some(source_record)) = (
            registry.get(target),
            registry.get(binding.source().definition),
        ) else {
            return BindResult::NotFound;
        };

        let source_type = source_record.value_type();
        if let Some(converter) = binding.converter()
            && converter.source_type() != source_type
        {
            return BindResult::IncompatibleTypes;
        }
        if binding.produced_type(source_type) != target_record.value_type() {
            return BindResult::IncompatibleTypes;
        }

        self.binding_storage_mut().set(target, binding);
        BindResult::Bound
    }

    /// Removes the binding attached to `target`. Returns `true` if one was
    /// removed.
    fn clear_binding(&mut self, target: PropertyDefinition) -> bool {
        self.binding_storage_mut().clear(target)
    }
}

impl<T: BindableObject + ?Sized> BindableObjectExt for T {}
