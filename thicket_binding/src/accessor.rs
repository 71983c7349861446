// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Getter/setter thunks connecting property definitions to concrete fields.

use core::any::{Any, TypeId};
use core::fmt;

use crate::value::ErasedValue;

/// The getter/setter pair a definition uses to reach the concrete field
/// backing a property on owner type `O`.
///
/// Both sides are plain function pointers, so an accessor bundle is `Copy`
/// and carries no captured state. The setter returns `true` only when it
/// actually changed the stored value; the resolve pass uses that to count
/// effective writes.
pub struct PropertyAccessors<O, T> {
    /// Reads the current value of the property.
    pub get: fn(&O) -> T,
    /// Writes `value` into the property. Returns `true` if the stored value
    /// changed.
    pub set: fn(&mut O, T) -> bool,
}

impl<O, T> Clone for PropertyAccessors<O, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, T> Copy for PropertyAccessors<O, T> {}

impl<O, T> fmt::Debug for PropertyAccessors<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAccessors").finish_non_exhaustive()
    }
}

/// The type-erased face of [`PropertyAccessors`], stored in the
/// [`DefinitionRegistry`](crate::DefinitionRegistry).
///
/// Erased calls take the owner as `&dyn Any` and values as [`ErasedValue`];
/// a `None` return means the owner or value was not of the type the
/// accessors were defined for.
pub trait ErasedAccessors {
    /// The [`TypeId`] of the owner type `O`.
    fn owner_type(&self) -> TypeId;

    /// The [`TypeId`] of the value type `T`.
    fn value_type(&self) -> TypeId;

    /// Reads the property from `owner`, or `None` if `owner` is not an `O`.
    fn get_erased(&self, owner: &dyn Any) -> Option<ErasedValue>;

    /// Writes `value` into `owner`. Returns `Some(changed)` on success,
    /// `None` if either the owner or the value is of the wrong type.
    fn set_erased(&self, owner: &mut dyn Any, value: &ErasedValue) -> Option<bool>;

    /// The concrete accessor bundle, for downcasting back to
    /// [`PropertyAccessors<O, T>`].
    fn as_any(&self) -> &dyn Any;
}

impl<O: 'static, T: Clone + 'static> ErasedAccessors for PropertyAccessors<O, T> {
    fn owner_type(&self) -> TypeId {
        TypeId::of::<O>()
    }

    fn value_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn get_erased(&self, owner: &dyn Any) -> Option<ErasedValue> {
        let owner = owner.downcast_ref::<O>()?;
        Some(ErasedValue::new((self.get)(owner)))
    }

    fn set_erased(&self, owner: &mut dyn Any, value: &ErasedValue) -> Option<bool> {
        let owner = owner.downcast_mut::<O>()?;
        let value = value.extract::<T>()?;
        Some((self.set)(owner, value))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
