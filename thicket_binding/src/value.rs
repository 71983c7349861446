// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased property values carried through the resolve pass.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

/// A boxed property value with its concrete type erased.
///
/// Values move from source getters, optionally through a converter, into
/// target setters without the resolve pass knowing their concrete type. The
/// contained type must be `Clone` so the value can fan out to multiple
/// targets.
pub struct ErasedValue {
    inner: Box<dyn ValueCell>,
}

trait ValueCell {
    fn as_any(&self) -> &dyn Any;
    fn clone_cell(&self) -> Box<dyn ValueCell>;
}

impl<T: Clone + 'static> ValueCell for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_cell(&self) -> Box<dyn ValueCell> {
        Box::new(self.clone())
    }
}

impl ErasedValue {
    /// Wraps `value`, erasing its type.
    #[must_use]
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    pub fn value_type(&self) -> TypeId {
        self.inner.as_any().type_id()
    }

    /// Returns `true` if the contained value is a `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Returns a reference to the contained value if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Returns a copy of the contained value if it is a `T`.
    #[must_use]
    pub fn extract<T: Clone + 'static>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl Clone for ErasedValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_cell(),
        }
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("value_type", &self.value_type())
            .finish_non_exhaustive()
    }
}
