// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-owning handles for bindable objects and their properties.

use core::fmt;

use crate::definition::PropertyDefinition;

/// A generational handle to an object registered with a
/// [`BindingService`](crate::BindingService).
///
/// Handles do not keep the object alive. A handle whose slot has been
/// reused for a new object stops matching (the generation differs), so a
/// stale handle can never alias a newer object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle {
    index: u32,
    generation: u32,
}

impl ObjectHandle {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index of this handle.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the generation of this handle's slot at the time the object
    /// was registered.
    #[must_use]
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHandle({}v{})", self.index, self.generation)
    }
}

/// A non-owning reference to one property slot on one object.
///
/// This is what a [`Binding`](crate::Binding) stores as its source. It keeps
/// nothing alive; resolving through a handle whose object has been destroyed
/// is a quiet no-op.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PropertyHandle {
    /// The object owning the property slot.
    pub object: ObjectHandle,
    /// The property definition identifying the slot.
    pub definition: PropertyDefinition,
}

impl PropertyHandle {
    /// Creates a handle for `definition` on `object`.
    #[must_use]
    pub const fn new(object: ObjectHandle, definition: PropertyDefinition) -> Self {
        Self { object, definition }
    }
}

impl fmt::Debug for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyHandle({:?}, {:?})", self.object, self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn handle_identity() {
        let a = ObjectHandle::new(3, 1);
        let b = ObjectHandle::new(3, 1);
        let stale = ObjectHandle::new(3, 2);
        assert_eq!(a, b);
        assert_ne!(a, stale);
        assert_eq!(a.index(), stale.index());
    }

    #[test]
    fn debug_formats() {
        let handle = ObjectHandle::new(7, 2);
        assert_eq!(format!("{handle:?}"), "ObjectHandle(7v2)");
    }
}
