// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owning storage for the widget tree.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use thicket_binding::{BindableObject, ObjectHandle, ObjectStore};

use crate::widget::Widget;

/// Owns the widgets of a tree, keyed by [`ObjectHandle`].
///
/// Iteration follows insertion order, so a frame visits widgets in a
/// deterministic order no matter how handles were allocated. The arena
/// implements [`ObjectStore`], which is how the binding resolve pass
/// reaches widgets.
///
/// Removing a widget drops it; handles are retired by the
/// [`BindingService`](thicket_binding::BindingService) that allocated them,
/// which is what makes bindings onto the removed widget inert.
#[derive(Default)]
pub struct WidgetArena {
    widgets: HashMap<ObjectHandle, Box<dyn Widget>>,
    order: Vec<ObjectHandle>,
}

impl WidgetArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `widget` under `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is already occupied; handles come from
    /// [`BindingService::register_object`](thicket_binding::BindingService::register_object)
    /// and are never handed out twice.
    pub fn insert(&mut self, handle: ObjectHandle, widget: Box<dyn Widget>) {
        let previous = self.widgets.insert(handle, widget);
        assert!(previous.is_none(), "widget handle inserted twice");
        self.order.push(handle);
    }

    /// Removes and drops the widget under `handle`. Returns `true` if one
    /// was present.
    pub fn remove(&mut self, handle: ObjectHandle) -> bool {
        if self.widgets.remove(&handle).is_none() {
            return false;
        }
        self.order.retain(|&entry| entry != handle);
        true
    }

    /// Returns the widget under `handle`.
    #[must_use]
    pub fn get(&self, handle: ObjectHandle) -> Option<&dyn Widget> {
        self.widgets.get(&handle).map(|widget| &**widget)
    }

    /// Returns the widget under `handle`, mutably.
    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut dyn Widget> {
        self.widgets.get_mut(&handle).map(|widget| &mut **widget)
    }

    /// Returns the widget under `handle` downcast to `T`.
    #[must_use]
    pub fn get_as<T: Widget>(&self, handle: ObjectHandle) -> Option<&T> {
        self.get(handle)
            .and_then(|widget| widget.as_any().downcast_ref::<T>())
    }

    /// Returns the widget under `handle` downcast to `T`, mutably.
    pub fn get_as_mut<T: Widget>(&mut self, handle: ObjectHandle) -> Option<&mut T> {
        self.get_mut(handle)
            .and_then(|widget| widget.as_any_mut().downcast_mut::<T>())
    }

    /// Returns the widget handles in insertion order.
    #[must_use]
    pub fn handles(&self) -> &[ObjectHandle] {
        &self.order
    }

    /// Returns the number of widgets in the arena.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the arena holds no widgets.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl ObjectStore for WidgetArena {
    fn get(&self, handle: ObjectHandle) -> Option<&dyn BindableObject> {
        self.widgets
            .get(&handle)
            .map(|widget| &**widget as &dyn BindableObject)
    }

    fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut dyn BindableObject> {
        self.widgets
            .get_mut(&handle)
            .map(|widget| &mut **widget as &mut dyn BindableObject)
    }
}

impl fmt::Debug for WidgetArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetArena")
            .field("len", &self.order.len())
            .finish()
    }
}
