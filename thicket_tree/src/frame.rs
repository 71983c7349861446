// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame driver enforcing update/resolve/arrange ordering.

use alloc::vec::Vec;
use core::fmt;

use thicket_binding::{BindingService, DefinitionRegistry, ObjectHandle};
use thicket_transition::TransitionTimeSpan;

use crate::arena::WidgetArena;
use crate::flags::WidgetFlags;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Updated,
    Resolved,
}

/// Drives the widget tree through one frame's three phases.
///
/// A frame is always `update` then `resolve` then `arrange`; the cycle
/// panics on any other order. The ordering guarantee is what lets bindings
/// read animation output from the same frame and layout read binding
/// output from the same frame. Nothing here synchronizes internally; the
/// caller owns the frame loop and calls the phases in order.
///
/// The dirty set built during `update` contains every update-enabled
/// widget whose animated values changed, plus every widget with bindings
/// attached (those must pull fresh source values whether or not their own
/// animations moved).
pub struct FrameCycle {
    phase: Phase,
    dirty: Vec<ObjectHandle>,
}

impl FrameCycle {
    /// Creates a cycle ready for its first frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            dirty: Vec::new(),
        }
    }

    /// Returns the current frame's dirty set.
    ///
    /// Valid between `update` and the end of `arrange`; empty otherwise.
    #[must_use]
    pub fn dirty(&self) -> &[ObjectHandle] {
        &self.dirty
    }

    /// Phase 1: advances every update-enabled widget by `delta` and builds
    /// the dirty set. Returns the dirty-set size.
    ///
    /// # Panics
    ///
    /// Panics if the previous frame was not finished with `arrange`.
    pub fn update(&mut self, arena: &mut WidgetArena, delta: TransitionTimeSpan) -> usize {
        assert!(
            self.phase == Phase::Idle,
            "update must start the frame; finish the previous frame with arrange"
        );
        self.dirty.clear();

        for position in 0..arena.len() {
            let handle = arena.handles()[position];
            let Some(widget) = arena.get_mut(handle) else {
                continue;
            };
            if !widget.flags().contains(WidgetFlags::UPDATE_ENABLED) {
                continue;
            }
            let animated = widget.update(delta);
            if animated {
                widget.flags_mut().insert(WidgetFlags::CONTENT_DIRTY);
            }
            if animated || !widget.binding_storage().is_empty() {
                self.dirty.push(handle);
            }
        }

        self.phase = Phase::Updated;
        self.dirty.len()
    }

    /// Phase 2: resolves bindings over the dirty set. Returns the number
    /// of bound properties whose value changed.
    ///
    /// # Panics
    ///
    /// Panics unless `update` ran immediately before.
    pub fn resolve(
        &mut self,
        arena: &mut WidgetArena,
        service: &mut BindingService,
        registry: &DefinitionRegistry,
    ) -> usize {
        assert!(
            self.phase == Phase::Updated,
            "resolve must follow update"
        );
        let changed = service.resolve(&self.dirty, arena, registry);
        self.phase = Phase::Resolved;
        changed
    }

    /// Phase 3: arranges the dirty widgets and clears their dirty flags.
    /// Returns the number of widgets visited.
    ///
    /// # Panics
    ///
    /// Panics unless `resolve` ran immediately before.
    pub fn arrange(&mut self, arena: &mut WidgetArena) -> usize {
        assert!(
            self.phase == Phase::Resolved,
            "arrange must follow resolve"
        );
        let mut visited = 0;
        for &handle in &self.dirty {
            let Some(widget) = arena.get_mut(handle) else {
                continue;
            };
            widget.arrange();
            widget.flags_mut().clear_dirty();
            visited += 1;
        }
        self.dirty.clear();
        self.phase = Phase::Idle;
        visited
    }
}

impl Default for FrameCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameCycle")
            .field("phase", &self.phase)
            .field("dirty", &self.dirty.len())
            .finish()
    }
}
