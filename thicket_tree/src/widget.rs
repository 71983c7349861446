// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget contract driven by the frame cycle.

use thicket_binding::BindableObject;
use thicket_transition::TransitionTimeSpan;

use crate::flags::WidgetFlags;

/// A node in the widget tree.
///
/// Widgets are bindable objects with per-frame behavior. The
/// [`FrameCycle`](crate::FrameCycle) calls [`update`](Self::update) first
/// each frame, lets the binding resolve pass run, then calls
/// [`arrange`](Self::arrange) on the widgets whose state changed.
pub trait Widget: BindableObject {
    /// Returns the widget's current flags.
    fn flags(&self) -> WidgetFlags;

    /// Returns the widget's flags mutably.
    fn flags_mut(&mut self) -> &mut WidgetFlags;

    /// Advances the widget's animated values by `delta`.
    ///
    /// Returns `true` if any animated value produced a different output
    /// this frame. The return value feeds the frame's dirty set; a widget
    /// whose transitions have all completed returns `false` and drops out
    /// of the dirty set until something retargets it.
    fn update(&mut self, delta: TransitionTimeSpan) -> bool;

    /// Reacts to this frame's resolved values, typically by recomputing
    /// layout-dependent state.
    ///
    /// Called only for widgets in the frame's dirty set, after the resolve
    /// pass. The frame cycle clears the dirty flags afterwards.
    fn arrange(&mut self);
}
