// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget state flags.

use bitflags::bitflags;

bitflags! {
    /// Behavior and dirty-state flags carried by every widget.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u32 {
        /// The widget participates in the update phase.
        const UPDATE_ENABLED = 1 << 0;
        /// The widget participates in drawing.
        const DRAW_ENABLED = 1 << 1;
        /// The widget's layout inputs changed and it must be arranged.
        const LAYOUT_DIRTY = 1 << 2;
        /// The widget's rendered content changed this frame.
        const CONTENT_DIRTY = 1 << 3;
    }
}

impl WidgetFlags {
    /// The flags a freshly created interactive widget starts with.
    pub const ACTIVE: Self = Self::UPDATE_ENABLED.union(Self::DRAW_ENABLED);

    /// Returns `true` if either dirty flag is set.
    #[must_use]
    #[inline]
    pub const fn is_dirty(self) -> bool {
        self.intersects(Self::LAYOUT_DIRTY.union(Self::CONTENT_DIRTY))
    }

    /// Clears both dirty flags.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.remove(Self::LAYOUT_DIRTY.union(Self::CONTENT_DIRTY));
    }
}
