// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value capability contract for animatable types.

use core::fmt;

use kurbo::Vec2;

/// A type that can be driven by a [`Transition`](crate::Transition).
///
/// This is a capability contract, not a base class: any type with a zero
/// value, equality comparison, and per-component linear interpolation can be
/// animated. Compound types interpolate each component independently.
pub trait TransitionValue: Copy + PartialEq {
    /// The zero value used by freshly constructed transitions.
    const ZERO: Self;

    /// Linearly interpolates from `from` to `to` by `fraction`.
    ///
    /// At `fraction == 1.0` the result must equal `to` exactly; transitions
    /// additionally snap to the target on completion, so rounding here never
    /// leaks into a finished animation.
    #[must_use]
    fn lerp(from: Self, to: Self, fraction: f32) -> Self;
}

impl TransitionValue for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn lerp(from: Self, to: Self, fraction: Self) -> Self {
        from + (to - from) * fraction
    }
}

impl TransitionValue for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn lerp(from: Self, to: Self, fraction: f32) -> Self {
        from + (to - from) * Self::from(fraction)
    }
}

impl TransitionValue for Vec2 {
    const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    fn lerp(from: Self, to: Self, fraction: f32) -> Self {
        // X and Y interpolate independently.
        from + (to - from) * f64::from(fraction)
    }
}

/// An RGBA color with 8 bits per channel, channel range 0–255.
///
/// This is the render-color representation used by animated tint/fade
/// properties. Channel interpolation uses round-half-away-from-zero, and at
/// `fraction == 1.0` each channel equals the target exactly (never
/// off-by-one due to rounding).
///
/// # Example
///
/// ```rust
/// use thicket_transition::{PackedColor, TransitionValue};
///
/// let target = PackedColor::new(42, 20, 255, 0);
/// let half = PackedColor::lerp(PackedColor::TRANSPARENT, target, 0.5);
/// assert_eq!(half, PackedColor::new(21, 10, 128, 0));
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackedColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl PackedColor {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a color from its channels.
    #[must_use]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PackedColor({}, {}, {}, {})",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Interpolates one channel with round-half-away-from-zero semantics.
///
/// Channels are non-negative, so `floor(x + 0.5)` is exactly
/// round-half-away-from-zero.
#[inline]
fn lerp_channel(from: u8, to: u8, fraction: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    let value = from + (to - from) * fraction;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is in [0, 255]; the float-to-int cast saturates"
    )]
    let rounded = (value + 0.5) as u8;
    rounded
}

impl TransitionValue for PackedColor {
    const ZERO: Self = Self::TRANSPARENT;

    #[inline]
    fn lerp(from: Self, to: Self, fraction: f32) -> Self {
        Self {
            r: lerp_channel(from.r, to.r, fraction),
            g: lerp_channel(from.g, to.g, fraction),
            b: lerp_channel(from.b, to.b, fraction),
            a: lerp_channel(from.a, to.a, fraction),
        }
    }
}
