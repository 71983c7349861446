// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curve kinds.

/// The named shape of an interpolation curve.
///
/// Every kind maps 0 to 0 and 1 to 1 exactly and is monotonic on `[0, 1]`.
/// All curves are simple polynomials, so they evaluate without any `std`
/// math support.
///
/// The kind selects which precomputed sample table a
/// [`Transition`](crate::Transition) reads from the
/// [`TransitionCache`](crate::TransitionCache).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Constant-velocity interpolation.
    #[default]
    Linear,
    /// Smoothstep: slow start and end, fast middle.
    Smooth,
    /// Quadratic ease-in: slow start.
    EaseIn,
    /// Quadratic ease-out: slow end.
    EaseOut,
    /// Quadratic ease-in-out: slow start and end.
    EaseInOut,
}

impl TransitionKind {
    /// Evaluates the curve at `t`, clamped into `[0, 1]`.
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => t * t * (3.0 - 2.0 * t),
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}
