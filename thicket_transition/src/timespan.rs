// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-based durations for transition timing.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A transition duration measured in integer ticks.
///
/// One tick is 100 nanoseconds, so there are 10 ticks per microsecond and
/// 10,000 ticks per millisecond. A zero duration means "instant".
///
/// The host's clock service produces deltas in this unit each frame; the
/// transition engine never reads wall-clock time itself.
///
/// # Example
///
/// ```rust
/// use thicket_transition::TransitionTimeSpan;
///
/// let time = TransitionTimeSpan::from_milliseconds(400);
/// assert_eq!(time.ticks(), 400 * 10_000);
/// assert_eq!(time.whole_milliseconds(), 400);
/// assert!(time > TransitionTimeSpan::ZERO);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionTimeSpan(i64);

impl TransitionTimeSpan {
    /// The number of ticks per microsecond.
    pub const TICKS_PER_MICROSECOND: i64 = 10;
    /// The number of ticks per millisecond.
    pub const TICKS_PER_MILLISECOND: i64 = Self::TICKS_PER_MICROSECOND * 1000;
    /// The number of ticks per second.
    pub const TICKS_PER_SECOND: i64 = Self::TICKS_PER_MILLISECOND * 1000;

    /// A zero-length duration ("instant").
    pub const ZERO: Self = Self(0);

    /// Creates a duration from raw ticks.
    #[must_use]
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Creates a duration from whole microseconds.
    #[must_use]
    #[inline]
    pub const fn from_microseconds(microseconds: i64) -> Self {
        Self(microseconds * Self::TICKS_PER_MICROSECOND)
    }

    /// Creates a duration from whole milliseconds.
    #[must_use]
    #[inline]
    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds * Self::TICKS_PER_MILLISECOND)
    }

    /// Creates a duration from whole seconds.
    #[must_use]
    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * Self::TICKS_PER_SECOND)
    }

    /// Returns the raw tick count.
    #[must_use]
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Returns the number of whole milliseconds in this duration.
    #[must_use]
    #[inline]
    pub const fn whole_milliseconds(self) -> i64 {
        self.0 / Self::TICKS_PER_MILLISECOND
    }

    /// Returns `true` if this duration is zero.
    #[must_use]
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two durations, saturating at the numeric bounds.
    #[must_use]
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtracts a duration, saturating at the numeric bounds.
    #[must_use]
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Returns the smaller of two durations.
    #[must_use]
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Returns the larger of two durations.
    #[must_use]
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl Add for TransitionTimeSpan {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TransitionTimeSpan {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for TransitionTimeSpan {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for TransitionTimeSpan {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Debug for TransitionTimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TransitionTimeSpan").field(&self.0).finish()
    }
}

impl fmt::Display for TransitionTimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}
