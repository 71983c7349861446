// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition state machine.

use alloc::rc::Rc;
use core::fmt;

use crate::cache::{SampleTable, TransitionCache};
use crate::easing::TransitionKind;
use crate::timespan::TransitionTimeSpan;
use crate::value::TransitionValue;

/// A value-interpolation state machine.
///
/// A transition drives a typed value from a captured baseline toward a
/// target ("actual") value over time. It moves through three states:
///
/// - **Completed**: no interpolation in flight; the current value equals the
///   actual value exactly.
/// - **Delaying**: a target was set but `elapsed < start_delay`; the current
///   value does not move.
/// - **Animating**: `start_delay <= elapsed < start_delay + transition_time`;
///   each [`update`](Self::update) recomputes the current value through the
///   easing curve. Crossing the end snaps the current value bit-for-bit to
///   the actual value and re-enters Completed.
///
/// [`set_value`](Self::set_value) starts a new animation from the current
/// value; [`set_actual_value`](Self::set_actual_value) overrides without
/// animating. Updating a completed transition changes nothing.
///
/// # Example
///
/// ```rust
/// use thicket_transition::{Transition, TransitionCache, TransitionTimeSpan};
///
/// let mut cache = TransitionCache::new();
/// let mut slide: Transition<f32> =
///     Transition::with_time(&mut cache, TransitionTimeSpan::from_ticks(4));
///
/// slide.set_value(8.0);
/// slide.update(TransitionTimeSpan::from_ticks(1));
/// assert_eq!(slide.value(), 2.0);
/// slide.update(TransitionTimeSpan::from_ticks(3));
/// assert!(slide.is_completed());
/// assert_eq!(slide.value(), 8.0);
/// ```
pub struct Transition<T: TransitionValue> {
    actual: T,
    current: T,
    /// Baseline captured at the moment `set_value` was called.
    from: T,
    transition_time: TransitionTimeSpan,
    start_delay: TransitionTimeSpan,
    elapsed: TransitionTimeSpan,
    kind: TransitionKind,
    curve: Option<Rc<SampleTable>>,
}

impl<T: TransitionValue> Default for Transition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TransitionValue> Transition<T> {
    /// Creates a completed transition with zero values and zero times.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actual: T::ZERO,
            current: T::ZERO,
            from: T::ZERO,
            transition_time: TransitionTimeSpan::ZERO,
            start_delay: TransitionTimeSpan::ZERO,
            elapsed: TransitionTimeSpan::ZERO,
            kind: TransitionKind::Linear,
            curve: None,
        }
    }

    /// Creates a completed transition with the given duration and linear
    /// easing.
    #[must_use]
    pub fn with_time(cache: &mut TransitionCache, transition_time: TransitionTimeSpan) -> Self {
        Self::with_kind(cache, transition_time, TransitionKind::Linear)
    }

    /// Creates a completed transition with the given duration and easing
    /// kind.
    ///
    /// The transition starts completed because no value was ever set.
    #[must_use]
    pub fn with_kind(
        cache: &mut TransitionCache,
        transition_time: TransitionTimeSpan,
        kind: TransitionKind,
    ) -> Self {
        let curve = (!transition_time.is_zero()).then(|| cache.curve(kind, transition_time));
        Self {
            actual: T::ZERO,
            current: T::ZERO,
            from: T::ZERO,
            transition_time,
            start_delay: TransitionTimeSpan::ZERO,
            // No interpolation in flight.
            elapsed: transition_time,
            kind,
            curve,
        }
    }

    /// Returns the most recently computed interpolated value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> T {
        self.current
    }

    /// Returns the destination value the animation is driving toward.
    #[must_use]
    #[inline]
    pub fn actual_value(&self) -> T {
        self.actual
    }

    /// Returns the total interpolation duration.
    #[must_use]
    #[inline]
    pub fn transition_time(&self) -> TransitionTimeSpan {
        self.transition_time
    }

    /// Returns the time to wait after [`set_value`](Self::set_value) before
    /// interpolation begins.
    #[must_use]
    #[inline]
    pub fn start_delay(&self) -> TransitionTimeSpan {
        self.start_delay
    }

    /// Returns the easing kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Returns `true` when no interpolation is in flight.
    ///
    /// While completed, the current value equals the actual value exactly.
    #[must_use]
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.elapsed >= self.end_time()
    }

    #[inline]
    fn end_time(&self) -> TransitionTimeSpan {
        self.start_delay + self.transition_time
    }

    /// Changes the interpolation duration.
    ///
    /// An in-flight animation keeps its elapsed clock; only the denominator
    /// used to compute the fraction on the next [`update`](Self::update)
    /// changes. Shortening the duration below the already-elapsed time
    /// finishes the animation (the current value snaps to the target).
    ///
    /// Returns `true` if the duration changed.
    pub fn set_transition_time(
        &mut self,
        cache: &mut TransitionCache,
        transition_time: TransitionTimeSpan,
    ) -> bool {
        if transition_time == self.transition_time {
            return false;
        }
        let was_completed = self.is_completed();
        self.transition_time = transition_time;
        self.curve =
            (!transition_time.is_zero()).then(|| cache.curve(self.kind, transition_time));
        if was_completed {
            // Completed transitions stay completed.
            self.elapsed = self.end_time();
        } else if self.is_completed() {
            self.current = self.actual;
        }
        true
    }

    /// Sets the start delay.
    ///
    /// The delay gates when interpolation begins, so it is only meaningful
    /// when applied before the next [`set_value`](Self::set_value).
    ///
    /// Returns `true` if the delay changed.
    pub fn set_start_delay(&mut self, start_delay: TransitionTimeSpan) -> bool {
        if start_delay == self.start_delay {
            return false;
        }
        let was_completed = self.is_completed();
        self.start_delay = start_delay;
        if was_completed {
            // Completed transitions stay completed.
            self.elapsed = self.end_time();
        } else if self.is_completed() {
            self.current = self.actual;
        }
        true
    }

    /// Starts a new animation toward `value` from the current value.
    ///
    /// A no-op when `value` equals the actual value: the transition is
    /// either already there or already animating toward it, and no
    /// discontinuity is needed. With a zero total time the change is
    /// instant, as if [`set_actual_value`](Self::set_actual_value) had been
    /// called.
    pub fn set_value(&mut self, value: T) {
        if value == self.actual {
            return;
        }
        if self.end_time().is_zero() {
            self.set_actual_value(value);
            return;
        }
        self.from = self.current;
        self.actual = value;
        self.elapsed = TransitionTimeSpan::ZERO;
    }

    /// Hard override: sets the value without animating.
    ///
    /// The actual and current values both become `value` and the transition
    /// is immediately completed.
    pub fn set_actual_value(&mut self, value: T) {
        self.actual = value;
        self.current = value;
        self.from = value;
        self.elapsed = self.end_time();
    }

    /// Ends any in-flight animation, snapping to the actual value.
    pub fn force_complete(&mut self) {
        self.set_actual_value(self.actual);
    }

    /// Advances the animation clock by `delta`.
    ///
    /// Returns `true` if the current value changed. Updating a completed
    /// transition is a no-op.
    pub fn update(&mut self, delta: TransitionTimeSpan) -> bool {
        let end = self.end_time();
        if self.elapsed >= end {
            // Idempotent after completion.
            return false;
        }
        self.elapsed = (self.elapsed + delta).min(end);
        if self.elapsed < self.start_delay {
            // Still delaying; the value does not move.
            return false;
        }
        if self.elapsed >= end || self.transition_time.is_zero() {
            let changed = self.current != self.actual;
            self.current = self.actual;
            self.elapsed = end;
            return changed;
        }
        let fraction = (self.elapsed - self.start_delay).ticks() as f32
            / self.transition_time.ticks() as f32;
        let eased = match &self.curve {
            Some(table) => table.sample(fraction),
            None => self.kind.evaluate(fraction),
        };
        let next = T::lerp(self.from, self.actual, eased);
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

impl<T: TransitionValue + fmt::Debug> fmt::Debug for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("actual", &self.actual)
            .field("current", &self.current)
            .field("transition_time", &self.transition_time)
            .field("start_delay", &self.start_delay)
            .field("elapsed", &self.elapsed)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
