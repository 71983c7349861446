// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared cache of precomputed easing-curve sample tables.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::easing::TransitionKind;
use crate::timespan::TransitionTimeSpan;

/// Minimum number of curve segments in a sample table.
const MIN_SEGMENTS: usize = 16;
/// Maximum number of curve segments in a sample table.
const MAX_SEGMENTS: usize = 256;

/// A precomputed table of eased fractions for one (kind, duration) pair.
///
/// Tables are produced by [`TransitionCache::curve`] and shared read-only by
/// every [`Transition`](crate::Transition) using that curve. The table holds
/// `segments + 1` samples; the last sample is exactly `1.0`, so the end of
/// an animation never suffers from curve rounding.
#[derive(Debug)]
pub struct SampleTable {
    samples: Box<[f32]>,
}

impl SampleTable {
    fn new(kind: TransitionKind, duration: TransitionTimeSpan) -> Self {
        // Resolution follows the duration: roughly one segment per
        // millisecond, clamped so short and long animations both get a
        // usable table.
        let milliseconds = duration.whole_milliseconds().max(0);
        let segments = usize::try_from(milliseconds)
            .unwrap_or(MAX_SEGMENTS)
            .clamp(MIN_SEGMENTS, MAX_SEGMENTS);

        let mut samples = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            samples.push(kind.evaluate(i as f32 / segments as f32));
        }
        // The endpoints must be exact regardless of how the curve evaluated.
        samples[0] = 0.0;
        samples[segments] = 1.0;

        Self {
            samples: samples.into_boxed_slice(),
        }
    }

    /// Returns the number of curve segments in this table.
    #[must_use]
    #[inline]
    pub fn segments(&self) -> usize {
        self.samples.len() - 1
    }

    /// Samples the curve at `t`, clamped into `[0, 1]`.
    ///
    /// Values between table entries are linearly interpolated, so sampling a
    /// `Linear` table reproduces `t` exactly.
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let segments = self.segments();
        let position = t * segments as f32;
        #[expect(clippy::cast_possible_truncation, reason = "position <= segments <= 256")]
        let index = (position as usize).min(segments - 1);
        let fraction = position - index as f32;
        let a = self.samples[index];
        let b = self.samples[index + 1];
        a + (b - a) * fraction
    }
}

/// A process-wide cache of easing-curve sample tables.
///
/// The cache maps `(kind, duration)` to a shared [`SampleTable`]. Tables are
/// computed on first use and never removed or mutated afterwards; the cache
/// grows for its whole lifetime, which is acceptable because the set of
/// distinct durations an application uses is small and static.
///
/// The cache performs no locking. All use is expected on a single thread
/// (the UI/update thread).
///
/// # Example
///
/// ```rust
/// use thicket_transition::{TransitionCache, TransitionKind, TransitionTimeSpan};
///
/// let mut cache = TransitionCache::new();
/// let time = TransitionTimeSpan::from_milliseconds(400);
///
/// let curve = cache.curve(TransitionKind::Smooth, time);
/// assert_eq!(curve.sample(1.0), 1.0);
///
/// // The second request for the same key shares the first table.
/// let again = cache.curve(TransitionKind::Smooth, time);
/// assert!(std::rc::Rc::ptr_eq(&curve, &again));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TransitionCache {
    tables: HashMap<(TransitionKind, TransitionTimeSpan), Rc<SampleTable>>,
}

impl TransitionCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sample table for the given easing kind and duration,
    /// computing and inserting it if absent.
    #[must_use]
    pub fn curve(&mut self, kind: TransitionKind, duration: TransitionTimeSpan) -> Rc<SampleTable> {
        self.tables
            .entry((kind, duration))
            .or_insert_with(|| Rc::new(SampleTable::new(kind, duration)))
            .clone()
    }

    /// Returns the number of cached tables.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no tables have been computed yet.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
