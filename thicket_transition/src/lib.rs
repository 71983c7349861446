// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Transition: time-driven value interpolation for retained UI.
//!
//! This crate provides the animated-value primitives used by the widget
//! update cycle: a tick-based duration type, a shared cache of precomputed
//! easing curves, and a generic [`Transition`] state machine that drives a
//! typed value from a captured baseline toward a target over time.
//!
//! ## Core Concepts
//!
//! ### Transitions
//!
//! A [`Transition<T>`] owns three values: the *actual* (target) value, the
//! *current* (interpolated) value, and the baseline captured when the target
//! was last changed. Each frame the host calls [`Transition::update`] with
//! the elapsed [`TransitionTimeSpan`]; the transition advances its internal
//! clock and recomputes the current value through an easing curve.
//!
//! - [`Transition::set_value`] starts a new animation toward a target.
//! - [`Transition::set_actual_value`] overrides without animating.
//! - Once complete, the current value equals the target bit-for-bit and
//!   further updates change nothing.
//!
//! ### The curve cache
//!
//! Easing curves are sampled into lookup tables once per
//! (kind, duration) pair and shared read-only by every transition instance
//! via [`TransitionCache`]. The cache only ever grows; the set of distinct
//! durations an application uses is small and static.
//!
//! ## Quick Start
//!
//! ```rust
//! use thicket_transition::{Transition, TransitionCache, TransitionTimeSpan};
//!
//! let mut cache = TransitionCache::new();
//! let mut fade: Transition<f32> =
//!     Transition::with_time(&mut cache, TransitionTimeSpan::from_ticks(2));
//!
//! fade.set_value(10.0);
//! assert!(!fade.is_completed());
//!
//! fade.update(TransitionTimeSpan::from_ticks(1));
//! assert_eq!(fade.value(), 5.0);
//!
//! fade.update(TransitionTimeSpan::from_ticks(1));
//! assert!(fade.is_completed());
//! assert_eq!(fade.value(), 10.0);
//! ```
//!
//! ## Threading
//!
//! Everything here is single-thread confined by design: transitions and the
//! cache are meant to live on the UI/update thread, and the cache performs
//! no locking.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod cache;
mod easing;
mod timespan;
mod transition;
mod value;

pub use cache::{SampleTable, TransitionCache};
pub use easing::TransitionKind;
pub use timespan::TransitionTimeSpan;
pub use transition::Transition;
pub use value::{PackedColor, TransitionValue};
