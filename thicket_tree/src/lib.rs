// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Tree: the widget arena and the per-frame update cycle.
//!
//! This crate ties the animation and binding layers together into a frame
//! loop. Widgets live in a [`WidgetArena`]; each frame a [`FrameCycle`]
//! drives them through three ordered phases:
//!
//! 1. **update** advances every update-enabled widget's animated values by
//!    the frame delta and collects the dirty set;
//! 2. **resolve** runs the binding resolve pass over the dirty set, pulling
//!    fresh source values into bound properties;
//! 3. **arrange** visits the dirty widgets so they can react to their new
//!    values, then clears the dirty state.
//!
//! The ordering is a hard contract: animations settle before bindings read
//! them, and bindings settle before layout reads the bound values. Calling
//! the phases out of order is a programmer error and panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use thicket_binding::{BindingService, DefinitionRegistry};
//! use thicket_tree::{FrameCycle, WidgetArena};
//! use thicket_transition::TransitionTimeSpan;
//!
//! let mut service = BindingService::new();
//! let registry = DefinitionRegistry::new();
//! let mut arena = WidgetArena::new();
//! let mut cycle = FrameCycle::new();
//!
//! // One frame at 60 Hz with an empty tree.
//! let delta = TransitionTimeSpan::from_microseconds(16_667);
//! cycle.update(&mut arena, delta);
//! cycle.resolve(&mut arena, &mut service, &registry);
//! cycle.arrange(&mut arena);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod arena;
mod flags;
mod frame;
mod widget;

pub use arena::WidgetArena;
pub use flags::WidgetFlags;
pub use frame::FrameCycle;
pub use widget::Widget;
