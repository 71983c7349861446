// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Binding: dependency properties and per-frame binding resolution.
//!
//! This crate provides the data-binding half of the widget update cycle:
//! globally identified, bindable property descriptors decoupled from the
//! owning type's concrete fields, plus the resolve pass that pulls source
//! values into bound target properties once per frame.
//!
//! ## Core Concepts
//!
//! ### Definitions
//!
//! A [`PropertyDefinition`] identifies a bindable property on an owner type.
//! Definitions are registered once per (owner type, property name) pair in a
//! [`DefinitionRegistry`] and are identity-compared, never name-compared, at
//! steady state. Each definition carries type-erased getter/setter thunks
//! ([`PropertyAccessors`]) bound at definition time.
//!
//! ### Objects and bindings
//!
//! Widgets implement [`BindableObject`], embedding a [`BindingStorage`] and
//! reporting the properties they expose via
//! [`extract_properties`](BindableObject::extract_properties) (base-class
//! properties first, then their own). A [`Binding`] links a target property
//! to a source property on another object, identified only by a
//! non-owning [`PropertyHandle`]; a destroyed source makes the binding
//! inert, never an error.
//!
//! ### The resolve pass
//!
//! [`BindingService::resolve`] runs once per frame, after animations have
//! advanced and before layout. For each dirty object it pulls source values
//! through the bindings' optional converters and pushes them into the
//! target slots.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::any::Any;
//! use thicket_binding::{
//!     BindableObject, BindingService, BindingStorage, DefinitionRegistry,
//!     PropertyAccessors, PropertyDefinition,
//! };
//!
//! struct Gauge {
//!     storage: BindingStorage,
//!     level_def: PropertyDefinition,
//!     level: f32,
//! }
//!
//! impl BindableObject for Gauge {
//!     fn binding_storage(&self) -> &BindingStorage {
//!         &self.storage
//!     }
//!     fn binding_storage_mut(&mut self) -> &mut BindingStorage {
//!         &mut self.storage
//!     }
//!     fn extract_properties(&self, out: &mut Vec<PropertyDefinition>) {
//!         out.push(self.level_def);
//!     }
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//!
//! let mut registry = DefinitionRegistry::new();
//! let level = registry
//!     .define::<Gauge, f32>(
//!         "Level",
//!         PropertyAccessors {
//!             get: |gauge| gauge.level,
//!             set: |gauge, value| {
//!                 let changed = gauge.level != value;
//!                 gauge.level = value;
//!                 changed
//!             },
//!         },
//!     )
//!     .unwrap();
//!
//! let mut service = BindingService::new();
//! let handle = service.register_object();
//! let gauge = Gauge {
//!     storage: BindingStorage::new(handle),
//!     level_def: level.untyped(),
//!     level: 0.0,
//! };
//! # let _ = gauge;
//! ```
//!
//! ## Threading
//!
//! The registry and service are single-writer, construction-time-populated,
//! read-mostly state. All use is confined to one thread (the UI thread); no
//! operation suspends or blocks.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod accessor;
mod binding;
mod definition;
mod error;
mod handle;
mod object;
mod service;
mod value;

pub use accessor::{ErasedAccessors, PropertyAccessors};
pub use binding::{Binding, ValueConverter};
pub use definition::{DefinitionRecord, DefinitionRegistry, PropertyDefinition, TypedDefinition};
pub use error::DefinitionError;
pub use handle::{ObjectHandle, PropertyHandle};
pub use object::{BindResult, BindableObject, BindableObjectExt, BindingStorage};
pub use service::{BindingService, ObjectMap, ObjectStore};
pub use value::ErasedValue;
