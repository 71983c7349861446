// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bindings from a target property to a source property elsewhere.

use alloc::rc::Rc;
use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;

use crate::handle::PropertyHandle;
use crate::value::ErasedValue;

/// Converts a source property value into the target property's type.
///
/// Converters are pure value transformations applied during the resolve
/// pass. A converter that cannot handle the value it is given returns
/// `None` and the target keeps its previous value for that frame.
pub trait ValueConverter {
    /// The [`TypeId`] the converter accepts.
    fn source_type(&self) -> TypeId;

    /// The [`TypeId`] the converter produces.
    fn target_type(&self) -> TypeId;

    /// Converts `value`, or `None` if it is not of the source type.
    fn convert(&self, value: &ErasedValue) -> Option<ErasedValue>;
}

struct FnConverter<S, T> {
    convert: fn(S) -> T,
    _marker: PhantomData<fn(S) -> T>,
}

impl<S: Clone + 'static, T: Clone + 'static> ValueConverter for FnConverter<S, T> {
    fn source_type(&self) -> TypeId {
        TypeId::of::<S>()
    }

    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn convert(&self, value: &ErasedValue) -> Option<ErasedValue> {
        let source = value.extract::<S>()?;
        Some(ErasedValue::new((self.convert)(source)))
    }
}

/// A one-way pull binding from one source property.
///
/// A binding stores only a [`PropertyHandle`] to its source; it keeps the
/// source alive in no way. Once the source object is destroyed the binding
/// goes inert and the target keeps its last resolved value.
#[derive(Clone)]
pub struct Binding {
    source: PropertyHandle,
    converter: Option<Rc<dyn ValueConverter>>,
}

impl Binding {
    /// Creates a direct binding: the source value is written to the target
    /// unchanged.
    #[must_use]
    pub fn new(source: PropertyHandle) -> Self {
        Self {
            source,
            converter: None,
        }
    }

    /// Creates a converting binding that maps the source value through `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use thicket_binding::{Binding, ObjectHandle, PropertyHandle};
    /// # fn demo(source: PropertyHandle) {
    /// // Drive a text label from a numeric progress property.
    /// let binding = Binding::map::<f32, u32>(source, |progress| (progress * 100.0) as u32);
    /// # }
    /// ```
    #[must_use]
    pub fn map<S: Clone + 'static, T: Clone + 'static>(
        source: PropertyHandle,
        f: fn(S) -> T,
    ) -> Self {
        Self {
            source,
            converter: Some(Rc::new(FnConverter {
                convert: f,
                _marker: PhantomData,
            })),
        }
    }

    /// Returns the source property handle.
    #[must_use]
    #[inline]
    pub fn source(&self) -> PropertyHandle {
        self.source
    }

    /// Returns the converter, if any.
    #[must_use]
    pub fn converter(&self) -> Option<&dyn ValueConverter> {
        self.converter.as_deref()
    }

    /// Returns the type this binding writes into its target, given the type
    /// the source property produces.
    ///
    /// For a direct binding that is the source type itself; a converting
    /// binding writes its converter's target type.
    #[must_use]
    pub fn produced_type(&self, source_type: TypeId) -> TypeId {
        match &self.converter {
            Some(converter) => converter.target_type(),
            None => source_type,
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("source", &self.source)
            .field("converted", &self.converter.is_some())
            .finish()
    }
}
