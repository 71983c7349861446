// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object lifetime tracking and the per-frame resolve pass.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::definition::{DefinitionRegistry, PropertyDefinition};
use crate::handle::ObjectHandle;
use crate::object::BindableObject;
use crate::value::ErasedValue;

/// Looks up live objects by handle during the resolve pass.
///
/// The service does not own the objects; the caller keeps them wherever it
/// likes (typically a widget arena) and lends them to
/// [`BindingService::resolve`] through this trait.
pub trait ObjectStore {
    /// Returns the object registered as `handle`, if present.
    fn get(&self, handle: ObjectHandle) -> Option<&dyn BindableObject>;

    /// Returns the object registered as `handle` mutably, if present.
    fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut dyn BindableObject>;
}

/// A ready-made [`ObjectStore`] backed by a hash map.
#[derive(Default)]
pub struct ObjectMap {
    objects: HashMap<ObjectHandle, Box<dyn BindableObject>>,
}

impl ObjectMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `object` under `handle`, replacing any previous occupant.
    pub fn insert(&mut self, handle: ObjectHandle, object: Box<dyn BindableObject>) {
        self.objects.insert(handle, object);
    }

    /// Removes and drops the object stored under `handle`. Returns `true`
    /// if one was present.
    pub fn remove(&mut self, handle: ObjectHandle) -> bool {
        self.objects.remove(&handle).is_some()
    }

    /// Returns the object under `handle` downcast to `T`.
    #[must_use]
    pub fn get_as<T: BindableObject>(&self, handle: ObjectHandle) -> Option<&T> {
        self.objects
            .get(&handle)
            .and_then(|object| object.as_any().downcast_ref::<T>())
    }

    /// Returns the object under `handle` downcast to `T`, mutably.
    pub fn get_as_mut<T: BindableObject>(&mut self, handle: ObjectHandle) -> Option<&mut T> {
        self.objects
            .get_mut(&handle)
            .and_then(|object| object.as_any_mut().downcast_mut::<T>())
    }

    /// Returns the number of stored objects.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the map holds no objects.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for ObjectMap {
    fn get(&self, handle: ObjectHandle) -> Option<&dyn BindableObject> {
        self.objects.get(&handle).map(|object| &**object)
    }

    fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut dyn BindableObject> {
        self.objects.get_mut(&handle).map(|object| &mut **object)
    }
}

impl fmt::Debug for ObjectMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMap")
            .field("len", &self.objects.len())
            .finish()
    }
}

#[derive(Copy, Clone, Debug)]
struct Slot {
    generation: u32,
    alive: bool,
}

struct PendingWrite {
    target: ObjectHandle,
    definition: PropertyDefinition,
    value: ErasedValue,
}

/// Allocates object handles and runs the per-frame resolve pass.
///
/// The service tracks which handles refer to live objects using slot
/// generations; destroying an object retires its handle forever, and the
/// slot is reused under a new generation. Bindings whose source handle is
/// no longer alive are skipped quietly during resolve, so targets keep
/// their last resolved value.
///
/// # Example
///
/// ```rust
/// use thicket_binding::BindingService;
///
/// let mut service = BindingService::new();
/// let handle = service.register_object();
/// assert!(service.is_alive(handle));
///
/// service.unregister_object(handle);
/// assert!(!service.is_alive(handle));
/// ```
#[derive(Default)]
pub struct BindingService {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    // Scratch for resolve; kept to reuse the allocation between frames.
    pending: Vec<PendingWrite>,
}

impl BindingService {
    /// Creates a service with no registered objects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new object and returns its handle.
    pub fn register_object(&mut self) -> ObjectHandle {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.alive = true;
            return ObjectHandle::new(index, slot.generation);
        }
        let index = u32::try_from(self.slots.len()).expect("object capacity");
        self.slots.push(Slot {
            generation: 1,
            alive: true,
        });
        ObjectHandle::new(index, 1)
    }

    /// Destroys the object behind `handle`. Returns `true` if the handle
    /// was alive.
    ///
    /// The handle is retired permanently; the slot is recycled under a new
    /// generation, so copies of the old handle never match the next
    /// occupant.
    pub fn unregister_object(&mut self, handle: ObjectHandle) -> bool {
        if !self.is_alive(handle) {
            return false;
        }
        let slot = &mut self.slots[handle.index() as usize];
        slot.alive = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index());
        self.live -= 1;
        true
    }

    /// Returns `true` if `handle` refers to a live object.
    #[must_use]
    pub fn is_alive(&self, handle: ObjectHandle) -> bool {
        self.slots
            .get(handle.index() as usize)
            .is_some_and(|slot| slot.alive && slot.generation == handle.generation())
    }

    /// Returns the number of live objects.
    #[must_use]
    #[inline]
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Resolves the bindings of every object in `dirty`, pulling current
    /// source values into the bound target properties. Returns the number
    /// of target properties whose value actually changed.
    ///
    /// Resolution runs in two phases. The read phase walks the dirty
    /// objects and collects (target, value) writes, evaluating converters
    /// as it goes; the write phase then applies them. A write that lands a
    /// value equal to the one already stored does not count as a change.
    ///
    /// Dead handles anywhere in the walk are quiet no-ops: a dirty handle
    /// whose object is gone is skipped, and a binding whose source object
    /// is gone leaves its target untouched.
    pub fn resolve(
        &mut self,
        dirty: &[ObjectHandle],
        objects: &mut dyn ObjectStore,
        registry: &DefinitionRegistry,
    ) -> usize {
        let mut pending = core::mem::take(&mut self.pending);
        pending.clear();

        for &target in dirty {
            if !self.is_alive(target) {
                continue;
            }
            let Some(object) = objects.get(target) else {
                continue;
            };
            for (definition, binding) in object.binding_storage().iter() {
                let source = binding.source();
                if !self.is_alive(source.object) {
                    continue;
                }
                let Some(source_object) = objects.get(source.object) else {
                    continue;
                };
                let Some(record) = registry.get(source.definition) else {
                    continue;
                };
                let Some(raw) = record.accessors().get_erased(source_object.as_any()) else {
                    continue;
                };
                let value = match binding.converter() {
                    Some(converter) => match converter.convert(&raw) {
                        Some(converted) => converted,
                        None => continue,
                    },
                    None => raw,
                };
                pending.push(PendingWrite {
                    target,
                    definition,
                    value,
                });
            }
        }

        let mut changed = 0;
        for write in pending.drain(..) {
            let Some(object) = objects.get_mut(write.target) else {
                continue;
            };
            let Some(record) = registry.get(write.definition) else {
                continue;
            };
            if record.accessors().set_erased(object.as_any_mut(), &write.value) == Some(true) {
                changed += 1;
            }
        }

        self.pending = pending;
        changed
    }
}

impl fmt::Debug for BindingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingService")
            .field("live", &self.live)
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::PropertyAccessors;
    use crate::binding::Binding;
    use crate::handle::PropertyHandle;
    use crate::object::{BindResult, BindableObjectExt, BindingStorage};
    use alloc::boxed::Box;
    use alloc::vec;
    use core::any::Any;

    struct Meter {
        storage: BindingStorage,
        level: f32,
        percent: u32,
    }

    impl Meter {
        fn new(handle: ObjectHandle) -> Self {
            Self {
                storage: BindingStorage::new(handle),
                level: 0.0,
                percent: 0,
            }
        }
    }

    impl BindableObject for Meter {
        fn binding_storage(&self) -> &BindingStorage {
            &self.storage
        }

        fn binding_storage_mut(&mut self) -> &mut BindingStorage {
            &mut self.storage
        }

        fn extract_properties(&self, out: &mut Vec<PropertyDefinition>) {
            out.push(PropertyDefinition::test_new(0));
            out.push(PropertyDefinition::test_new(1));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn meter_registry() -> (DefinitionRegistry, PropertyDefinition, PropertyDefinition) {
        let mut registry = DefinitionRegistry::new();
        let level = registry
            .define::<Meter, f32>(
                "Level",
                PropertyAccessors {
                    get: |meter| meter.level,
                    set: |meter, value| {
                        let changed = meter.level != value;
                        meter.level = value;
                        changed
                    },
                },
            )
            .unwrap()
            .untyped();
        let percent = registry
            .define::<Meter, u32>(
                "Percent",
                PropertyAccessors {
                    get: |meter| meter.percent,
                    set: |meter, value| {
                        let changed = meter.percent != value;
                        meter.percent = value;
                        changed
                    },
                },
            )
            .unwrap()
            .untyped();
        (registry, level, percent)
    }

    struct Fixture {
        service: BindingService,
        objects: ObjectMap,
        registry: DefinitionRegistry,
        level: PropertyDefinition,
        percent: PropertyDefinition,
        source: ObjectHandle,
        target: ObjectHandle,
    }

    impl Fixture {
        fn new() -> Self {
            let (registry, level, percent) = meter_registry();
            let mut service = BindingService::new();
            let mut objects = ObjectMap::new();

            let source = service.register_object();
            objects.insert(source, Box::new(Meter::new(source)));
            let target = service.register_object();
            objects.insert(target, Box::new(Meter::new(target)));

            Self {
                service,
                objects,
                registry,
                level,
                percent,
                source,
                target,
            }
        }

        fn set_level(&mut self, handle: ObjectHandle, level: f32) {
            self.objects.get_as_mut::<Meter>(handle).unwrap().level = level;
        }

        fn level_of(&self, handle: ObjectHandle) -> f32 {
            self.objects.get_as::<Meter>(handle).unwrap().level
        }

        fn bind_level(&mut self) {
            let source = PropertyHandle::new(self.source, self.level);
            let result = self
                .objects
                .get_as_mut::<Meter>(self.target)
                .unwrap()
                .try_set_binding(&self.registry, self.level, Binding::new(source));
            assert_eq!(result, BindResult::Bound);
        }
    }

    #[test]
    fn handles_are_generational() {
        let mut service = BindingService::new();
        let first = service.register_object();
        assert!(service.is_alive(first));
        assert_eq!(service.live_count(), 1);

        assert!(service.unregister_object(first));
        assert!(!service.is_alive(first));
        assert!(!service.unregister_object(first));
        assert_eq!(service.live_count(), 0);

        // The slot is reused under a new generation; the old handle stays
        // dead.
        let second = service.register_object();
        assert_eq!(second.index(), first.index());
        assert_ne!(second, first);
        assert!(service.is_alive(second));
        assert!(!service.is_alive(first));
    }

    #[test]
    fn resolve_pulls_source_values() {
        let mut fixture = Fixture::new();
        fixture.bind_level();
        fixture.set_level(fixture.source, 0.6);

        let dirty = vec![fixture.target];
        let changed = fixture
            .service
            .resolve(&dirty, &mut fixture.objects, &fixture.registry);

        assert_eq!(changed, 1);
        assert_eq!(fixture.level_of(fixture.target), 0.6);
    }

    #[test]
    fn resolve_counts_only_effective_writes() {
        let mut fixture = Fixture::new();
        fixture.bind_level();
        fixture.set_level(fixture.source, 0.6);

        let dirty = vec![fixture.target];
        assert_eq!(
            fixture
                .service
                .resolve(&dirty, &mut fixture.objects, &fixture.registry),
            1
        );
        // Nothing moved; the second resolve writes the same value.
        assert_eq!(
            fixture
                .service
                .resolve(&dirty, &mut fixture.objects, &fixture.registry),
            0
        );
    }

    #[test]
    fn resolve_applies_converters() {
        let mut fixture = Fixture::new();
        let source = PropertyHandle::new(fixture.source, fixture.level);
        let binding = Binding::map::<f32, u32>(source, |level| (level * 100.0) as u32);
        let percent = fixture.percent;
        let registry = &fixture.registry;
        let result = fixture
            .objects
            .get_as_mut::<Meter>(fixture.target)
            .unwrap()
            .try_set_binding(registry, percent, binding);
        assert_eq!(result, BindResult::Bound);

        fixture.set_level(fixture.source, 0.42);
        let dirty = vec![fixture.target];
        let changed = fixture
            .service
            .resolve(&dirty, &mut fixture.objects, &fixture.registry);

        assert_eq!(changed, 1);
        assert_eq!(
            fixture.objects.get_as::<Meter>(fixture.target).unwrap().percent,
            42
        );
    }

    #[test]
    fn destroyed_source_keeps_last_value() {
        let mut fixture = Fixture::new();
        fixture.bind_level();
        fixture.set_level(fixture.source, 0.8);

        let dirty = vec![fixture.target];
        fixture
            .service
            .resolve(&dirty, &mut fixture.objects, &fixture.registry);
        assert_eq!(fixture.level_of(fixture.target), 0.8);

        // Destroy the source; the binding goes inert and the target keeps
        // its last resolved value.
        fixture.service.unregister_object(fixture.source);
        fixture.objects.remove(fixture.source);

        let changed = fixture
            .service
            .resolve(&dirty, &mut fixture.objects, &fixture.registry);
        assert_eq!(changed, 0);
        assert_eq!(fixture.level_of(fixture.target), 0.8);
    }

    #[test]
    fn dead_dirty_handles_are_skipped() {
        let mut fixture = Fixture::new();
        fixture.bind_level();
        fixture.service.unregister_object(fixture.target);
        fixture.objects.remove(fixture.target);

        let dirty = vec![fixture.target];
        let changed = fixture
            .service
            .resolve(&dirty, &mut fixture.objects, &fixture.registry);
        assert_eq!(changed, 0);
    }

    #[test]
    fn one_source_fans_out_to_many_targets() {
        let mut fixture = Fixture::new();
        fixture.bind_level();

        let extra = fixture.service.register_object();
        fixture.objects.insert(extra, Box::new(Meter::new(extra)));
        let source = PropertyHandle::new(fixture.source, fixture.level);
        let level = fixture.level;
        let registry = &fixture.registry;
        let result = fixture
            .objects
            .get_as_mut::<Meter>(extra)
            .unwrap()
            .try_set_binding(registry, level, Binding::new(source));
        assert_eq!(result, BindResult::Bound);

        fixture.set_level(fixture.source, 0.3);
        let dirty = vec![fixture.target, extra];
        let changed = fixture
            .service
            .resolve(&dirty, &mut fixture.objects, &fixture.registry);

        assert_eq!(changed, 2);
        assert_eq!(fixture.level_of(fixture.target), 0.3);
        assert_eq!(fixture.level_of(extra), 0.3);
    }
}
