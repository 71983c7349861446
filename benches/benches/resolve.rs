// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the binding resolve pass and the full frame cycle.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::vec::Vec;

use thicket_binding::{
    BindResult, BindableObject, BindableObjectExt, Binding, BindingService, BindingStorage,
    DefinitionRegistry, ObjectHandle, PropertyAccessors, PropertyDefinition, PropertyHandle,
};
use thicket_transition::{Transition, TransitionCache, TransitionTimeSpan};
use thicket_tree::{FrameCycle, Widget, WidgetArena, WidgetFlags};

struct Panel {
    storage: BindingStorage,
    flags: WidgetFlags,
    opacity_def: PropertyDefinition,
    opacity: Transition<f32>,
}

impl BindableObject for Panel {
    fn binding_storage(&self) -> &BindingStorage {
        &self.storage
    }

    fn binding_storage_mut(&mut self) -> &mut BindingStorage {
        &mut self.storage
    }

    fn extract_properties(&self, out: &mut Vec<PropertyDefinition>) {
        out.push(self.opacity_def);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl Widget for Panel {
    fn flags(&self) -> WidgetFlags {
        self.flags
    }

    fn flags_mut(&mut self) -> &mut WidgetFlags {
        &mut self.flags
    }

    fn update(&mut self, delta: TransitionTimeSpan) -> bool {
        self.opacity.update(delta)
    }

    fn arrange(&mut self) {}
}

struct Scene {
    service: BindingService,
    registry: DefinitionRegistry,
    arena: WidgetArena,
    cycle: FrameCycle,
    handles: Vec<ObjectHandle>,
}

/// Builds one animated source panel plus `followers` panels bound to its
/// opacity.
fn build_scene(followers: usize) -> Scene {
    let mut registry = DefinitionRegistry::new();
    let opacity_def = registry
        .define::<Panel, f32>(
            "Opacity",
            PropertyAccessors {
                get: |panel| panel.opacity.value(),
                set: |panel, value| {
                    let changed = panel.opacity.actual_value() != value;
                    panel.opacity.set_actual_value(value);
                    changed
                },
            },
        )
        .expect("definition")
        .untyped();

    let mut cache = TransitionCache::new();
    let mut service = BindingService::new();
    let mut arena = WidgetArena::new();
    let duration = TransitionTimeSpan::from_milliseconds(400);

    let mut panel = |cache: &mut TransitionCache, service: &mut BindingService| {
        let handle = service.register_object();
        let widget = Panel {
            storage: BindingStorage::new(handle),
            flags: WidgetFlags::ACTIVE,
            opacity_def,
            opacity: Transition::with_time(cache, duration),
        };
        (handle, widget)
    };

    let (source, mut source_widget) = panel(&mut cache, &mut service);
    source_widget.opacity.set_value(1.0);
    arena.insert(source, Box::new(source_widget));

    let mut handles = vec![source];
    let source_property = PropertyHandle::new(source, opacity_def);
    for _ in 0..followers {
        let (handle, widget) = panel(&mut cache, &mut service);
        arena.insert(handle, Box::new(widget));
        let result = arena
            .get_as_mut::<Panel>(handle)
            .expect("panel")
            .try_set_binding(&registry, opacity_def, Binding::new(source_property));
        assert_eq!(result, BindResult::Bound);
        handles.push(handle);
    }

    Scene {
        service,
        registry,
        arena,
        cycle: FrameCycle::new(),
        handles,
    }
}

fn bench_resolve(c: &mut Criterion) {
    let frame = TransitionTimeSpan::from_microseconds(16_667);

    let mut group = c.benchmark_group("binding/resolve");
    for followers in [1_usize, 16, 128] {
        group.bench_function(BenchmarkId::new("followers", followers), |b| {
            let mut scene = build_scene(followers);
            scene.cycle.update(&mut scene.arena, frame);
            let dirty: Vec<ObjectHandle> = scene.cycle.dirty().to_vec();
            scene
                .cycle
                .resolve(&mut scene.arena, &mut scene.service, &scene.registry);
            scene.cycle.arrange(&mut scene.arena);

            b.iter(|| {
                black_box(scene.service.resolve(
                    black_box(&dirty),
                    &mut scene.arena,
                    &scene.registry,
                ))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("binding/frame");
    group.bench_function("full_cycle/16", |b| {
        let mut scene = build_scene(16);
        b.iter(|| {
            let dirty = scene.cycle.update(&mut scene.arena, frame);
            let changed = scene
                .cycle
                .resolve(&mut scene.arena, &mut scene.service, &scene.registry);
            let arranged = scene.cycle.arrange(&mut scene.arena);
            black_box((dirty, changed, arranged));
        });
    });
    group.bench_function("is_alive", |b| {
        let scene = build_scene(16);
        let handle = scene.handles[0];
        b.iter(|| black_box(scene.service.is_alive(black_box(handle))));
    });
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
