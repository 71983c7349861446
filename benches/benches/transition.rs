// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `thicket_transition`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use thicket_transition::{
    PackedColor, Transition, TransitionCache, TransitionKind, TransitionTimeSpan,
};

fn bench_transition(c: &mut Criterion) {
    let frame = TransitionTimeSpan::from_microseconds(16_667);
    let duration = TransitionTimeSpan::from_milliseconds(400);

    let mut group = c.benchmark_group("transition/update");

    group.bench_function("f32/animating", |b| {
        let mut cache = TransitionCache::new();
        b.iter_batched(
            || {
                let mut transition: Transition<f32> = Transition::with_time(&mut cache, duration);
                transition.set_value(100.0);
                transition
            },
            |mut transition| {
                // 24 frames of a 400 ms animation at 60 Hz.
                for _ in 0..24 {
                    black_box(transition.update(frame));
                }
                black_box(transition.value());
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("f32/completed", |b| {
        let mut cache = TransitionCache::new();
        let mut transition: Transition<f32> = Transition::with_time(&mut cache, duration);
        transition.set_actual_value(100.0);
        b.iter(|| black_box(transition.update(frame)))
    });

    group.bench_function("color/animating", |b| {
        let mut cache = TransitionCache::new();
        b.iter_batched(
            || {
                let mut transition: Transition<PackedColor> =
                    Transition::with_kind(&mut cache, duration, TransitionKind::Smooth);
                transition.set_value(PackedColor::WHITE);
                transition
            },
            |mut transition| {
                for _ in 0..24 {
                    black_box(transition.update(frame));
                }
                black_box(transition.value());
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();

    let mut group = c.benchmark_group("transition/cache");

    group.bench_function("curve_hit", |b| {
        let mut cache = TransitionCache::new();
        let _ = cache.curve(TransitionKind::Smooth, duration);
        b.iter(|| black_box(cache.curve(TransitionKind::Smooth, duration)))
    });

    group.bench_function("sample", |b| {
        let mut cache = TransitionCache::new();
        let table = cache.curve(TransitionKind::EaseInOut, duration);
        b.iter(|| black_box(table.sample(black_box(0.37))))
    });

    group.finish();
}

criterion_group!(benches, bench_transition);
criterion_main!(benches);
