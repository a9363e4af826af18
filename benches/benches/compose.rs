// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use handhold_compose::{Constraints, CumulativeTransform, TransformComposer};
use handhold_constraint::{AngleRange, BoundPolicy, ScaleRange, TranslationBounds};
use handhold_gesture::{GestureDelta, GestureKind, GestureUpdate};
use kurbo::{Affine, Rect, Vec2};

fn updates(len: usize) -> Vec<GestureUpdate> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            match i % 3 {
                0 => GestureUpdate::changed(
                    GestureKind::Pan,
                    GestureDelta::Vector(Vec2::new(t.sin(), t.cos())),
                ),
                1 => GestureUpdate::changed(
                    GestureKind::Pinch,
                    GestureDelta::Ratio(1.0 + 0.01 * t.sin()),
                ),
                _ => GestureUpdate::changed(GestureKind::Rotate, GestureDelta::Angle(0.01 * t.cos())),
            }
        })
        .collect()
}

fn constrained() -> Constraints {
    Constraints::none()
        .with_scale(ScaleRange::new(0.5, 3.0).with_policy(BoundPolicy::rubber_band(0.5)))
        .with_rotation(AngleRange::new(-1.0, 1.0).with_detent(0.25))
        .with_translation(
            TranslationBounds::new(Rect::new(-100.0, -100.0, 100.0, 100.0))
                .with_policy(BoundPolicy::rubber_band(50.0)),
        )
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/process");

    for len in [64usize, 1_024] {
        let input = updates(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("unconstrained", len), &input, |b, input| {
            b.iter(|| {
                let mut composer = TransformComposer::default();
                let mut target = Affine::IDENTITY;
                for u in input {
                    composer.process(*u, &mut target);
                }
                black_box(target);
            });
        });

        group.bench_with_input(BenchmarkId::new("constrained", len), &input, |b, input| {
            b.iter(|| {
                let mut composer = TransformComposer::default().with_constraints(constrained());
                let mut target = CumulativeTransform::IDENTITY;
                for u in input {
                    composer.process(*u, &mut target);
                }
                black_box(target);
            });
        });
    }

    group.finish();
}

fn bench_process_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/process_frame");

    // Three concurrent gestures per tick, as in a two-finger manipulation.
    for ticks in [64usize, 1_024] {
        let input = updates(ticks * 3);
        group.throughput(Throughput::Elements(ticks as u64));

        group.bench_with_input(BenchmarkId::new("constrained", ticks), &input, |b, input| {
            b.iter(|| {
                let mut composer = TransformComposer::default().with_constraints(constrained());
                let mut target = Affine::IDENTITY;
                for frame in input.chunks(3) {
                    composer.process_frame(frame, &mut target);
                }
                black_box(target);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process, bench_process_frame);
criterion_main!(benches);
