// Copyright 2025 the Handhold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use handhold::Manipulator;
use handhold_gesture::{ManipulationType, RecognizerEvent, RecognizerState, TouchInfo};
use kurbo::{Affine, Point, Vec2};

fn events(len: usize) -> Vec<RecognizerEvent> {
    let touch = TouchInfo::new(2, Point::new(200.0, 150.0));
    let state = RecognizerState::Changed;
    (0..len)
        .map(|i| {
            let t = i as f64;
            match i % 3 {
                0 => RecognizerEvent::Pan {
                    translation: Vec2::new(t.sin(), t.cos()),
                    state,
                    touch,
                },
                1 => RecognizerEvent::Pinch {
                    scale: 1.0 + 0.01 * t.sin(),
                    state,
                    touch,
                },
                _ => RecognizerEvent::Rotation {
                    rotation: 0.01 * t.cos(),
                    state,
                    touch,
                },
            }
        })
        .collect()
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("manipulator");

    for len in [96usize, 3_072] {
        let input = events(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("handle", len), &input, |b, input| {
            b.iter(|| {
                let mut m = Manipulator::new(ManipulationType::all(), Affine::IDENTITY, ());
                for event in input {
                    m.handle(event);
                }
                black_box(m.into_parts());
            });
        });

        group.bench_with_input(BenchmarkId::new("handle_frame", len), &input, |b, input| {
            b.iter(|| {
                let mut m = Manipulator::new(ManipulationType::all(), Affine::IDENTITY, ());
                for frame in input.chunks(3) {
                    m.handle_frame(frame);
                }
                black_box(m.into_parts());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_handle);
criterion_main!(benches);
