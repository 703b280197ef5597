// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for edge classification, cursor lookup, and drag handling.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use textframe_resize::{
    DEFAULT_FRAME, EDGE_THRESHOLD, EdgeSet, ResizeConfig, ResizeController, classify, cursor_for,
};

/// Pointer positions on a grid covering the default frame plus a margin.
fn grid(rect: Rect, step: f64) -> Vec<Point> {
    let area = rect.inflate(20.0, 20.0);
    let mut points = Vec::new();
    let mut y = area.y0;
    while y <= area.y1 {
        let mut x = area.x0;
        while x <= area.x1 {
            points.push(Point::new(x, y));
            x += step;
        }
        y += step;
    }
    points
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/classify");
    let points = grid(DEFAULT_FRAME, 4.0);

    group.bench_function("grid", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &p in &points {
                if !classify(black_box(p), DEFAULT_FRAME, EDGE_THRESHOLD).is_empty() {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });

    group.bench_function("grid_with_cursor", |b| {
        b.iter(|| {
            for &p in &points {
                let edges = classify(p, DEFAULT_FRAME, EDGE_THRESHOLD);
                black_box(cursor_for(edges, p, DEFAULT_FRAME, EDGE_THRESHOLD));
            }
        });
    });

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/drag");

    for (name, start) in [
        ("right", Point::new(700.0, 300.0)),
        ("top_left", Point::new(100.0, 100.0)),
    ] {
        let edges = classify(start, DEFAULT_FRAME, EDGE_THRESHOLD);
        assert_ne!(edges, EdgeSet::empty(), "{name} must start on an edge");

        group.bench_with_input(BenchmarkId::new("moves_1000", name), &start, |b, &start| {
            b.iter_batched(
                || ResizeController::new(DEFAULT_FRAME, ResizeConfig::default()),
                |mut controller| {
                    controller.pointer_down(start);
                    for i in 0..1_000 {
                        let offset = f64::from(i % 200) - 100.0;
                        black_box(controller.pointer_move(start + Vec2::new(offset, offset)));
                    }
                    controller.pointer_up();
                    controller
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_drag);
criterion_main!(benches);
