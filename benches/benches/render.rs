// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the render pipeline against the in-tree surfaces.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size};
use textframe::{Editor, EditorConfig, PointerEvent};
use textframe_render::{
    EngineSlot, RecordingEngine, RenderPipeline, Style, SvgSurface, rect_path_data,
};
use textframe_resize::DEFAULT_FRAME;

/// An engine returning `count` small square paths.
fn engine_with(count: usize) -> EngineSlot<RecordingEngine> {
    let paths = (0..count).map(|i| {
        let x = 100.0 + (i % 40) as f64 * 15.0;
        let y = 100.0 + (i / 40) as f64 * 15.0;
        rect_path_data(Rect::new(x, y, x + 10.0, y + 10.0))
    });
    let mut slot = EngineSlot::new(RecordingEngine::with_paths(paths));
    pollster::block_on(slot.initialize()).expect("recording engine initializes");
    slot
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/pipeline");
    let pipeline = RenderPipeline::default();
    let style = Style::default();

    for count in [1_usize, 64, 1_024] {
        let slot = engine_with(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("svg", count), &slot, |b, slot| {
            let mut surface = SvgSurface::new(Size::new(800.0, 600.0));
            b.iter(|| {
                black_box(pipeline.render(&mut surface, DEFAULT_FRAME, &style, slot));
            });
        });
    }

    group.finish();
}

fn bench_editor_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/editor");

    group.bench_function("drag_right_edge_100_steps", |b| {
        b.iter_batched(
            || {
                let mut editor = Editor::new(
                    SvgSurface::new(Size::new(800.0, 600.0)),
                    RecordingEngine::default(),
                    EditorConfig::default(),
                );
                pollster::block_on(editor.start());
                editor
            },
            |mut editor| {
                editor.handle_pointer(PointerEvent::Down(Point::new(700.0, 300.0)));
                for step in 1..=100 {
                    let x = 700.0 + f64::from(step);
                    editor.handle_pointer(PointerEvent::Move(Point::new(x, 300.0)));
                }
                editor.handle_pointer(PointerEvent::Up(Point::new(800.0, 300.0)));
                editor
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_editor_drag);
criterion_main!(benches);
