// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted resize session and write the final frame as SVG.
//!
//! The frame is filled by a stand-in engine that draws one bar per text
//! line, so the effect of frame size, text size, and variant is visible
//! without the real layout engine.
//!
//! Run:
//! - `cargo run -p textframe_demos --bin svg_session -- --drag 700,300:750,300 --out frame.svg`
//! - `RUST_LOG=textframe=debug cargo run -p textframe_demos --bin svg_session -- --variant hebrew`

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use kurbo::{Point, Rect, Size};
use textframe::{Editor, EditorConfig, PointerEvent};
use textframe_render::{
    EngineError, OutlineStyle, PathEngine, PathRequest, Style, SvgSurface, Variant,
    parse_color_value, rect_path_data,
};
use textframe_resize::ResizeConfig;
use tracing_subscriber::EnvFilter;

/// Relative lengths of consecutive lines, repeated down the frame.
const LINE_FRACTIONS: [f64; 4] = [1.0, 0.85, 0.95, 0.6];

/// Command line for `svg_session`.
#[derive(Debug, Parser)]
#[command(about = "Replay a resize session and export the frame as SVG")]
struct Args {
    /// Surface width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Surface height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Initial frame as `X,Y,WIDTH,HEIGHT`.
    #[arg(long, default_value = "100,100,600,400", value_parser = parse_frame)]
    frame: Rect,
    /// Sample input: korean, hebrew, french, or mixed.
    #[arg(long, default_value = "korean")]
    variant: String,
    /// Text size.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,
    /// Fill color (any CSS color).
    #[arg(long, default_value = "black")]
    color: String,
    /// Outline color (any CSS color).
    #[arg(long, default_value = "#00bcd4")]
    outline_color: String,
    /// Outline stroke width.
    #[arg(long, default_value_t = 2.0)]
    outline_width: f64,
    /// Distance from an edge that still grabs it.
    #[arg(long, default_value_t = 8.0)]
    threshold: f64,
    /// Smallest width and height a drag can produce.
    #[arg(long, default_value_t = 20.0)]
    min_size: f64,
    /// A drag as `X0,Y0:X1,Y1` in surface coordinates. May be repeated.
    #[arg(long = "drag", value_parser = parse_drag)]
    drags: Vec<Drag>,
    /// Pointer moves per drag.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,
    /// Output file; standard output when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    from: Point,
    to: Point,
}

fn parse_numbers<const N: usize>(value: &str) -> Result<[f64; N], String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("{value:?}: {err}"))?;
    if parts.iter().any(|v| !v.is_finite()) {
        return Err(format!("{value:?}: values must be finite"));
    }
    <[f64; N]>::try_from(parts).map_err(|parts| {
        format!("{value:?}: expected {N} numbers, found {}", parts.len())
    })
}

fn parse_point(value: &str) -> Result<Point, String> {
    let [x, y] = parse_numbers(value)?;
    Ok(Point::new(x, y))
}

fn parse_drag(value: &str) -> Result<Drag, String> {
    let (from, to) = value
        .split_once(':')
        .ok_or_else(|| format!("{value:?}: expected X0,Y0:X1,Y1"))?;
    Ok(Drag {
        from: parse_point(from)?,
        to: parse_point(to)?,
    })
}

fn parse_frame(value: &str) -> Result<Rect, String> {
    let [x, y, width, height] = parse_numbers(value)?;
    Ok(Rect::from_origin_size((x, y), (width, height)))
}

/// Stand-in layout engine: one bar per line of text.
///
/// Bars are `size` tall on a 1.5 line pitch. Hebrew runs right to left, so
/// its bars hang from the right edge.
#[derive(Debug, Default)]
struct LineEngine;

impl PathEngine for LineEngine {
    async fn initialize(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    fn get_paths(&self, request: &PathRequest) -> Vec<String> {
        let bounds = request.bounds();
        let size = f64::from(request.size);
        let rtl = Variant::from_index(request.variant_index) == Variant::Hebrew;
        let mut paths = Vec::new();
        let mut top = bounds.y0;
        for fraction in LINE_FRACTIONS.iter().cycle() {
            if top + size > bounds.y1 {
                break;
            }
            let length = bounds.width() * fraction;
            let (x0, x1) = if rtl {
                (bounds.x1 - length, bounds.x1)
            } else {
                (bounds.x0, bounds.x0 + length)
            };
            paths.push(rect_path_data(Rect::new(x0, top, x1, top + size)));
            top += size * 1.5;
        }
        paths
    }
}

fn replay(editor: &mut Editor<SvgSurface, LineEngine>, drag: Drag, steps: u32) {
    editor.handle_pointer(PointerEvent::Down(drag.from));
    if !editor.resize_controller().is_resizing() {
        tracing::warn!(x = drag.from.x, y = drag.from.y, "drag does not start on an edge");
    }
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        editor.handle_pointer(PointerEvent::Move(drag.from.lerp(drag.to, t)));
    }
    editor.handle_pointer(PointerEvent::Up(drag.to));
    tracing::info!(frame = ?editor.frame(), "drag replayed");
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textframe=info,svg_session=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = EditorConfig {
        initial_frame: args.frame,
        resize: ResizeConfig {
            edge_threshold: args.threshold,
            min_size: args.min_size,
        },
        outline: OutlineStyle {
            color: parse_color_value(&args.outline_color)?,
            width: args.outline_width,
        },
        style: Style {
            variant: Variant::from_name(&args.variant),
            size: args.size,
            color: parse_color_value(&args.color)?,
        },
    };

    let surface = SvgSurface::new(Size::new(args.width, args.height));
    let mut editor = Editor::new(surface, LineEngine, config);
    let status = pollster::block_on(editor.start());
    tracing::info!(?status, variant = editor.style().variant.name(), "session started");

    for drag in &args.drags {
        replay(&mut editor, *drag, args.steps);
    }

    let svg = editor.surface().to_svg();
    match &args.out {
        Some(path) => {
            std::fs::write(path, svg)?;
            tracing::info!(path = %path.display(), "wrote svg");
        }
        None => println!("{svg}"),
    }
    Ok(())
}
