// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=textframe_render --heading-base-level=0

//! Textframe Render: draw a frame and the engine's fill paths onto a surface.
//!
//! # Position in the stack
//!
//! - **Interaction**: `textframe_resize` owns the frame and decides when it
//!   changed.
//! - **Rendering (this crate)**: [`RenderPipeline`] turns the frame, the
//!   current [`Style`], and a [`PathEngine`] into calls on a [`Surface`].
//! - **Backends**: concrete surfaces such as the web canvas backend, or the
//!   in-tree [`SvgSurface`] and [`RecordingSurface`].
//!
//! # Core concepts
//!
//! - [`Surface`]: immediate-mode target with clear, stroke-rect, fill-path,
//!   and cursor primitives.
//! - [`PathEngine`]: the external engine that lays out text as SVG path data.
//!   It is initialized once, asynchronously, through an [`EngineSlot`].
//! - [`RenderPipeline::render`]: clear, stroke the outline, and fill paths
//!   only when the slot reports [`EngineStatus::Ready`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use textframe_render::{
//!     EngineSlot, RecordingEngine, RecordingSurface, RenderPipeline, Style, SurfaceOp,
//! };
//!
//! let pipeline = RenderPipeline::default();
//! let mut surface = RecordingSurface::default();
//! let mut engine = EngineSlot::new(RecordingEngine::default());
//! let frame = Rect::new(100.0, 100.0, 700.0, 500.0);
//!
//! // Before the engine is ready only the outline is drawn.
//! let report = pipeline.render(&mut surface, frame, &Style::default(), &engine);
//! assert_eq!(report.filled_paths, 0);
//!
//! pollster::block_on(engine.initialize()).unwrap();
//! let report = pipeline.render(&mut surface, frame, &Style::default(), &engine);
//! assert_eq!(report.filled_paths, 1);
//! assert!(matches!(surface.last_frame()[2], SurfaceOp::FillPath { .. }));
//! ```

mod engine;
mod pipeline;
mod recording;
mod style;
mod surface;
mod svg;

pub use engine::{EngineError, EngineSlot, EngineStatus, PathEngine, PathRequest};
pub use pipeline::{RenderPipeline, RenderReport};
pub use recording::{RecordingEngine, RecordingSurface, SurfaceOp, rect_path_data};
pub use style::{DEFAULT_SIZE, Style, StyleError, Variant, parse_color_value, parse_size};
pub use surface::{OutlineStyle, Surface};
pub use svg::SvgSurface;

pub use textframe_resize::CursorKind;
