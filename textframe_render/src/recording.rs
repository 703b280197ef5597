// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording implementations of [`Surface`] and [`PathEngine`].
//!
//! Neither of these draws or lays out anything. They record what they were
//! asked to do so tests and debugging tools can assert on the exact calls the
//! pipeline made.

use core::cell::RefCell;
use core::fmt::Write as _;

use kurbo::{Rect, Size};
use peniko::Color;
use textframe_resize::CursorKind;

use crate::{EngineError, OutlineStyle, PathEngine, PathRequest, Surface};

/// One call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::stroke_rect`].
    StrokeRect {
        /// Stroked rectangle.
        rect: Rect,
        /// Outline style used.
        outline: OutlineStyle,
    },
    /// [`Surface::fill_path`].
    FillPath {
        /// Path data as passed in.
        data: String,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::set_cursor`].
    SetCursor(CursorKind),
    /// [`Surface::resize`].
    Resize(Size),
}

/// A surface that logs every call.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    cursor: CursorKind,
    ops: Vec<SurfaceOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0))
    }
}

impl RecordingSurface {
    /// Create a recording surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cursor: CursorKind::Default,
            ops: Vec::new(),
        }
    }

    /// Every recorded call, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Calls made since the most recent [`SurfaceOp::Clear`], including it.
    ///
    /// This is what is currently visible on a real surface.
    pub fn last_frame(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == SurfaceOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    /// Number of times the surface was cleared, i.e. renders started.
    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == SurfaceOp::Clear).count()
    }

    /// The cursor most recently set.
    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.ops.push(SurfaceOp::Resize(size));
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke_rect(&mut self, rect: Rect, outline: &OutlineStyle) {
        self.ops.push(SurfaceOp::StrokeRect {
            rect,
            outline: *outline,
        });
    }

    fn fill_path(&mut self, path_data: &str, color: Color) {
        self.ops.push(SurfaceOp::FillPath {
            data: path_data.to_owned(),
            color,
        });
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.cursor = cursor;
        self.ops.push(SurfaceOp::SetCursor(cursor));
    }
}

#[derive(Clone, Debug)]
enum Output {
    /// One closed rectangle tracing the request bounds.
    Bounds,
    /// The same paths for every request.
    Fixed(Vec<String>),
}

/// A path engine stand-in that records requests.
///
/// By default every request yields a single rectangle path covering the
/// requested bounds, so output follows the frame as it is resized.
#[derive(Clone, Debug)]
pub struct RecordingEngine {
    output: Output,
    failure: Option<String>,
    init_calls: usize,
    requests: RefCell<Vec<PathRequest>>,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self {
            output: Output::Bounds,
            failure: None,
            init_calls: 0,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingEngine {
    /// An engine that answers every request with `paths`.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            output: Output::Fixed(paths.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// An engine whose initialization fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<PathRequest> {
        self.requests.borrow().clone()
    }

    /// How many times [`PathEngine::initialize`] was called.
    pub fn init_calls(&self) -> usize {
        self.init_calls
    }
}

impl PathEngine for RecordingEngine {
    async fn initialize(&mut self) -> Result<(), EngineError> {
        self.init_calls += 1;
        match &self.failure {
            Some(reason) => Err(EngineError::Load {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn get_paths(&self, request: &PathRequest) -> Vec<String> {
        self.requests.borrow_mut().push(*request);
        match &self.output {
            Output::Fixed(paths) => paths.clone(),
            Output::Bounds => vec![rect_path_data(request.bounds())],
        }
    }
}

/// SVG path data for a closed rectangle.
pub fn rect_path_data(rect: Rect) -> String {
    let mut d = String::new();
    let _ = write!(
        d,
        "M{} {}L{} {}L{} {}L{} {}Z",
        rect.x0, rect.y0, rect.x1, rect.y0, rect.x1, rect.y1, rect.x0, rect.y1
    );
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_frame_starts_at_latest_clear() {
        let mut surface = RecordingSurface::default();
        surface.clear();
        surface.fill_path("M0 0Z", Color::BLACK);
        surface.clear();
        surface.set_cursor(CursorKind::TextEntry);

        assert_eq!(
            surface.last_frame(),
            &[SurfaceOp::Clear, SurfaceOp::SetCursor(CursorKind::TextEntry)]
        );
        assert_eq!(surface.clear_count(), 2);
        assert_eq!(surface.cursor(), CursorKind::TextEntry);
    }

    #[test]
    fn resize_updates_size() {
        let mut surface = RecordingSurface::default();
        surface.resize(Size::new(320.0, 240.0));
        assert_eq!(surface.size(), Size::new(320.0, 240.0));
        assert_eq!(surface.ops(), &[SurfaceOp::Resize(Size::new(320.0, 240.0))]);
    }

    #[test]
    fn default_engine_traces_bounds() {
        let engine = RecordingEngine::default();
        let request = PathRequest {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
            size: 16,
            variant_index: 0,
        };
        assert_eq!(engine.get_paths(&request), vec!["M10 20L40 20L40 60L10 60Z"]);
        assert_eq!(engine.requests(), vec![request]);
    }
}
