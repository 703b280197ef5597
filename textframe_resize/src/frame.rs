// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame geometry: the resizable rectangle and its minimum-size clamp.
//!
//! ## Usage
//!
//! 1) Create a [`FrameGeometry`] from an initial rectangle (or use the default).
//! 2) Feed it resize steps with [`FrameGeometry::apply_delta`], naming which
//!    edges are being dragged.
//! 3) Read the result with [`FrameGeometry::rect`].
//!
//! Left and top edges move by the pointer *delta*: the origin shifts and the
//! extent grows by the same amount in the opposite direction. Right and bottom
//! edges follow the pointer *position* directly, so the extent is always
//! `pointer - origin` on those axes.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use textframe_resize::{EdgeSet, FrameGeometry};
//!
//! let mut frame = FrameGeometry::new(Rect::new(100.0, 100.0, 700.0, 500.0));
//!
//! // Drag the left edge 50 units to the left.
//! frame.apply_delta(EdgeSet::LEFT, Vec2::new(-50.0, 0.0), Point::new(50.0, 300.0));
//! assert_eq!(frame.x(), 50.0);
//! assert_eq!(frame.width(), 650.0);
//! ```

use kurbo::{Point, Rect, Size, Vec2};

use crate::EdgeSet;

/// Smallest width and height a frame may have.
pub const MIN_SIZE: f64 = 20.0;

/// The frame used when nothing else is configured.
pub const DEFAULT_FRAME: Rect = Rect::new(100.0, 100.0, 700.0, 500.0);

/// Owner of the current frame rectangle.
///
/// Width and height never drop below the configured minimum after a
/// mutation; values that would are clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    origin: Point,
    size: Size,
    min_size: f64,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME)
    }
}

impl FrameGeometry {
    /// Create a frame from `rect`, clamped to [`MIN_SIZE`].
    pub fn new(rect: Rect) -> Self {
        Self::with_min_size(rect, MIN_SIZE)
    }

    /// Create a frame from `rect` with a custom minimum extent.
    pub fn with_min_size(rect: Rect, min_size: f64) -> Self {
        let rect = rect.abs();
        let mut frame = Self {
            origin: rect.origin(),
            size: rect.size(),
            min_size,
        };
        frame.clamp();
        frame
    }

    /// The current frame as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Left edge position.
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge position.
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Minimum width and height enforced by [`FrameGeometry::apply_delta`].
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Adjust the frame for a pointer step while dragging `edges`.
    ///
    /// `delta` is the pointer movement since the previous step and `pointer`
    /// is the current pointer position. Edges not present in `edges` are
    /// left alone.
    pub fn apply_delta(&mut self, edges: EdgeSet, delta: Vec2, pointer: Point) {
        if edges.contains(EdgeSet::LEFT) {
            let change = -delta.x;
            self.size.width += change;
            self.origin.x -= change;
        } else if edges.contains(EdgeSet::RIGHT) {
            self.size.width = pointer.x - self.origin.x;
        }

        if edges.contains(EdgeSet::TOP) {
            let change = -delta.y;
            self.size.height += change;
            self.origin.y -= change;
        } else if edges.contains(EdgeSet::BOTTOM) {
            self.size.height = pointer.y - self.origin.y;
        }

        self.clamp();
    }

    // Extents only; the origin stays where the step put it.
    fn clamp(&mut self) {
        if self.size.width.is_nan() || self.size.width < self.min_size {
            self.size.width = self.min_size;
        }
        if self.size.height.is_nan() || self.size.height < self.min_size {
            self.size.height = self.min_size;
        }
    }
}
