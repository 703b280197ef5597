// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface abstraction.

use kurbo::{Rect, Size};
use peniko::Color;
use textframe_resize::CursorKind;

/// Stroke used for the frame outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x00, 0xbc, 0xd4),
            width: 2.0,
        }
    }
}

/// A 2D immediate-mode drawing target.
///
/// Implementations draw immediately; nothing is retained between calls
/// except whatever pixels (or records) the surface itself keeps.
pub trait Surface {
    /// Current surface dimensions.
    fn size(&self) -> Size;

    /// Change the surface dimensions, typically to match its container.
    ///
    /// Resizing may discard previous contents; callers re-render afterwards.
    fn resize(&mut self, size: Size);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Stroke the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, outline: &OutlineStyle);

    /// Fill a path given as SVG path data (`M`, `L`, `Q`, `C`, `Z` commands).
    fn fill_path(&mut self, path_data: &str, color: Color);

    /// Show `cursor` while the pointer is over the surface.
    fn set_cursor(&mut self, cursor: CursorKind);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn resize(&mut self, size: Size) {
        (**self).resize(size);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn stroke_rect(&mut self, rect: Rect, outline: &OutlineStyle) {
        (**self).stroke_rect(rect, outline);
    }

    fn fill_path(&mut self, path_data: &str, color: Color) {
        (**self).fill_path(path_data, color);
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        (**self).set_cursor(cursor);
    }
}
