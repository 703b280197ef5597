// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface.
//!
//! [`SvgSurface`] keeps the elements drawn since the last clear and can
//! export them as a standalone SVG document. This is intended for snapshots
//! and debugging, not as an interactive surface: cursors are remembered but
//! have no visual effect.

use core::fmt::Write as _;

use kurbo::{Rect, Size};
use peniko::Color;
use textframe_resize::CursorKind;

use crate::{OutlineStyle, Surface};

/// A surface that renders into SVG markup.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    size: Size,
    cursor: CursorKind,
    body: String,
}

impl SvgSurface {
    /// Create an empty surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cursor: CursorKind::Default,
            body: String::new(),
        }
    }

    /// The cursor most recently set.
    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    /// Export the current contents as an SVG document.
    ///
    /// The surface size is used for both `width`/`height` and the `viewBox`.
    pub fn to_svg(&self) -> String {
        let w = fmt_num(self.size.width);
        let h = fmt_num(self.size.height);
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.body.clear();
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_rect(&mut self, rect: Rect, outline: &OutlineStyle) {
        let (stroke, opacity) = color_to_svg(outline.color);
        let _ = write!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\"",
            fmt_num(rect.x0),
            fmt_num(rect.y0),
            fmt_num(rect.width()),
            fmt_num(rect.height()),
            fmt_num(outline.width),
        );
        if opacity < 1.0 {
            let _ = write!(self.body, " stroke-opacity=\"{opacity}\"");
        }
        self.body.push_str("/>");
    }

    fn fill_path(&mut self, path_data: &str, color: Color) {
        let (fill, opacity) = color_to_svg(color);
        let _ = write!(
            self.body,
            "<path d=\"{}\" fill=\"{fill}\"",
            escape_attr(path_data.trim())
        );
        if opacity < 1.0 {
            let _ = write!(self.body, " fill-opacity=\"{opacity}\"");
        }
        self.body.push_str("/>");
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.cursor = cursor;
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_num(v: f64) -> String {
    // Whole numbers print without a decimal point.
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let surface = SvgSurface::new(Size::new(600.0, 700.0));
        assert_eq!(
            surface.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"700\" viewBox=\"0 0 600 700\"></svg>"
        );
    }

    #[test]
    fn outline_and_fill() {
        let mut surface = SvgSurface::new(Size::new(100.0, 100.0));
        surface.stroke_rect(
            Rect::new(10.0, 10.0, 90.5, 60.0),
            &OutlineStyle {
                color: Color::from_rgb8(0, 255, 255),
                width: 5.0,
            },
        );
        surface.fill_path("M0 0L10 0L10 10Z ", Color::from_rgb8(255, 0, 0));

        let svg = surface.to_svg();
        assert!(svg.contains(
            "<rect x=\"10\" y=\"10\" width=\"80.5\" height=\"50\" fill=\"none\" stroke=\"#00ffff\" stroke-width=\"5\"/>"
        ));
        assert!(svg.contains("<path d=\"M0 0L10 0L10 10Z\" fill=\"#ff0000\"/>"));
    }

    #[test]
    fn translucent_fill_gets_opacity() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.fill_path("M0 0Z", Color::from_rgba8(0, 0, 0, 0));
        assert!(surface.to_svg().contains("fill-opacity=\"0\""));
    }

    #[test]
    fn clear_discards_elements() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.fill_path("M0 0Z", Color::BLACK);
        surface.clear();
        assert!(!surface.to_svg().contains("<path"));
    }

    #[test]
    fn path_data_is_escaped() {
        let mut surface = SvgSurface::new(Size::new(10.0, 10.0));
        surface.fill_path("M0 0\"/><script/>", Color::BLACK);
        let svg = surface.to_svg();
        assert!(!svg.contains("<script"));
        assert!(svg.contains("&quot;"));
    }
}
