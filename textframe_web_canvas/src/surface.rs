// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas 2D surface.

use kurbo::{Rect, Size};
use peniko::Color;
use textframe_render::{OutlineStyle, Surface};
use textframe_resize::CursorKind;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Path2d};

fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Canvas dimensions are whole pixels; the value is rounded and clamped first."
)]
fn to_pixels(v: f64) -> u32 {
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// A [`Surface`] drawing into an `HtmlCanvasElement`.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas element, acquiring its 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// The underlying canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn resize(&mut self, size: Size) {
        self.canvas.set_width(to_pixels(size.width));
        self.canvas.set_height(to_pixels(size.height));
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn stroke_rect(&mut self, rect: Rect, outline: &OutlineStyle) {
        self.ctx.set_stroke_style_str(&color_to_css(outline.color));
        self.ctx.set_line_width(outline.width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_path(&mut self, path_data: &str, color: Color) {
        match Path2d::new_with_path_string(path_data) {
            Ok(path) => {
                self.ctx.set_fill_style_str(&color_to_css(color));
                self.ctx.fill_with_path_2d(&path);
            }
            Err(err) => tracing::warn!(error = ?err, "skipping unparseable path data"),
        }
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        if let Err(err) = self
            .canvas
            .style()
            .set_property("cursor", cursor.css_name())
        {
            tracing::warn!(error = ?err, "failed to set canvas cursor");
        }
    }
}
