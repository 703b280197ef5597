// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `wasm_bindgen` entry point.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use kurbo::{Point, Size, Vec2};
use textframe::{Editor, EditorConfig, PointerEvent};
use textframe_render::{EngineStatus, PathEngine, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::{CanvasSurface, JsPathEngine};

type WebEditor = Editor<CanvasSurface, JsPathEngine>;

fn status_name(status: EngineStatus) -> &'static str {
    match status {
        EngineStatus::Loading => "loading",
        EngineStatus::Ready => "ready",
        EngineStatus::Failed => "failed",
    }
}

/// A resizable text frame on a page canvas.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebTextFrame {
    editor: Rc<RefCell<WebEditor>>,
}

#[wasm_bindgen]
impl WebTextFrame {
    /// Create a frame on `canvas` and draw its outline.
    ///
    /// See [`JsPathEngine`] for the callback contract.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web_sys::HtmlCanvasElement,
        get_paths: Function,
        init: Option<Function>,
    ) -> Result<Self, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let engine = JsPathEngine::new(get_paths, init);
        let editor = Editor::new(surface, engine, EditorConfig::default());
        Ok(Self {
            editor: Rc::new(RefCell::new(editor)),
        })
    }

    /// Initialize the path engine.
    ///
    /// Resolves to `"ready"` or `"failed"`. The frame stays interactive while
    /// the engine loads. Once startup has finished, later calls resolve to the
    /// recorded outcome without calling `init` again.
    pub fn start(&self) -> Promise {
        let Some(mut engine) = self.editor.borrow().engine_to_initialize() else {
            let status = self.editor.borrow().status();
            return Promise::resolve(&JsValue::from_str(status_name(status)));
        };
        let editor = Rc::clone(&self.editor);
        future_to_promise(async move {
            let result = engine.initialize().await;
            let status = editor.borrow_mut().complete_start(result);
            Ok(JsValue::from_str(status_name(status)))
        })
    }

    /// Engine state: `"loading"`, `"ready"`, or `"failed"`.
    pub fn status(&self) -> String {
        status_name(self.editor.borrow().status()).into()
    }

    /// Primary button pressed at client coordinates.
    pub fn pointer_down(&self, client_x: f64, client_y: f64) {
        self.dispatch(PointerEvent::Down(Point::new(client_x, client_y)));
    }

    /// Pointer moved to client coordinates.
    pub fn pointer_move(&self, client_x: f64, client_y: f64) {
        self.dispatch(PointerEvent::Move(Point::new(client_x, client_y)));
    }

    /// Primary button released at client coordinates.
    pub fn pointer_up(&self, client_x: f64, client_y: f64) {
        self.dispatch(PointerEvent::Up(Point::new(client_x, client_y)));
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&self) {
        self.dispatch(PointerEvent::Leave);
    }

    /// Select the sample input by control value (`korean`, `hebrew`,
    /// `french`, `mixed`).
    pub fn set_variant(&self, name: &str) {
        self.editor.borrow_mut().set_variant(name);
    }

    /// Set the text size from a control value.
    pub fn set_size(&self, value: &str) {
        self.editor.borrow_mut().set_size_value(value);
    }

    /// Set the fill color from a CSS color control value.
    pub fn set_color(&self, value: &str) {
        self.editor.borrow_mut().set_color_value(value);
    }

    /// Size the canvas to its parent element and re-render.
    ///
    /// Call once at startup and from the window's `resize` handler.
    pub fn fit_to_container(&self) {
        let mut editor = self.editor.borrow_mut();
        let Some(parent) = editor.surface().canvas().parent_element() else {
            tracing::warn!("canvas has no parent element; keeping its size");
            return;
        };
        let size = Size::new(
            f64::from(parent.client_width()),
            f64::from(parent.client_height()),
        );
        if size != editor.surface().size() {
            editor.resize_surface(size);
        }
    }

    /// Frame left edge in canvas coordinates.
    pub fn frame_x(&self) -> f64 {
        self.editor.borrow().frame().x0
    }

    /// Frame top edge in canvas coordinates.
    pub fn frame_y(&self) -> f64 {
        self.editor.borrow().frame().y0
    }

    /// Frame width.
    pub fn frame_width(&self) -> f64 {
        self.editor.borrow().frame().width()
    }

    /// Frame height.
    pub fn frame_height(&self) -> f64 {
        self.editor.borrow().frame().height()
    }
}

impl WebTextFrame {
    fn dispatch(&self, event: PointerEvent) {
        let mut editor = self.editor.borrow_mut();
        let bounds = editor.surface().canvas().get_bounding_client_rect();
        editor.set_surface_offset(Vec2::new(bounds.left(), bounds.top()));
        editor.handle_pointer(event);
    }
}
