// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The application context that wires input, resize state, and rendering.

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use textframe_render::{
    EngineError, EngineSlot, EngineStatus, OutlineStyle, PathEngine, RenderPipeline, RenderReport,
    Style, Surface, Variant, parse_color_value, parse_size,
};
use textframe_resize::{
    ControllerResponse, CursorKind, DEFAULT_FRAME, ResizeConfig, ResizeController,
};

use crate::PointerEvent;

/// Startup configuration for an [`Editor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
    /// Frame shown before any resize.
    pub initial_frame: Rect,
    /// Edge threshold and minimum size.
    pub resize: ResizeConfig,
    /// Outline stroke.
    pub outline: OutlineStyle,
    /// Initial style control values.
    pub style: Style,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_frame: DEFAULT_FRAME,
            resize: ResizeConfig::default(),
            outline: OutlineStyle::default(),
            style: Style::default(),
        }
    }
}

/// One resizable text frame on one surface.
///
/// The editor is the single owner of all mutable state: the resize
/// controller (and through it the frame), the style, the engine slot, and the
/// surface. Every state change that affects the picture re-renders before
/// the call returns.
#[derive(Debug)]
pub struct Editor<S, E> {
    resize: ResizeController,
    pipeline: RenderPipeline,
    style: Style,
    engine: EngineSlot<E>,
    surface: S,
    surface_offset: Vec2,
    last_report: Option<RenderReport>,
}

impl<S: Surface, E: PathEngine> Editor<S, E> {
    /// Create an editor and draw the initial outline.
    ///
    /// The engine is not initialized yet; call [`Editor::start`] once.
    pub fn new(surface: S, engine: E, config: EditorConfig) -> Self {
        let mut editor = Self {
            resize: ResizeController::new(config.initial_frame, config.resize),
            pipeline: RenderPipeline::new(config.outline),
            style: config.style,
            engine: EngineSlot::new(engine),
            surface,
            surface_offset: Vec2::ZERO,
            last_report: None,
        };
        editor.render();
        editor
    }

    /// Initialize the path engine and render the result.
    ///
    /// Failure is logged by the engine slot and leaves the editor drawing
    /// outlines only for the rest of the session.
    pub async fn start(&mut self) -> EngineStatus {
        // The slot has already logged any failure.
        let _ = self.engine.initialize().await;
        self.render();
        self.engine.status()
    }

    /// Finish startup with the outcome of an initialization run elsewhere.
    ///
    /// For hosts that share the editor with event handlers and so initialize
    /// a clone of the engine instead of awaiting [`Editor::start`].
    pub fn complete_start(&mut self, result: Result<(), EngineError>) -> EngineStatus {
        let _ = self.engine.complete(result);
        self.render();
        self.engine.status()
    }

    /// Clear the surface and draw the current frame.
    pub fn render(&mut self) -> RenderReport {
        let report = self.pipeline.render(
            &mut self.surface,
            self.resize.frame().rect(),
            &self.style,
            &self.engine,
        );
        self.last_report = Some(report);
        report
    }

    /// Dispatch a pointer event given in client coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> ControllerResponse {
        match event.to_surface(self.surface_offset) {
            PointerEvent::Down(pos) => {
                self.pointer_down(pos);
                ControllerResponse::NONE
            }
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up(_) => {
                self.pointer_up();
                ControllerResponse::NONE
            }
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Press at `pos` in surface coordinates.
    pub fn pointer_down(&mut self, pos: Point) {
        if let Some(edges) = self.resize.pointer_down(pos) {
            tracing::debug!(edges = ?edges, x = pos.x, y = pos.y, "resize started");
        }
    }

    /// Move to `pos` in surface coordinates.
    pub fn pointer_move(&mut self, pos: Point) -> ControllerResponse {
        let response = self.resize.pointer_move(pos);
        self.apply(response);
        response
    }

    /// Release the pointer.
    pub fn pointer_up(&mut self) {
        if let Some(edges) = self.resize.pointer_up() {
            tracing::debug!(edges = ?edges, frame = ?self.frame(), "resize finished");
        }
    }

    /// The pointer left the surface.
    pub fn pointer_leave(&mut self) -> ControllerResponse {
        if self.resize.is_resizing() {
            tracing::debug!(frame = ?self.frame(), "resize ended by pointer leaving");
        }
        let response = self.resize.pointer_leave();
        self.apply(response);
        response
    }

    /// Record where the surface's top-left corner is in client space.
    pub fn set_surface_offset(&mut self, offset: Vec2) {
        self.surface_offset = offset;
    }

    /// Resize the surface (usually to follow its container) and re-render.
    pub fn resize_surface(&mut self, size: Size) -> RenderReport {
        self.surface.resize(size);
        self.render()
    }

    /// Replace all style values and re-render.
    pub fn set_style(&mut self, style: Style) -> RenderReport {
        self.style = style;
        self.render()
    }

    /// Select a variant by its control value and re-render.
    pub fn set_variant(&mut self, name: &str) -> RenderReport {
        self.set_style(Style {
            variant: Variant::from_name(name),
            ..self.style
        })
    }

    /// Set the text size and re-render.
    pub fn set_size(&mut self, size: u32) -> RenderReport {
        self.set_style(Style { size, ..self.style })
    }

    /// Set the fill color and re-render.
    pub fn set_color(&mut self, color: Color) -> RenderReport {
        self.set_style(Style {
            color,
            ..self.style
        })
    }

    /// Set the text size from a control value.
    ///
    /// Values that are not positive integers are logged and ignored; the
    /// frame is re-rendered either way.
    pub fn set_size_value(&mut self, value: &str) -> RenderReport {
        match parse_size(value) {
            Ok(size) => self.set_size(size),
            Err(err) => {
                tracing::warn!(%err, "keeping previous size");
                self.render()
            }
        }
    }

    /// Set the fill color from a CSS color control value.
    ///
    /// Unparseable values are logged and ignored; the frame is re-rendered
    /// either way.
    pub fn set_color_value(&mut self, value: &str) -> RenderReport {
        match parse_color_value(value) {
            Ok(color) => self.set_color(color),
            Err(err) => {
                tracing::warn!(%err, "keeping previous color");
                self.render()
            }
        }
    }

    fn apply(&mut self, response: ControllerResponse) {
        if let Some(cursor) = response.cursor {
            self.surface.set_cursor(cursor);
        }
        if response.redraw {
            self.render();
        }
    }
}

impl<S, E> Editor<S, E> {
    /// The current frame.
    pub fn frame(&self) -> Rect {
        self.resize.frame().rect()
    }

    /// The resize controller, for inspecting session state.
    pub fn resize_controller(&self) -> &ResizeController {
        &self.resize
    }

    /// Current style values.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Engine lifecycle state.
    pub fn status(&self) -> EngineStatus {
        self.engine.status()
    }

    /// The path engine.
    pub fn engine(&self) -> &E {
        self.engine.engine()
    }

    /// A handle to initialize outside the editor, while startup is pending.
    ///
    /// Returns `None` once [`Editor::start`] or [`Editor::complete_start`] has
    /// recorded an outcome, so the engine is initialized at most once.
    pub fn engine_to_initialize(&self) -> Option<E>
    where
        E: Clone,
    {
        match self.status() {
            EngineStatus::Loading => Some(self.engine().clone()),
            EngineStatus::Ready | EngineStatus::Failed => None,
        }
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Outcome of the most recent render.
    pub fn last_report(&self) -> Option<RenderReport> {
        self.last_report
    }

    /// Cursor the editor would show at `pos`, in surface coordinates.
    pub fn cursor_at(&self, pos: Point) -> CursorKind {
        self.resize.cursor_at(pos)
    }
}
