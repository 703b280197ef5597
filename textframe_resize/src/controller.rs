// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize controller: a two-state machine driven by pointer events.
//!
//! ## Usage
//!
//! 1) Forward pointer presses to [`ResizeController::pointer_down`]. A press on
//!    an edge or corner starts a resize session; anywhere else is a no-op.
//! 2) Forward pointer motion to [`ResizeController::pointer_move`]. While a
//!    session is active the frame follows the pointer; otherwise only a new
//!    cursor is reported.
//! 3) End the session with [`ResizeController::pointer_up`] or
//!    [`ResizeController::pointer_leave`].
//!
//! Every call returns a [`ControllerResponse`] telling the caller whether to
//! re-render and which cursor to show. The controller never draws.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use textframe_resize::ResizeController;
//!
//! let mut resize = ResizeController::default();
//!
//! // Press on the right edge of the default (100, 100, 600x400) frame.
//! assert!(resize.pointer_down(Point::new(700.0, 300.0)).is_some());
//! let response = resize.pointer_move(Point::new(750.0, 300.0));
//! assert!(response.redraw);
//! assert_eq!(resize.frame().width(), 650.0);
//!
//! resize.pointer_up();
//! assert!(!resize.is_resizing());
//! ```

use kurbo::{Point, Rect};

use crate::{CursorKind, EdgeSet, FrameGeometry, classify, cursor_for};
use crate::{EDGE_THRESHOLD, MIN_SIZE};

/// Tunables for edge hit testing and the minimum frame size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeConfig {
    /// Distance within which the pointer counts as being on an edge.
    pub edge_threshold: f64,
    /// Smallest width and height the frame may be resized to.
    pub min_size: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            edge_threshold: EDGE_THRESHOLD,
            min_size: MIN_SIZE,
        }
    }
}

/// State of an in-progress resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    /// Edges captured at press time.
    pub edges: EdgeSet,
    /// Last pointer position applied to the frame.
    pub last_pos: Point,
}

/// What the caller should do after feeding the controller an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ControllerResponse {
    /// The frame changed and the surface should be re-rendered.
    pub redraw: bool,
    /// The surface cursor should be changed to this kind.
    pub cursor: Option<CursorKind>,
}

impl ControllerResponse {
    /// Nothing to do.
    pub const NONE: Self = Self {
        redraw: false,
        cursor: None,
    };

    fn redraw() -> Self {
        Self {
            redraw: true,
            cursor: None,
        }
    }

    fn cursor(cursor: CursorKind) -> Self {
        Self {
            redraw: false,
            cursor: Some(cursor),
        }
    }
}

/// Owns the frame geometry and the optional resize session.
///
/// The controller is `Idle` while [`ResizeController::session`] is `None` and
/// `Resizing` otherwise. It is the only writer of the frame.
#[derive(Clone, Debug, Default)]
pub struct ResizeController {
    frame: FrameGeometry,
    config: ResizeConfig,
    session: Option<ResizeSession>,
}

impl ResizeController {
    /// Create a controller for `frame` with the given configuration.
    pub fn new(frame: Rect, config: ResizeConfig) -> Self {
        Self {
            frame: FrameGeometry::with_min_size(frame, config.min_size),
            config,
            session: None,
        }
    }

    /// The current frame geometry.
    pub fn frame(&self) -> &FrameGeometry {
        &self.frame
    }

    /// The active configuration.
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// The in-progress session, if any.
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a resize session is active.
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Classify `pos` against the current frame.
    pub fn classify(&self, pos: Point) -> EdgeSet {
        classify(pos, self.frame.rect(), self.config.edge_threshold)
    }

    /// Cursor for `pos` against the current frame, ignoring any session.
    pub fn cursor_at(&self, pos: Point) -> CursorKind {
        let rect = self.frame.rect();
        let edges = classify(pos, rect, self.config.edge_threshold);
        cursor_for(edges, pos, rect, self.config.edge_threshold)
    }

    /// Handle a pointer press.
    ///
    /// Starts a session and returns its edges when `pos` is on an edge or
    /// corner. Returns `None` and stays idle otherwise. A press while a
    /// session is already active restarts it from `pos`.
    pub fn pointer_down(&mut self, pos: Point) -> Option<EdgeSet> {
        let edges = self.classify(pos);
        if edges.is_empty() {
            return None;
        }
        self.session = Some(ResizeSession {
            edges,
            last_pos: pos,
        });
        Some(edges)
    }

    /// Handle pointer motion.
    pub fn pointer_move(&mut self, pos: Point) -> ControllerResponse {
        match self.session.as_mut() {
            Some(session) => {
                let delta = pos - session.last_pos;
                self.frame.apply_delta(session.edges, delta, pos);
                session.last_pos = pos;
                ControllerResponse::redraw()
            }
            None => ControllerResponse::cursor(self.cursor_at(pos)),
        }
    }

    /// Handle a pointer release, ending any session.
    ///
    /// Returns the edges of the session that ended, if there was one.
    pub fn pointer_up(&mut self) -> Option<EdgeSet> {
        self.session.take().map(|session| session.edges)
    }

    /// Handle the pointer leaving the surface.
    ///
    /// Ends any session and always resets the cursor to the default.
    pub fn pointer_leave(&mut self) -> ControllerResponse {
        self.session = None;
        ControllerResponse::cursor(CursorKind::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_FRAME;

    #[test]
    fn starts_idle_with_default_frame() {
        let resize = ResizeController::default();
        assert!(!resize.is_resizing());
        assert_eq!(resize.frame().rect(), DEFAULT_FRAME);
        assert_eq!(*resize.config(), ResizeConfig::default());
    }

    #[test]
    fn press_in_interior_is_a_no_op() {
        let mut resize = ResizeController::default();
        assert_eq!(resize.pointer_down(Point::new(400.0, 300.0)), None);
        assert!(resize.session().is_none());
    }

    #[test]
    fn press_on_edge_records_session() {
        let mut resize = ResizeController::default();
        let press = Point::new(100.0, 300.0);
        assert_eq!(resize.pointer_down(press), Some(EdgeSet::LEFT));
        assert_eq!(
            resize.session(),
            Some(&ResizeSession {
                edges: EdgeSet::LEFT,
                last_pos: press,
            })
        );
    }

    #[test]
    fn left_drag_grows_and_shifts() {
        let mut resize = ResizeController::default();
        resize.pointer_down(Point::new(100.0, 300.0));
        let response = resize.pointer_move(Point::new(50.0, 300.0));

        assert_eq!(response, ControllerResponse::redraw());
        assert_eq!(resize.frame().x(), 50.0);
        assert_eq!(resize.frame().width(), 650.0);
        assert_eq!(
            resize.session().map(|s| s.last_pos),
            Some(Point::new(50.0, 300.0))
        );
    }

    #[test]
    fn deltas_are_incremental() {
        let mut resize = ResizeController::default();
        resize.pointer_down(Point::new(100.0, 300.0));
        resize.pointer_move(Point::new(90.0, 300.0));
        resize.pointer_move(Point::new(70.0, 300.0));
        assert_eq!(resize.frame().x(), 70.0);
        assert_eq!(resize.frame().width(), 630.0);
    }

    #[test]
    fn idle_move_reports_cursor_only() {
        let mut resize = ResizeController::default();
        let response = resize.pointer_move(Point::new(700.0, 500.0));
        assert_eq!(
            response,
            ControllerResponse::cursor(CursorKind::DiagonalResizeNwse)
        );
        assert_eq!(resize.frame().rect(), DEFAULT_FRAME);
    }

    #[test]
    fn up_ends_session() {
        let mut resize = ResizeController::default();
        resize.pointer_down(Point::new(700.0, 300.0));
        assert_eq!(resize.pointer_up(), Some(EdgeSet::RIGHT));
        assert_eq!(resize.pointer_up(), None);

        resize.pointer_move(Point::new(900.0, 300.0));
        assert_eq!(resize.frame().width(), 600.0);
    }

    #[test]
    fn leave_ends_session_and_resets_cursor() {
        let mut resize = ResizeController::default();
        resize.pointer_down(Point::new(400.0, 500.0));
        resize.pointer_move(Point::new(400.0, 550.0));

        let response = resize.pointer_leave();
        assert_eq!(response, ControllerResponse::cursor(CursorKind::Default));
        assert!(!resize.is_resizing());
        assert_eq!(resize.frame().height(), 450.0);
    }

    #[test]
    fn custom_config_changes_threshold_and_minimum() {
        let config = ResizeConfig {
            edge_threshold: 2.0,
            min_size: 50.0,
        };
        let mut resize = ResizeController::new(DEFAULT_FRAME, config);
        assert_eq!(resize.pointer_down(Point::new(105.0, 300.0)), None);

        resize.pointer_down(Point::new(701.0, 300.0));
        resize.pointer_move(Point::new(0.0, 300.0));
        assert_eq!(resize.frame().width(), 50.0);
    }
}
