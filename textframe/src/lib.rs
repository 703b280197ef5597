// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=textframe --heading-base-level=0

//! Textframe: an interactive, resizable frame filled by an external path engine.
//!
//! [`Editor`] is the application context. It owns a
//! [`ResizeController`](textframe_resize::ResizeController), the current
//! [`Style`](textframe_render::Style), a [`PathEngine`](textframe_render::PathEngine)
//! slot, and a [`Surface`](textframe_render::Surface). Hosts feed it pointer
//! events, style changes, and surface resizes; the editor keeps the picture in
//! sync.
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use textframe::{Editor, EditorConfig, PointerEvent};
//! use textframe_render::{EngineStatus, RecordingEngine, RecordingSurface};
//!
//! let mut editor = Editor::new(
//!     RecordingSurface::default(),
//!     RecordingEngine::default(),
//!     EditorConfig::default(),
//! );
//! assert_eq!(pollster::block_on(editor.start()), EngineStatus::Ready);
//!
//! // The surface sits at (20, 10) inside the window.
//! editor.set_surface_offset(Vec2::new(20.0, 10.0));
//!
//! // Drag the right edge of the default frame 50 units outwards.
//! editor.handle_pointer(PointerEvent::Down(Point::new(720.0, 310.0)));
//! editor.handle_pointer(PointerEvent::Move(Point::new(770.0, 310.0)));
//! editor.handle_pointer(PointerEvent::Up(Point::new(770.0, 310.0)));
//!
//! assert_eq!(editor.frame().width(), 650.0);
//! ```

mod editor;
mod input;

pub use editor::{Editor, EditorConfig};
pub use input::PointerEvent;

pub use textframe_render as render;
pub use textframe_resize as resize;
