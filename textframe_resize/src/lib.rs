// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=textframe_resize --heading-base-level=0

//! Textframe Resize: geometry and interaction state for a resizable frame.
//!
//! This crate holds the headless half of a resizable text frame:
//!
//! - [`frame`]: the frame rectangle and its minimum-size clamp.
//! - [`edge`]: classify a pointer position as an edge, a corner, or nothing.
//! - [`cursor`]: map a classification to a cursor affordance.
//! - [`controller`]: the `Idle`/`Resizing` state machine that ties them together.
//!
//! The crate does not draw anything and does not assume a windowing toolkit.
//! Callers translate their native pointer events into surface coordinates,
//! feed them to a [`ResizeController`], and act on the returned
//! [`ControllerResponse`].
//!
//! ## Edge classification
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use textframe_resize::{EDGE_THRESHOLD, EdgeSet, classify};
//!
//! let frame = Rect::new(100.0, 100.0, 700.0, 500.0);
//!
//! assert_eq!(classify(Point::new(100.0, 300.0), frame, EDGE_THRESHOLD), EdgeSet::LEFT);
//! assert_eq!(classify(Point::new(100.0, 100.0), frame, EDGE_THRESHOLD), EdgeSet::TOP_LEFT);
//! assert!(classify(Point::new(400.0, 300.0), frame, EDGE_THRESHOLD).is_empty());
//! ```
//!
//! ## Cursor feedback
//!
//! ```rust
//! use kurbo::Point;
//! use textframe_resize::{CursorKind, ResizeController};
//!
//! let resize = ResizeController::default();
//! assert_eq!(resize.cursor_at(Point::new(700.0, 300.0)), CursorKind::HorizontalResize);
//! assert_eq!(resize.cursor_at(Point::new(400.0, 300.0)), CursorKind::TextEntry);
//! assert_eq!(resize.cursor_at(Point::new(10.0, 10.0)), CursorKind::Default);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//!
//! This crate is `no_std`.

#![no_std]

pub mod controller;
pub mod cursor;
pub mod edge;
pub mod frame;

pub use controller::{ControllerResponse, ResizeConfig, ResizeController, ResizeSession};
pub use cursor::{CursorKind, cursor_for};
pub use edge::{EDGE_THRESHOLD, EdgeSet, classify};
pub use frame::{DEFAULT_FRAME, FrameGeometry, MIN_SIZE};
