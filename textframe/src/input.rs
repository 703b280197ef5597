// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-independent pointer events.

use kurbo::{Point, Vec2};

/// A single-pointer event in client (window) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down(Point),
    /// Pointer moved, with or without a button held.
    Move(Point),
    /// Primary button released.
    Up(Point),
    /// Pointer left the surface.
    Leave,
}

impl PointerEvent {
    /// Client-space position, if the event carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Down(pos) | Self::Move(pos) | Self::Up(pos) => Some(pos),
            Self::Leave => None,
        }
    }

    /// The same event with its position made relative to a surface whose
    /// top-left corner sits at `offset` in client space.
    pub fn to_surface(self, offset: Vec2) -> Self {
        match self {
            Self::Down(pos) => Self::Down(pos - offset),
            Self::Move(pos) => Self::Move(pos - offset),
            Self::Up(pos) => Self::Up(pos - offset),
            Self::Leave => Self::Leave,
        }
    }
}
