// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor policy: map an edge classification to a pointer affordance.

use cursor_icon::CursorIcon;
use kurbo::{Point, Rect};

use crate::EdgeSet;

/// The cursor a surface should show for the pointer's current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorKind {
    /// Resize along the x axis (left or right edge).
    HorizontalResize,
    /// Resize along the y axis (top or bottom edge).
    VerticalResize,
    /// Diagonal resize from top-left to bottom-right.
    DiagonalResizeNwse,
    /// Diagonal resize from top-right to bottom-left.
    DiagonalResizeNesw,
    /// Text caret, shown over the frame interior.
    TextEntry,
    /// Platform default arrow.
    #[default]
    Default,
}

impl CursorKind {
    /// The matching cross-platform cursor icon.
    pub fn icon(self) -> CursorIcon {
        match self {
            Self::HorizontalResize => CursorIcon::EwResize,
            Self::VerticalResize => CursorIcon::NsResize,
            Self::DiagonalResizeNwse => CursorIcon::NwseResize,
            Self::DiagonalResizeNesw => CursorIcon::NeswResize,
            Self::TextEntry => CursorIcon::Text,
            Self::Default => CursorIcon::Default,
        }
    }

    /// The CSS `cursor` property value for this kind.
    pub fn css_name(self) -> &'static str {
        self.icon().name()
    }

    /// Whether this cursor advertises a resize.
    pub fn is_resize(self) -> bool {
        !matches!(self, Self::TextEntry | Self::Default)
    }
}

impl From<CursorKind> for CursorIcon {
    fn from(kind: CursorKind) -> Self {
        kind.icon()
    }
}

/// Pick the cursor for `pointer` given its classification against `rect`.
///
/// Edges and corners map to their resize cursors. With no edge, the text
/// cursor is shown only when the pointer is strictly inside `rect` inset by
/// `threshold` on every side; anywhere else gets the default cursor.
pub fn cursor_for(edges: EdgeSet, pointer: Point, rect: Rect, threshold: f64) -> CursorKind {
    if edges == EdgeSet::LEFT || edges == EdgeSet::RIGHT {
        CursorKind::HorizontalResize
    } else if edges == EdgeSet::TOP || edges == EdgeSet::BOTTOM {
        CursorKind::VerticalResize
    } else if edges == EdgeSet::TOP_LEFT || edges == EdgeSet::BOTTOM_RIGHT {
        CursorKind::DiagonalResizeNwse
    } else if edges == EdgeSet::TOP_RIGHT || edges == EdgeSet::BOTTOM_LEFT {
        CursorKind::DiagonalResizeNesw
    } else if strictly_inside(pointer, rect.abs(), threshold) {
        CursorKind::TextEntry
    } else {
        CursorKind::Default
    }
}

fn strictly_inside(pointer: Point, rect: Rect, margin: f64) -> bool {
    pointer.x > rect.x0 + margin
        && pointer.x < rect.x1 - margin
        && pointer.y > rect.y0 + margin
        && pointer.y < rect.y1 - margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EDGE_THRESHOLD, classify};

    const FRAME: Rect = Rect::new(100.0, 100.0, 700.0, 500.0);

    fn cursor_at(x: f64, y: f64) -> CursorKind {
        let pointer = Point::new(x, y);
        let edges = classify(pointer, FRAME, EDGE_THRESHOLD);
        cursor_for(edges, pointer, FRAME, EDGE_THRESHOLD)
    }

    #[test]
    fn every_edge_set_has_its_cursor() {
        let center = FRAME.center();
        let expected = [
            (EdgeSet::empty(), CursorKind::TextEntry),
            (EdgeSet::LEFT, CursorKind::HorizontalResize),
            (EdgeSet::RIGHT, CursorKind::HorizontalResize),
            (EdgeSet::TOP, CursorKind::VerticalResize),
            (EdgeSet::BOTTOM, CursorKind::VerticalResize),
            (EdgeSet::TOP_LEFT, CursorKind::DiagonalResizeNwse),
            (EdgeSet::BOTTOM_RIGHT, CursorKind::DiagonalResizeNwse),
            (EdgeSet::TOP_RIGHT, CursorKind::DiagonalResizeNesw),
            (EdgeSet::BOTTOM_LEFT, CursorKind::DiagonalResizeNesw),
        ];
        for (edges, cursor) in expected {
            assert_eq!(cursor_for(edges, center, FRAME, EDGE_THRESHOLD), cursor);
        }
    }

    #[test]
    fn interior_gets_text_cursor() {
        assert_eq!(cursor_at(400.0, 300.0), CursorKind::TextEntry);
        assert_eq!(cursor_at(108.5, 300.0), CursorKind::TextEntry);
    }

    #[test]
    fn outside_gets_default_cursor() {
        assert_eq!(cursor_at(20.0, 20.0), CursorKind::Default);
        assert_eq!(cursor_at(95.0, 95.0), CursorKind::Default);
        assert_eq!(cursor_at(400.0, 600.0), CursorKind::Default);
    }

    #[test]
    fn inset_boundary_is_exclusive() {
        // Exactly on the inset boundary with no edge set.
        let pointer = Point::new(108.0, 300.0);
        assert_eq!(
            cursor_for(EdgeSet::empty(), pointer, FRAME, EDGE_THRESHOLD),
            CursorKind::Default
        );
    }

    #[test]
    fn css_names() {
        assert_eq!(CursorKind::HorizontalResize.css_name(), "ew-resize");
        assert_eq!(CursorKind::VerticalResize.css_name(), "ns-resize");
        assert_eq!(CursorKind::DiagonalResizeNwse.css_name(), "nwse-resize");
        assert_eq!(CursorKind::DiagonalResizeNesw.css_name(), "nesw-resize");
        assert_eq!(CursorKind::TextEntry.css_name(), "text");
        assert_eq!(CursorKind::Default.css_name(), "default");
    }

    #[test]
    fn resize_kinds() {
        assert!(CursorKind::HorizontalResize.is_resize());
        assert!(CursorKind::DiagonalResizeNesw.is_resize());
        assert!(!CursorKind::TextEntry.is_resize());
        assert!(!CursorKind::Default.is_resize());
    }
}
