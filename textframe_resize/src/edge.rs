// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge classification: which side or corner of a frame the pointer is on.

use kurbo::{Point, Rect};

/// Distance within which the pointer counts as being on an edge.
pub const EDGE_THRESHOLD: f64 = 8.0;

bitflags::bitflags! {
    /// The edge(s) of a frame a pointer is interacting with.
    ///
    /// At most one horizontal component ([`EdgeSet::LEFT`] / [`EdgeSet::RIGHT`])
    /// and one vertical component ([`EdgeSet::TOP`] / [`EdgeSet::BOTTOM`]) are
    /// set by [`classify`]. Corners are the union of both.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EdgeSet: u8 {
        /// Left edge.
        const LEFT   = 0b0001;
        /// Right edge.
        const RIGHT  = 0b0010;
        /// Top edge.
        const TOP    = 0b0100;
        /// Bottom edge.
        const BOTTOM = 0b1000;

        /// Top-left corner.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Top-right corner.
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// Bottom-left corner.
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Bottom-right corner.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl EdgeSet {
    /// Every classification [`classify`] can produce, `none` first.
    pub const ALL_CLASSIFICATIONS: [Self; 9] = [
        Self::empty(),
        Self::LEFT,
        Self::RIGHT,
        Self::TOP,
        Self::BOTTOM,
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    /// Canonical name such as `"top-left"`, or `"none"` when empty.
    ///
    /// Returns `None` for combinations [`classify`] never produces, such as
    /// `LEFT | RIGHT`.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(edges, _)| *edges == self)
            .map(|(_, name)| *name)
    }

    /// Parse a canonical name produced by [`EdgeSet::name`].
    ///
    /// This is distinct from the generated `from_name`, which parses flag
    /// identifiers such as `"TOP_LEFT"`.
    pub fn from_canonical_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(edges, _)| *edges)
    }
}

const NAMES: [(EdgeSet, &str); 9] = [
    (EdgeSet::empty(), "none"),
    (EdgeSet::LEFT, "left"),
    (EdgeSet::RIGHT, "right"),
    (EdgeSet::TOP, "top"),
    (EdgeSet::BOTTOM, "bottom"),
    (EdgeSet::TOP_LEFT, "top-left"),
    (EdgeSet::TOP_RIGHT, "top-right"),
    (EdgeSet::BOTTOM_LEFT, "bottom-left"),
    (EdgeSet::BOTTOM_RIGHT, "bottom-right"),
];

/// Classify `pointer` against the edges of `rect`.
///
/// The pointer is on the left or right edge when it is horizontally within
/// `threshold` of that edge and vertically within the frame's span (inclusive).
/// Top and bottom use the symmetric rule. Left wins over right and top wins
/// over bottom, which only matters for frames narrower than twice the
/// threshold.
pub fn classify(pointer: Point, rect: Rect, threshold: f64) -> EdgeSet {
    let rect = rect.abs();
    let mut edges = EdgeSet::empty();

    let within_y = pointer.y >= rect.y0 && pointer.y <= rect.y1;
    if within_y {
        if near(pointer.x, rect.x0, threshold) {
            edges |= EdgeSet::LEFT;
        } else if near(pointer.x, rect.x1, threshold) {
            edges |= EdgeSet::RIGHT;
        }
    }

    let within_x = pointer.x >= rect.x0 && pointer.x <= rect.x1;
    if within_x {
        if near(pointer.y, rect.y0, threshold) {
            edges |= EdgeSet::TOP;
        } else if near(pointer.y, rect.y1, threshold) {
            edges |= EdgeSet::BOTTOM;
        }
    }

    edges
}

fn near(value: f64, edge: f64, threshold: f64) -> bool {
    value >= edge - threshold && value <= edge + threshold
}
