// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style parameters read by the render pipeline.

use peniko::Color;
use peniko::color::{Srgb, parse_color};

/// Default text size passed to the path engine.
pub const DEFAULT_SIZE: u32 = 16;

/// The sample inputs the path engine can lay out.
///
/// Hosts usually expose these as a select control. Names that are not
/// recognized map to index 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Korean sample text.
    #[default]
    Korean,
    /// Hebrew (right-to-left) sample text.
    Hebrew,
    /// French multi-paragraph sample text.
    French,
    /// Mixed-direction sample text with several fonts.
    Mixed,
}

impl Variant {
    /// All variants in index order.
    pub const ALL: [Self; 4] = [Self::Korean, Self::Hebrew, Self::French, Self::Mixed];

    /// Index passed to the path engine.
    pub fn index(self) -> usize {
        match self {
            Self::Korean => 0,
            Self::Hebrew => 1,
            Self::French => 2,
            Self::Mixed => 3,
        }
    }

    /// Variant for an engine index; out-of-range indices give the first variant.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Control value for this variant.
    pub fn name(self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::Hebrew => "hebrew",
            Self::French => "french",
            Self::Mixed => "mixed",
        }
    }

    /// Map a control value to a variant; unrecognized names give the first variant.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }
}

/// Current values of the style controls.
///
/// The render pipeline only reads these; validation beyond the variant
/// mapping is left to whoever owns the controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Which sample input to lay out.
    pub variant: Variant,
    /// Text size, passed through to the engine.
    pub size: u32,
    /// Fill color for every returned path.
    pub color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            size: DEFAULT_SIZE,
            color: Color::BLACK,
        }
    }
}

/// A control value that could not be turned into a style parameter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The size control did not hold a positive integer.
    #[error("invalid size value {value:?}")]
    InvalidSize {
        /// The rejected control value.
        value: String,
    },
    /// The color control did not hold a CSS color.
    #[error("invalid color value {value:?}")]
    InvalidColor {
        /// The rejected control value.
        value: String,
    },
}

/// Parse a size control value.
pub fn parse_size(value: &str) -> Result<u32, StyleError> {
    match value.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(StyleError::InvalidSize {
            value: value.to_owned(),
        }),
    }
}

/// Parse a color control value such as `#ff0000` or `rebeccapurple`.
pub fn parse_color_value(value: &str) -> Result<Color, StyleError> {
    parse_color(value.trim())
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|_| StyleError::InvalidColor {
            value: value.to_owned(),
        })
}
