//! WCAG 2.x relative luminance, contrast ratio and readability verdicts.
//!
//! Alpha is ignored: both colors are treated as opaque.

use crate::color::Color;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest possible contrast ratio (a color against itself).
pub const MIN_CONTRAST: f64 = 1.0;
/// Highest possible contrast ratio (black against white).
pub const MAX_CONTRAST: f64 = 21.0;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    #[serde(rename = "AA", alias = "aa")]
    Aa,
    #[serde(rename = "AAA", alias = "aaa")]
    Aaa,
}

/// Text size class. Large is at least 18pt, or 14pt bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    #[default]
    Small,
    Large,
}

/// Readability requirement. Defaults to AA for small text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityOptions {
    pub level: Level,
    pub size: Size,
}

/// Contrast of a color against one background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// WCAG contrast ratio in [1, 21].
    pub score: f64,
    /// Passes AA for small text.
    pub small: bool,
    /// Passes AA for large text.
    pub large: bool,
}

/// Converts one sRGB channel to linear light with the WCAG constants.
///
/// WCAG specifies a 0.03928 threshold rather than the IEC 0.04045; the two
/// agree on every 8-bit value but the formula is kept as published.
fn wcag_channel_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1].
pub fn relative_luminance(c: Color) -> f64 {
    0.2126 * wcag_channel_to_linear(c.r)
        + 0.7152 * wcag_channel_to_linear(c.g)
        + 0.0722 * wcag_channel_to_linear(c.b)
}

/// WCAG contrast ratio, `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21].
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = (la.max(lb), la.min(lb));
    ((lighter + 0.05) / (darker + 0.05)).clamp(MIN_CONTRAST, MAX_CONTRAST)
}

/// Minimum ratio required for a level and text size.
pub fn threshold(options: ReadabilityOptions) -> f64 {
    match (options.level, options.size) {
        (Level::Aa, Size::Small) => 4.5,
        (Level::Aa, Size::Large) => 3.0,
        (Level::Aaa, Size::Small) => 7.0,
        (Level::Aaa, Size::Large) => 4.5,
    }
}

/// Whether text in one color is readable on the other.
pub fn is_readable(a: Color, b: Color, options: ReadabilityOptions) -> bool {
    contrast_ratio(a, b) >= threshold(options)
}

/// Contrast and AA verdicts of `color` against `background`.
pub fn contrast_against(color: Color, background: Color) -> ContrastResult {
    let score = contrast_ratio(color, background);
    let aa = |size| {
        score
            >= threshold(ReadabilityOptions {
                level: Level::Aa,
                size,
            })
    };
    ContrastResult {
        score,
        small: aa(Size::Small),
        large: aa(Size::Large),
    }
}

impl ReadabilityOptions {
    pub fn new(level: Level, size: Size) -> Self {
        Self { level, size }
    }
}

impl FromStr for Level {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Level::Aa),
            "AAA" => Ok(Level::Aaa),
            _ => Err(ColorError::UnknownOption(s.to_string())),
        }
    }
}

impl FromStr for Size {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "large" => Ok(Size::Large),
            _ => Err(ColorError::UnknownOption(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Aa => "AA",
            Level::Aaa => "AAA",
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Size::Small => "small",
            Size::Large => "large",
        })
    }
}
