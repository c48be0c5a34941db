//! Derived color families: lightness and saturation ramps, and hue-based
//! harmonic schemes.
//!
//! Everything is computed in unrounded HSL. Only the final RGB channels are
//! rounded, so a zero offset reproduces the source color exactly. Generated
//! colors keep the source alpha.
//!
//! Ramps have [`RAMP_LEN`] entries at fractions `1/10 ..= 9/10`: neither the
//! source (0%) nor the endpoint (100%: black, white or fully gray) is
//! included. Sequence order is part of the contract.

use crate::color::Color;
use crate::error::ColorError;
use crate::space::{hsl_to_rgb, rgb_to_hsl, Hsl};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of entries in a darken, lighten or tone ramp.
pub const RAMP_LEN: usize = 9;

/// Ramps step through `i / RAMP_DIVISIONS` for `i` in `1..=RAMP_LEN`.
const RAMP_DIVISIONS: f64 = 10.0;

/// Spacing of the full hue sweep, in degrees.
pub const HUE_SWEEP_STEP: f64 = 30.0;

/// Number of colors in the full hue sweep (one full turn).
pub const HUE_SWEEP_LEN: usize = 12;

/// Offset of the analogous ("alternative") colors from the source hue.
pub const ANALOGOUS_OFFSET: f64 = 30.0;

/// Offset of the split-complementary colors from the complement.
pub const SPLIT_OFFSET: f64 = 30.0;

/// Normalizes a hue angle to [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Applies `step(base, i)` for `i` in `1..=RAMP_LEN`.
///
/// Steps divide by [`RAMP_DIVISIONS`] last, so `50 * 1 / 10` is exactly 5
/// rather than `50 * (1 - 0.9)`.
fn ramp(color: Color, step: impl Fn(Hsl, f64) -> Hsl) -> Vec<Color> {
    let base = rgb_to_hsl(color);
    (1..=RAMP_LEN)
        .map(|i| hsl_to_rgb(step(base, i as f64)).with_alpha_of(color))
        .collect()
}

/// Shades: lightness stepped from the source toward black.
pub fn darken(color: Color) -> Vec<Color> {
    ramp(color, |hsl, i| Hsl {
        l: hsl.l * (RAMP_DIVISIONS - i) / RAMP_DIVISIONS,
        ..hsl
    })
}

/// Tints: lightness stepped from the source toward white.
pub fn lighten(color: Color) -> Vec<Color> {
    ramp(color, |hsl, i| Hsl {
        l: hsl.l + (100.0 - hsl.l) * i / RAMP_DIVISIONS,
        ..hsl
    })
}

/// Tones: saturation stepped toward gray, hue and lightness held.
pub fn tone(color: Color) -> Vec<Color> {
    ramp(color, |hsl, i| Hsl {
        s: hsl.s * (RAMP_DIVISIONS - i) / RAMP_DIVISIONS,
        ..hsl
    })
}

/// Replaces the source hue with each of `hues`, holding saturation and lightness.
fn with_hues(color: Color, base: Hsl, hues: impl IntoIterator<Item = f64>) -> Vec<Color> {
    hues.into_iter()
        .map(|h| hsl_to_rgb(Hsl { h, ..base }).with_alpha_of(color))
        .collect()
}

/// Rotates the source hue by each offset.
fn rotate(color: Color, offsets: &[f64]) -> Vec<Color> {
    let base = rgb_to_hsl(color);
    with_hues(
        color,
        base,
        offsets.iter().map(|offset| normalize_hue(base.h + offset)),
    )
}

/// The hues of the full sweep for a source hue, starting at the source.
pub fn hue_sweep_angles(base_hue: f64) -> [f64; HUE_SWEEP_LEN] {
    std::array::from_fn(|i| normalize_hue(base_hue + HUE_SWEEP_STEP * i as f64))
}

/// The color opposite on the wheel: `[h + 180]`.
pub fn complementary(color: Color) -> Vec<Color> {
    rotate(color, &[180.0])
}

/// Twelve colors every 30 degrees, the first being the source itself.
pub fn hue(color: Color) -> Vec<Color> {
    let base = rgb_to_hsl(color);
    with_hues(color, base, hue_sweep_angles(base.h))
}

/// Analogous colors: `[h - 30, h + 30]`.
pub fn alternative(color: Color) -> Vec<Color> {
    rotate(color, &[-ANALOGOUS_OFFSET, ANALOGOUS_OFFSET])
}

/// `[h + 120, h + 240]`.
pub fn triadic(color: Color) -> Vec<Color> {
    rotate(color, &[120.0, 240.0])
}

/// `[h + 90, h + 180, h + 270]`.
pub fn square(color: Color) -> Vec<Color> {
    rotate(color, &[90.0, 180.0, 270.0])
}

/// The two neighbors of the complement: `[h + 150, h + 210]`.
pub fn split_complementary(color: Color) -> Vec<Color> {
    rotate(color, &[180.0 - SPLIT_OFFSET, 180.0 + SPLIT_OFFSET])
}

/// Every derived color family, as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Shades,
    Tints,
    Tones,
    Complementary,
    Hue,
    Alternative,
    Triadic,
    Square,
    SplitComplementary,
}

impl Scheme {
    pub const ALL: [Scheme; 9] = [
        Scheme::Shades,
        Scheme::Tints,
        Scheme::Tones,
        Scheme::Complementary,
        Scheme::Hue,
        Scheme::Alternative,
        Scheme::Triadic,
        Scheme::Square,
        Scheme::SplitComplementary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Shades => "shades",
            Scheme::Tints => "tints",
            Scheme::Tones => "tones",
            Scheme::Complementary => "complementary",
            Scheme::Hue => "hue",
            Scheme::Alternative => "alternative",
            Scheme::Triadic => "triadic",
            Scheme::Square => "square",
            Scheme::SplitComplementary => "split-complementary",
        }
    }

    /// Number of colors the scheme produces.
    pub fn count(self) -> usize {
        match self {
            Scheme::Shades | Scheme::Tints | Scheme::Tones => RAMP_LEN,
            Scheme::Complementary => 1,
            Scheme::Hue => HUE_SWEEP_LEN,
            Scheme::Alternative | Scheme::Triadic | Scheme::SplitComplementary => 2,
            Scheme::Square => 3,
        }
    }

    pub fn generate(self, color: Color) -> Vec<Color> {
        match self {
            Scheme::Shades => darken(color),
            Scheme::Tints => lighten(color),
            Scheme::Tones => tone(color),
            Scheme::Complementary => complementary(color),
            Scheme::Hue => hue(color),
            Scheme::Alternative => alternative(color),
            Scheme::Triadic => triadic(color),
            Scheme::Square => square(color),
            Scheme::SplitComplementary => split_complementary(color),
        }
    }
}

impl FromStr for Scheme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('_', "-");
        match lower.as_str() {
            "darken" => Ok(Scheme::Shades),
            "lighten" => Ok(Scheme::Tints),
            "tone" => Ok(Scheme::Tones),
            "analogous" => Ok(Scheme::Alternative),
            name => Scheme::ALL
                .into_iter()
                .find(|scheme| scheme.name() == name)
                .ok_or_else(|| ColorError::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
