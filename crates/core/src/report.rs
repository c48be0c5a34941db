//! A full, serializable description of one color.
//!
//! [`ColorReport`] gathers every derivation the engine offers for a single
//! color: representations, ramps, harmonies, vision simulation and contrast
//! against white and black. Names come from a caller-supplied
//! [`NameLookup`] and never influence the numbers.

use crate::color::Color;
use crate::contrast::{contrast_against, ContrastResult};
use crate::named::NameLookup;
use crate::palette::Scheme;
use crate::space::{to_cielab, to_cielch, to_cmyk, to_hsl, to_hsv, to_rgb};
use crate::space::{Cielab, Cielch, Cmyk, Hsl, Hsv, Rgb};
use crate::vision::{blindness, Blindness};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A color paired with its advisory display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: Color,
    pub name: String,
}

impl Swatch {
    pub fn new(color: Color, names: &impl NameLookup) -> Self {
        Self {
            hex: color,
            name: names.name(color),
        }
    }
}

/// Contrast of a color as text on white and on black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub white: ContrastResult,
    pub black: ContrastResult,
}

/// Everything derived from one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    pub name: String,
    pub hex: Color,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    pub cielab: Cielab,
    pub cielch: Cielch,
    pub shades: Vec<Swatch>,
    pub tints: Vec<Swatch>,
    pub tones: Vec<Swatch>,
    pub complementary: Vec<Swatch>,
    pub hue: Vec<Swatch>,
    pub alternative: Vec<Swatch>,
    pub triadic: Vec<Swatch>,
    pub square: Vec<Swatch>,
    pub split_complementary: Vec<Swatch>,
    pub blindness: Blindness,
    pub contrast: ContrastReport,
}

fn swatches(scheme: Scheme, color: Color, names: &impl NameLookup) -> Vec<Swatch> {
    scheme
        .generate(color)
        .into_iter()
        .map(|c| Swatch::new(c, names))
        .collect()
}

impl ColorReport {
    pub fn build(color: Color, names: &impl NameLookup) -> Self {
        let report = Self {
            name: names.name(color),
            hex: color,
            rgb: to_rgb(color),
            hsl: to_hsl(color),
            hsv: to_hsv(color),
            cmyk: to_cmyk(color),
            cielab: to_cielab(color),
            cielch: to_cielch(color),
            shades: swatches(Scheme::Shades, color, names),
            tints: swatches(Scheme::Tints, color, names),
            tones: swatches(Scheme::Tones, color, names),
            complementary: swatches(Scheme::Complementary, color, names),
            hue: swatches(Scheme::Hue, color, names),
            alternative: swatches(Scheme::Alternative, color, names),
            triadic: swatches(Scheme::Triadic, color, names),
            square: swatches(Scheme::Square, color, names),
            split_complementary: swatches(Scheme::SplitComplementary, color, names),
            blindness: blindness(color),
            contrast: ContrastReport {
                white: contrast_against(color, Color::WHITE),
                black: contrast_against(color, Color::BLACK),
            },
        };
        trace!(hex = %color, name = %report.name, "built color report");
        report
    }

    /// The swatches of one scheme.
    pub fn scheme(&self, scheme: Scheme) -> &[Swatch] {
        match scheme {
            Scheme::Shades => &self.shades,
            Scheme::Tints => &self.tints,
            Scheme::Tones => &self.tones,
            Scheme::Complementary => &self.complementary,
            Scheme::Hue => &self.hue,
            Scheme::Alternative => &self.alternative,
            Scheme::Triadic => &self.triadic,
            Scheme::Square => &self.square,
            Scheme::SplitComplementary => &self.split_complementary,
        }
    }
}
