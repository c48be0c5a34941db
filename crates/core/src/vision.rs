//! Color vision deficiency simulation.
//!
//! Dichromacies use the Machado, Oliveira and Fernandes (2009) matrices at
//! full severity, applied to linear RGB. Achromatopsia projects onto
//! relative luminance. Out-of-gamut results are clamped; alpha is kept.

use crate::color::{Color, LinearRgb};
use crate::error::ColorError;
use crate::space::row_major;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PROTANOPIA: [[f64; 3]; 3] = [
    [0.152286, 1.052583, -0.204868],
    [0.114503, 0.786281, 0.099216],
    [-0.003882, -0.048116, 1.051998],
];

const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.367322, 0.860646, -0.227968],
    [0.280085, 0.672501, 0.047413],
    [-0.011820, 0.042940, 0.968881],
];

const TRITANOPIA: [[f64; 3]; 3] = [
    [1.255528, -0.076749, -0.178779],
    [-0.078411, 0.930809, 0.147602],
    [0.004733, 0.691367, 0.303900],
];

/// Rec. 709 luminance weights for linear RGB.
const LUMA: DVec3 = DVec3::new(0.2126, 0.7152, 0.0722);

/// A simulated color vision deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deficiency {
    /// No functioning L cones (red-blind).
    Protanopia,
    /// No functioning M cones (green-blind).
    Deuteranopia,
    /// No functioning S cones (blue-blind).
    Tritanopia,
    /// No color perception at all.
    Achromatopsia,
}

/// How one color appears under each deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blindness {
    pub protanopia: Color,
    pub deuteranopia: Color,
    pub tritanopia: Color,
    pub achromatopsia: Color,
}

impl Deficiency {
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Achromatopsia => "achromatopsia",
        }
    }

    /// Returns the color as perceived with this deficiency.
    pub fn simulate(self, color: Color) -> Color {
        let linear = DVec3::from(LinearRgb::from_color(color));
        let simulated = match self {
            Deficiency::Protanopia => row_major(&PROTANOPIA) * linear,
            Deficiency::Deuteranopia => row_major(&DEUTERANOPIA) * linear,
            Deficiency::Tritanopia => row_major(&TRITANOPIA) * linear,
            Deficiency::Achromatopsia => DVec3::splat(LUMA.dot(linear)),
        };
        LinearRgb::from(simulated).to_color(color.alpha_byte())
    }
}

/// Simulates all four deficiencies for one color.
pub fn blindness(color: Color) -> Blindness {
    Blindness {
        protanopia: Deficiency::Protanopia.simulate(color),
        deuteranopia: Deficiency::Deuteranopia.simulate(color),
        tritanopia: Deficiency::Tritanopia.simulate(color),
        achromatopsia: Deficiency::Achromatopsia.simulate(color),
    }
}

impl Blindness {
    pub fn get(&self, deficiency: Deficiency) -> Color {
        match deficiency {
            Deficiency::Protanopia => self.protanopia,
            Deficiency::Deuteranopia => self.deuteranopia,
            Deficiency::Tritanopia => self.tritanopia,
            Deficiency::Achromatopsia => self.achromatopsia,
        }
    }
}

impl FromStr for Deficiency {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protanopia" | "protan" => Ok(Deficiency::Protanopia),
            "deuteranopia" | "deutan" => Ok(Deficiency::Deuteranopia),
            "tritanopia" | "tritan" => Ok(Deficiency::Tritanopia),
            "achromatopsia" | "achroma" | "monochromacy" => Ok(Deficiency::Achromatopsia),
            _ => Err(ColorError::UnknownDeficiency(s.to_string())),
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
