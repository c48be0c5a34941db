//! The canonical [`Color`] value and the sRGB transfer functions.
//!
//! Every engine operation takes and returns `Color`: three 8-bit channels plus
//! an optional 8-bit alpha. Its hex form (`#rrggbb` / `#rrggbbaa`, lowercase)
//! is the canonical representation shared by all modules, and round-trips
//! exactly through the channel values.
//!
//! Floating-point work happens on unit-range sRGB (`[0, 1]`) or on
//! [`LinearRgb`], never on the stored bytes directly.

use crate::error::ColorError;
use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with 8-bit channels and optional alpha.
///
/// No alpha means fully opaque. Every constructor folds an alpha of `0xff`
/// into `None`, so there is exactly one representation of an opaque color.
/// The alpha field is private to keep it that way; read it with
/// [`Color::alpha_byte`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    alpha: Option<u8>,
}

/// Linear RGB color (gamma-decoded), components nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Creates a color with an explicit alpha byte. `0xff` is stored as opaque.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: if a == u8::MAX { None } else { Some(a) },
        }
    }

    /// The alpha byte, `None` when opaque. Never `Some(0xff)`.
    pub fn alpha_byte(self) -> Option<u8> {
        self.alpha
    }

    /// Builds a color from unit-range sRGB components, clamping and rounding
    /// each to the nearest 8-bit value. An alpha of `0xff` is stored as opaque.
    pub fn from_unit(r: f64, g: f64, b: f64, alpha: Option<u8>) -> Self {
        let (r, g, b) = (unit_to_byte(r), unit_to_byte(g), unit_to_byte(b));
        match alpha {
            Some(a) => Color::rgba(r, g, b, a),
            None => Color::rgb(r, g, b),
        }
    }

    /// Returns the channels as unit-range sRGB `[r, g, b]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Alpha as a fraction in [0, 1]; opaque colors report `1.0`.
    pub fn alpha(self) -> f64 {
        self.alpha.map_or(1.0, |a| a as f64 / 255.0)
    }

    /// Returns this color with the alpha byte of `other`.
    pub fn with_alpha_of(self, other: Color) -> Self {
        Self {
            alpha: other.alpha,
            ..self
        }
    }

    /// Returns this color with the alpha channel removed.
    pub fn opaque(self) -> Self {
        Self {
            alpha: None,
            ..self
        }
    }

    /// Parses a canonical hex string: 6 or 8 hex digits, optional leading `#`,
    /// case insensitive.
    ///
    /// This is the strict reader for values that are already canonical. Use
    /// [`crate::parse::parse`] for arbitrary user input (short hex, CSS
    /// functions, names).
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColorFormat(format!(
                "non-hex digit in '{hex}'"
            )));
        }
        match digits.len() {
            6 => Ok(Color::rgb(
                hex_byte(&digits[0..2])?,
                hex_byte(&digits[2..4])?,
                hex_byte(&digits[4..6])?,
            )),
            8 => Ok(Color::rgba(
                hex_byte(&digits[0..2])?,
                hex_byte(&digits[2..4])?,
                hex_byte(&digits[4..6])?,
                hex_byte(&digits[6..8])?,
            )),
            n => Err(ColorError::InvalidColorFormat(format!(
                "expected 6 or 8 hex digits, got {n}"
            ))),
        }
    }

    /// Formats the color as `#rrggbb`, or `#rrggbbaa` when it has an alpha.
    pub fn to_hex(self) -> String {
        let Color { r, g, b, alpha } = self;
        match alpha {
            Some(a) => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
            None => format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

fn hex_byte(pair: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(pair, 16)
        .map_err(|e| ColorError::InvalidColorFormat(format!("invalid hex pair '{pair}': {e}")))
}

/// Clamps a unit-range value and rounds it (half away from zero) to a byte.
pub(crate) fn unit_to_byte(v: f64) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v };
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Runs the full normalizer, so names and CSS functions are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
pub fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl LinearRgb {
    /// Gamma-decodes a color. Alpha is dropped.
    pub fn from_color(c: Color) -> Self {
        let [r, g, b] = c.to_unit();
        Self {
            r: srgb_component_to_linear(r),
            g: srgb_component_to_linear(g),
            b: srgb_component_to_linear(b),
        }
    }

    /// Gamma-encodes back to an 8-bit color, clamping out-of-gamut components.
    pub fn to_color(self, alpha: Option<u8>) -> Color {
        Color::from_unit(
            linear_component_to_srgb(self.r.clamp(0.0, 1.0)),
            linear_component_to_srgb(self.g.clamp(0.0, 1.0)),
            linear_component_to_srgb(self.b.clamp(0.0, 1.0)),
            alpha,
        )
    }
}

impl From<LinearRgb> for DVec3 {
    fn from(c: LinearRgb) -> Self {
        DVec3::new(c.r, c.g, c.b)
    }
}

impl From<DVec3> for LinearRgb {
    fn from(v: DVec3) -> Self {
        Self {
            r: v.x,
            g: v.y,
            b: v.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- Hex parsing --

    #[test]
    fn from_hex_parses_red_with_hash() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn from_hex_parses_without_hash() {
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let upper = Color::from_hex("#FF00AA").unwrap();
        let lower = Color::from_hex("#ff00aa").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn from_hex_parses_alpha() {
        let c = Color::from_hex("#11223380").unwrap();
        assert_eq!(c, Color::rgba(0x11, 0x22, 0x33, 0x80));
        assert!(approx_eq(c.alpha(), 128.0 / 255.0));
    }

    #[test]
    fn from_hex_folds_opaque_alpha() {
        let c = Color::from_hex("#112233ff").unwrap();
        assert_eq!(c.alpha_byte(), None);
        assert_eq!(c.to_hex(), "#112233");
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#ff00ff0").is_err());
        assert!(Color::from_hex("#+f0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn from_hex_error_is_invalid_color_format() {
        let err = Color::from_hex("nope").unwrap_err();
        assert!(matches!(err, ColorError::InvalidColorFormat(_)));
    }

    // -- Hex formatting --

    #[test]
    fn to_hex_is_lowercase_and_zero_padded() {
        assert_eq!(Color::rgb(1, 2, 0xab).to_hex(), "#0102ab");
        assert_eq!(Color::rgba(0, 0, 0, 0).to_hex(), "#00000000");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Color::rgb(0xc0, 0xff, 0xee);
        assert_eq!(c.to_string(), "#c0ffee");
    }

    #[test]
    fn from_unit_clamps_and_rounds() {
        let c = Color::from_unit(1.5, -0.1, 0.5, None);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn from_unit_maps_nan_to_zero() {
        let c = Color::from_unit(f64::NAN, 1.0, 1.0, None);
        assert_eq!(c, Color::rgb(0, 255, 255));
    }

    #[test]
    fn opaque_alpha_byte_is_never_stored() {
        let from_unit = Color::from_unit(1.0, 0.0, 0.0, Some(0xff));
        assert_eq!(from_unit.alpha_byte(), None);
        assert_eq!(from_unit.to_hex(), "#ff0000");
        assert_eq!(from_unit, Color::rgb(255, 0, 0));
        let linear = LinearRgb::from_color(Color::WHITE).to_color(Some(0xff));
        assert_eq!(linear.to_hex(), "#ffffff");
    }

    #[test]
    fn alpha_helpers() {
        let translucent = Color::rgba(1, 2, 3, 4);
        assert_eq!(Color::WHITE.with_alpha_of(translucent).alpha_byte(), Some(4));
        assert_eq!(translucent.opaque(), Color::rgb(1, 2, 3));
        assert!(approx_eq(Color::BLACK.alpha(), 1.0));
    }

    // -- Transfer functions --

    #[test]
    fn srgb_gamma_boundary_at_0_04045() {
        assert!(approx_eq(srgb_component_to_linear(0.04045), 0.04045 / 12.92));
        let expected = ((0.04046 + 0.055) / 1.055_f64).powf(2.4);
        assert!(approx_eq(srgb_component_to_linear(0.04046), expected));
    }

    #[test]
    fn linear_to_srgb_boundary_at_0_0031308() {
        assert!(approx_eq(linear_component_to_srgb(0.0031308), 0.0031308 * 12.92));
        let expected = 1.055 * 0.0031309_f64.powf(1.0 / 2.4) - 0.055;
        assert!(approx_eq(linear_component_to_srgb(0.0031309), expected));
    }

    #[test]
    fn linear_black_and_white() {
        let black = LinearRgb::from_color(Color::BLACK);
        let white = LinearRgb::from_color(Color::WHITE);
        assert!(approx_eq(black.r, 0.0) && approx_eq(black.g, 0.0) && approx_eq(black.b, 0.0));
        assert!(approx_eq(white.r, 1.0) && approx_eq(white.g, 1.0) && approx_eq(white.b, 1.0));
    }

    #[test]
    fn linear_to_color_clamps_out_of_gamut() {
        let wild = LinearRgb {
            r: 1.7,
            g: -0.3,
            b: 0.5,
        };
        let c = wild.to_color(None);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
    }

    #[test]
    fn dvec3_conversion_keeps_components() {
        let lin = LinearRgb {
            r: 0.1,
            g: 0.2,
            b: 0.3,
        };
        let v: DVec3 = lin.into();
        assert_eq!(LinearRgb::from(v), lin);
    }

    // -- Serde --

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn color_deserializes_from_hex_string() {
        let c: Color = serde_json::from_str("\"#00ff0080\"").unwrap();
        assert_eq!(c, Color::rgba(0, 255, 0, 0x80));
    }

    #[test]
    fn color_deserialize_rejects_invalid_hex() {
        let result: Result<Color, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_is_exact(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                a in proptest::option::of(0u8..255),
            ) {
                let original = match a {
                    Some(a) => Color::rgba(r, g, b, a),
                    None => Color::rgb(r, g, b),
                };
                let hex = original.to_hex();
                prop_assert_eq!(Color::from_hex(&hex).unwrap(), original);
                prop_assert_eq!(hex.clone(), hex.to_lowercase());
                prop_assert!(hex.len() == 7 || hex.len() == 9);
            }

            #[test]
            fn linear_round_trip_is_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let original = Color::rgb(r, g, b);
                let round_tripped = LinearRgb::from_color(original).to_color(None);
                prop_assert_eq!(round_tripped, original);
            }

            #[test]
            fn srgb_linear_round_trip_within_epsilon(c in 0.0_f64..=1.0) {
                let back = linear_component_to_srgb(srgb_component_to_linear(c));
                prop_assert!((back - c).abs() < 1e-10, "{} vs {}", back, c);
            }
        }
    }
}
