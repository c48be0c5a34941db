//! Conversions between [`Color`] and the HSL, HSV, CMYK, CIELAB and CIELCH
//! representations.
//!
//! Each space has an unrounded forward conversion (`rgb_to_*`) used by the
//! palette math, a display-rounded variant (`to_*`, integers rounded half
//! away from zero, hue wrapped into [0, 360)), and an inverse (`*_to_rgb`)
//! that clamps back into the 8-bit gamut. CIELAB and CIELCH are never
//! rounded.
//!
//! CIELAB goes through XYZ with the sRGB primaries and the D65 white point.

use crate::color::{Color, LinearRgb};
use crate::error::ColorError;
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// D65 reference white, scaled so that `Yn = 100`.
pub const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// CIE epsilon, (6/29)^3.
const LAB_EPSILON: f64 = 216.0 / 24389.0;
/// CIE kappa, (29/3)^3.
const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Linear sRGB to XYZ (D65), rows are X, Y, Z.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) to linear sRGB, rows are R, G, B.
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Builds a glam matrix from a row-major table.
pub(crate) fn row_major(rows: &[[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(rows).transpose()
}

/// 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue in degrees [0, 360), saturation and value in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Cyan, magenta, yellow and key, each in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// CIE L*a*b* (D65). `l` in [0, 100]; `a` and `b` unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cielab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Polar form of [`Cielab`]: lightness, chroma (>= 0), hue in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cielch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Rounds a hue to whole degrees, wrapping 360 back to 0.
fn round_hue(h: f64) -> f64 {
    h.round().rem_euclid(360.0) + 0.0
}

/// Rounds a percentage to a whole number. Adding `0.0` folds `-0.0` into `0.0`.
fn round_pct(v: f64) -> f64 {
    v.round().clamp(0.0, 100.0) + 0.0
}

/// Computes the hue sector angle shared by HSL and HSV.
///
/// `max` must be one of `r`, `g`, `b` and `delta = max - min > 0`.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    h.rem_euclid(360.0)
}

/// Maps chroma, the secondary component and the hue sector back to RGB, in
/// the same units as `c` and `m`.
fn from_sector(h: f64, c: f64, m: f64) -> [f64; 3] {
    let h = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

fn min_max(c: Color) -> ([f64; 3], f64, f64) {
    let unit = c.to_unit();
    let [r, g, b] = unit;
    (unit, r.max(g).max(b), r.min(g).min(b))
}

impl Hsl {
    /// Display form: integral values, hue wrapped into [0, 360).
    pub fn round(self) -> Self {
        Self {
            h: round_hue(self.h),
            s: round_pct(self.s),
            l: round_pct(self.l),
        }
    }
}

impl Hsv {
    /// Display form: integral values, hue wrapped into [0, 360).
    pub fn round(self) -> Self {
        Self {
            h: round_hue(self.h),
            s: round_pct(self.s),
            v: round_pct(self.v),
        }
    }
}

impl Cmyk {
    /// Display form: integral percentages.
    pub fn round(self) -> Self {
        Self {
            c: round_pct(self.c),
            m: round_pct(self.m),
            y: round_pct(self.y),
            k: round_pct(self.k),
        }
    }
}

// -- Forward conversions --

/// Returns the 8-bit channels of a color (alpha dropped).
pub fn to_rgb(c: Color) -> Rgb {
    Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Unrounded RGB to HSL.
pub fn rgb_to_hsl(c: Color) -> Hsl {
    let ([r, g, b], max, min) = min_max(c);
    let delta = max - min;
    let l = (max + min) / 2.0;
    if delta == 0.0 {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }
    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    Hsl {
        h: hue_of(r, g, b, max, delta),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Unrounded RGB to HSV.
pub fn rgb_to_hsv(c: Color) -> Hsv {
    let ([r, g, b], max, min) = min_max(c);
    let delta = max - min;
    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        (hue_of(r, g, b, max, delta), delta / max)
    };
    Hsv {
        h,
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Unrounded RGB to CMYK. Black reports `c = m = y = 0`, `k = 100`.
pub fn rgb_to_cmyk(c: Color) -> Cmyk {
    let ([r, g, b], max, _) = min_max(c);
    let k = 1.0 - max;
    if max == 0.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 100.0,
        };
    }
    let ink = |ch: f64| (1.0 - ch - k) / (1.0 - k) * 100.0;
    Cmyk {
        c: ink(r),
        m: ink(g),
        y: ink(b),
        k: k * 100.0,
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > LAB_EPSILON {
        cube
    } else {
        (116.0 * f - 16.0) / LAB_KAPPA
    }
}

/// Converts a color to CIE XYZ (D65, `Y` of white is 100).
pub fn rgb_to_xyz(c: Color) -> DVec3 {
    row_major(&SRGB_TO_XYZ) * DVec3::from(LinearRgb::from_color(c)) * 100.0
}

/// RGB to CIELAB at full precision.
///
/// Neutral colors (`r == g == b`) report `a = b = 0` exactly, so their
/// CIELCH hue is well defined.
pub fn to_cielab(c: Color) -> Cielab {
    let xyz = rgb_to_xyz(c);
    let [xn, yn, zn] = D65_WHITE;
    let fx = lab_f(xyz.x / xn);
    let fy = lab_f(xyz.y / yn);
    let fz = lab_f(xyz.z / zn);
    let l = 116.0 * fy - 16.0;
    if c.r == c.g && c.g == c.b {
        return Cielab { l, a: 0.0, b: 0.0 };
    }
    Cielab {
        l,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts CIELAB to its polar form.
pub fn cielab_to_cielch(lab: Cielab) -> Cielch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let h = if c < 1e-10 {
        0.0
    } else {
        lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
    };
    Cielch { l: lab.l, c, h }
}

/// Converts CIELCH back to CIELAB.
pub fn cielch_to_cielab(lch: Cielch) -> Cielab {
    let h = lch.h.to_radians();
    Cielab {
        l: lch.l,
        a: lch.c * h.cos(),
        b: lch.c * h.sin(),
    }
}

/// RGB to CIELCH at full precision.
pub fn to_cielch(c: Color) -> Cielch {
    cielab_to_cielch(to_cielab(c))
}

/// Display-rounded HSL.
pub fn to_hsl(c: Color) -> Hsl {
    rgb_to_hsl(c).round()
}

/// Display-rounded HSV.
pub fn to_hsv(c: Color) -> Hsv {
    rgb_to_hsv(c).round()
}

/// Display-rounded CMYK.
pub fn to_cmyk(c: Color) -> Cmyk {
    rgb_to_cmyk(c).round()
}

// -- Inverse conversions --

/// HSL to an opaque color. Saturation and lightness are clamped to [0, 100].
///
/// Works in percent until the last step: `l = 95` gives channels of exactly
/// 229.5, which round up.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let s = hsl.s.clamp(0.0, 100.0);
    let l = hsl.l.clamp(0.0, 100.0);
    let c = 2.0 * l.min(100.0 - l) * s / 100.0;
    from_percent(from_sector(hsl.h, c, l - c / 2.0))
}

/// HSV to an opaque color. Saturation and value are clamped to [0, 100].
pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let s = hsv.s.clamp(0.0, 100.0);
    let v = hsv.v.clamp(0.0, 100.0);
    let c = v * s / 100.0;
    from_percent(from_sector(hsv.h, c, v - c))
}

fn from_percent([r, g, b]: [f64; 3]) -> Color {
    Color::from_unit(r / 100.0, g / 100.0, b / 100.0, None)
}

/// CMYK to an opaque color. Lossy: the forward conversion is not inverted
/// exactly once it has been rounded.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Color {
    let k = 1.0 - cmyk.k.clamp(0.0, 100.0) / 100.0;
    let ch = |v: f64| (1.0 - v.clamp(0.0, 100.0) / 100.0) * k;
    Color::from_unit(ch(cmyk.c), ch(cmyk.m), ch(cmyk.y), None)
}

/// CIELAB to an opaque color, clamping out-of-gamut results.
pub fn cielab_to_rgb(lab: Cielab) -> Color {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    let [xn, yn, zn] = D65_WHITE;
    let xyz = DVec3::new(
        lab_f_inv(fx) * xn,
        lab_f_inv(fy) * yn,
        lab_f_inv(fz) * zn,
    ) / 100.0;
    LinearRgb::from(row_major(&XYZ_TO_SRGB) * xyz).to_color(None)
}

/// CIELCH to an opaque color, clamping out-of-gamut results.
pub fn cielch_to_rgb(lch: Cielch) -> Color {
    cielab_to_rgb(cielch_to_cielab(lch))
}

// -- Closed set of spaces --

/// The color spaces the converter supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Cielab,
    Cielch,
}

/// A color expressed in one of the supported spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "kebab-case")]
pub enum Representation {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmyk(Cmyk),
    Cielab(Cielab),
    Cielch(Cielch),
}

impl ColorSpace {
    /// Every supported space, in display order.
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Rgb,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Cmyk,
        ColorSpace::Cielab,
        ColorSpace::Cielch,
    ];

    /// Lowercase name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Cmyk => "cmyk",
            ColorSpace::Cielab => "cielab",
            ColorSpace::Cielch => "cielch",
        }
    }

    /// Converts `c` into this space, display-rounded where applicable.
    pub fn convert(self, c: Color) -> Representation {
        match self {
            ColorSpace::Rgb => Representation::Rgb(to_rgb(c)),
            ColorSpace::Hsl => Representation::Hsl(to_hsl(c)),
            ColorSpace::Hsv => Representation::Hsv(to_hsv(c)),
            ColorSpace::Cmyk => Representation::Cmyk(to_cmyk(c)),
            ColorSpace::Cielab => Representation::Cielab(to_cielab(c)),
            ColorSpace::Cielch => Representation::Cielch(to_cielch(c)),
        }
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "lab" => Ok(ColorSpace::Cielab),
            "lch" => Ok(ColorSpace::Cielch),
            name => ColorSpace::ALL
                .into_iter()
                .find(|space| space.name() == name)
                .ok_or_else(|| ColorError::UnknownColorSpace(s.to_string())),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Representation {
    /// The space this value is expressed in.
    pub fn space(&self) -> ColorSpace {
        match self {
            Representation::Rgb(_) => ColorSpace::Rgb,
            Representation::Hsl(_) => ColorSpace::Hsl,
            Representation::Hsv(_) => ColorSpace::Hsv,
            Representation::Cmyk(_) => ColorSpace::Cmyk,
            Representation::Cielab(_) => ColorSpace::Cielab,
            Representation::Cielch(_) => ColorSpace::Cielch,
        }
    }

    /// Converts back to an opaque color.
    pub fn to_color(&self) -> Color {
        match *self {
            Representation::Rgb(Rgb { r, g, b }) => Color::rgb(r, g, b),
            Representation::Hsl(v) => hsl_to_rgb(v),
            Representation::Hsv(v) => hsv_to_rgb(v),
            Representation::Cmyk(v) => cmyk_to_rgb(v),
            Representation::Cielab(v) => cielab_to_rgb(v),
            Representation::Cielch(v) => cielch_to_rgb(v),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Rgb(Rgb { r, g, b }) => write!(f, "rgb({r}, {g}, {b})"),
            Representation::Hsl(Hsl { h, s, l }) => write!(f, "hsl({h}, {s}%, {l}%)"),
            Representation::Hsv(Hsv { h, s, v }) => write!(f, "hsv({h}, {s}%, {v}%)"),
            Representation::Cmyk(Cmyk { c, m, y, k }) => {
                write!(f, "cmyk({c}%, {m}%, {y}%, {k}%)")
            }
            Representation::Cielab(Cielab { l, a, b }) => {
                write!(f, "lab({l:.2}, {a:.2}, {b:.2})")
            }
            Representation::Cielch(Cielch { l, c, h }) => {
                write!(f, "lch({l:.2}, {c:.2}, {h:.2})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-2;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    // -- RGB --

    #[test]
    fn to_rgb_pure_red() {
        assert_eq!(to_rgb(hex("#ff0000")), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn to_rgb_ignores_alpha() {
        assert_eq!(
            to_rgb(hex("#10203040")),
            Rgb {
                r: 0x10,
                g: 0x20,
                b: 0x30
            }
        );
    }

    // -- HSL / HSV --

    #[test]
    fn to_hsl_primaries() {
        assert_eq!(
            to_hsl(hex("#ff0000")),
            Hsl {
                h: 0.0,
                s: 100.0,
                l: 50.0
            }
        );
        assert_eq!(
            to_hsl(hex("#00ff00")),
            Hsl {
                h: 120.0,
                s: 100.0,
                l: 50.0
            }
        );
        assert_eq!(
            to_hsl(hex("#0000ff")),
            Hsl {
                h: 240.0,
                s: 100.0,
                l: 50.0
            }
        );
    }

    #[test]
    fn to_hsl_gray_has_zero_hue_and_saturation() {
        let hsl = to_hsl(hex("#808080"));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 50.0);
    }

    #[test]
    fn to_hsl_rounds_half_away_from_zero() {
        // #bf4040: l = (191 + 64) / 510 = 50%, s = 127 / 255 = 49.8%
        let hsl = to_hsl(hex("#bf4040"));
        assert_eq!(hsl, Hsl { h: 0.0, s: 50.0, l: 50.0 });
    }

    #[test]
    fn to_hsl_wraps_rounded_hue_at_360() {
        // hue of #ff0001 is 359.76, which rounds to 360 and must wrap to 0
        let raw = rgb_to_hsl(hex("#ff0001"));
        assert!(raw.h > 359.5 && raw.h < 360.0, "raw hue {}", raw.h);
        assert_eq!(to_hsl(hex("#ff0001")).h, 0.0);
    }

    #[test]
    fn to_hsv_known_color() {
        assert_eq!(
            to_hsv(hex("#ff8000")),
            Hsv {
                h: 30.0,
                s: 100.0,
                v: 100.0
            }
        );
        assert_eq!(
            to_hsv(hex("#000000")),
            Hsv {
                h: 0.0,
                s: 0.0,
                v: 0.0
            }
        );
    }

    #[test]
    fn hsl_to_rgb_known_colors() {
        let teal = Hsl {
            h: 180.0,
            s: 100.0,
            l: 25.0,
        };
        assert_eq!(hsl_to_rgb(teal).to_hex(), "#008080");
        let wrapped = Hsl {
            h: 540.0,
            s: 100.0,
            l: 50.0,
        };
        assert_eq!(hsl_to_rgb(wrapped).to_hex(), "#00ffff");
    }

    #[test]
    fn hsl_to_rgb_rounds_exact_halves_up() {
        // 5% lightness is a red channel of exactly 25.5
        let dark_red = Hsl {
            h: 0.0,
            s: 100.0,
            l: 5.0,
        };
        assert_eq!(hsl_to_rgb(dark_red).to_hex(), "#1a0000");
        // 95% lightness leaves green and blue at exactly 229.5
        let pale_red = Hsl {
            h: 0.0,
            s: 100.0,
            l: 95.0,
        };
        assert_eq!(hsl_to_rgb(pale_red).to_hex(), "#ffe6e6");
    }

    #[test]
    fn hsv_to_rgb_known_colors() {
        let yellow = Hsv {
            h: 60.0,
            s: 100.0,
            v: 100.0,
        };
        assert_eq!(hsv_to_rgb(yellow).to_hex(), "#ffff00");
    }

    // -- CMYK --

    #[test]
    fn to_cmyk_known_colors() {
        assert_eq!(
            to_cmyk(hex("#ff0000")),
            Cmyk {
                c: 0.0,
                m: 100.0,
                y: 100.0,
                k: 0.0
            }
        );
        assert_eq!(
            to_cmyk(hex("#000000")),
            Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0
            }
        );
        assert_eq!(
            to_cmyk(hex("#ffffff")),
            Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 0.0
            }
        );
    }

    #[test]
    fn cmyk_path_is_lossy_but_close() {
        let original = hex("#3a7bd5");
        let back = cmyk_to_rgb(to_cmyk(original));
        assert!((back.r as i16 - original.r as i16).abs() <= 3);
        assert!((back.g as i16 - original.g as i16).abs() <= 3);
        assert!((back.b as i16 - original.b as i16).abs() <= 3);
    }

    #[test]
    fn unrounded_cmyk_inverts_exactly() {
        let original = hex("#3a7bd5");
        assert_eq!(cmyk_to_rgb(rgb_to_cmyk(original)), original);
    }

    // -- CIELAB / CIELCH --

    #[test]
    fn cielab_white_is_l_100() {
        let lab = to_cielab(hex("#ffffff"));
        assert!(approx_eq(lab.l, 100.0), "L: {}", lab.l);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);
    }

    #[test]
    fn cielab_black_is_zero() {
        let lab = to_cielab(hex("#000000"));
        assert!(approx_eq(lab.l, 0.0), "L: {}", lab.l);
    }

    #[test]
    fn cielab_pure_red() {
        let lab = to_cielab(hex("#ff0000"));
        assert!(approx_eq(lab.l, 53.24), "L: {}", lab.l);
        assert!(approx_eq(lab.a, 80.09), "a: {}", lab.a);
        assert!(approx_eq(lab.b, 67.20), "b: {}", lab.b);
    }

    #[test]
    fn cielch_pure_red() {
        let lch = to_cielch(hex("#ff0000"));
        assert!(approx_eq(lch.l, 53.24), "L: {}", lch.l);
        assert!(approx_eq(lch.c, 104.55), "C: {}", lch.c);
        assert!(approx_eq(lch.h, 40.0), "h: {}", lch.h);
    }

    #[test]
    fn cielch_gray_has_zero_chroma_and_hue() {
        let lch = to_cielch(hex("#777777"));
        assert_eq!(lch.c, 0.0);
        assert_eq!(lch.h, 0.0);
    }

    #[test]
    fn cielch_blue_hue_is_normalized_positive() {
        // atan2 is negative for blue; the hue must land in [0, 360)
        let lch = to_cielch(hex("#0000ff"));
        assert!(lch.h > 300.0 && lch.h < 310.0, "h: {}", lch.h);
    }

    #[test]
    fn cielab_round_trips_to_same_color() {
        for s in ["#ff0000", "#3a7bd5", "#010203", "#ffffff", "#808080"] {
            let c = hex(s);
            assert_eq!(cielab_to_rgb(to_cielab(c)), c, "{s}");
            assert_eq!(cielch_to_rgb(to_cielch(c)), c, "{s}");
        }
    }

    // -- ColorSpace --

    #[test]
    fn color_space_from_str_accepts_names_and_aliases() {
        assert_eq!("hsl".parse::<ColorSpace>().unwrap(), ColorSpace::Hsl);
        assert_eq!("CMYK".parse::<ColorSpace>().unwrap(), ColorSpace::Cmyk);
        assert_eq!("lab".parse::<ColorSpace>().unwrap(), ColorSpace::Cielab);
        assert_eq!("lch".parse::<ColorSpace>().unwrap(), ColorSpace::Cielch);
        assert!(matches!(
            "xyz".parse::<ColorSpace>(),
            Err(ColorError::UnknownColorSpace(_))
        ));
    }

    #[test]
    fn convert_dispatches_to_matching_representation() {
        let c = hex("#3a7bd5");
        for space in ColorSpace::ALL {
            let rep = space.convert(c);
            assert_eq!(rep.space(), space);
        }
    }

    #[test]
    fn representation_display() {
        let c = hex("#ff0000");
        assert_eq!(ColorSpace::Rgb.convert(c).to_string(), "rgb(255, 0, 0)");
        assert_eq!(ColorSpace::Hsl.convert(c).to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(
            ColorSpace::Cmyk.convert(c).to_string(),
            "cmyk(0%, 100%, 100%, 0%)"
        );
        assert_eq!(
            ColorSpace::Cielab.convert(c).to_string(),
            "lab(53.24, 80.09, 67.20)"
        );
    }

    #[test]
    fn representation_serializes_with_space_tag() {
        let rep = ColorSpace::Hsl.convert(hex("#ff0000"));
        let v = serde_json::to_value(rep).unwrap();
        assert_eq!(v["space"], "hsl");
        assert_eq!(v["s"], 100.0);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hsl_round_trip_is_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let c = Color::rgb(r, g, b);
                prop_assert_eq!(hsl_to_rgb(rgb_to_hsl(c)), c);
            }

            #[test]
            fn hsv_round_trip_is_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let c = Color::rgb(r, g, b);
                prop_assert_eq!(hsv_to_rgb(rgb_to_hsv(c)), c);
            }

            #[test]
            fn hue_and_percentages_stay_in_range(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let c = Color::rgb(r, g, b);
                let hsl = to_hsl(c);
                let hsv = to_hsv(c);
                let cmyk = to_cmyk(c);
                prop_assert!(hsl.h >= 0.0 && hsl.h < 360.0, "hsl hue {}", hsl.h);
                prop_assert!(hsv.h >= 0.0 && hsv.h < 360.0, "hsv hue {}", hsv.h);
                for v in [hsl.s, hsl.l, hsv.s, hsv.v, cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                    prop_assert!((0.0..=100.0).contains(&v), "percentage {}", v);
                }
            }

            #[test]
            fn cielch_is_well_formed(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let lch = to_cielch(Color::rgb(r, g, b));
                prop_assert!(lch.c >= 0.0);
                prop_assert!(lch.h >= 0.0 && lch.h < 360.0, "hue {}", lch.h);
                prop_assert!(lch.l >= -1e-9 && lch.l <= 100.0 + 1e-3, "L {}", lch.l);
            }
        }
    }
}
