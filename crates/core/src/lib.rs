#![deny(unsafe_code)]
//! Core color engine for colorlab.
//!
//! A stateless set of pure functions over [`Color`]: parsing and
//! normalization, color-space conversion (HSL, HSV, CMYK, CIELAB, CIELCH),
//! palette generation (ramps and harmonic schemes), WCAG contrast, and color
//! vision deficiency simulation. [`ColorReport`] bundles all of them for one
//! color; [`random_colors`] samples deterministic colors from a seed.
//!
//! Only [`parse`] can fail on color input. Every other function is total.

pub mod color;
pub mod contrast;
pub mod error;
pub mod named;
pub mod palette;
pub mod parse;
pub mod prng;
pub mod report;
pub mod space;
pub mod vision;

pub use color::{Color, LinearRgb};
pub use contrast::{
    contrast_against, contrast_ratio, contrast_ratio as readability, is_readable,
    relative_luminance, ContrastResult, Level, ReadabilityOptions, Size,
};
pub use error::ColorError;
pub use named::{CssNames, NameLookup, Unnamed};
pub use palette::Scheme;
pub use parse::{normalize, parse};
pub use prng::{random_colors, Xorshift64};
pub use report::{ColorReport, ContrastReport, Swatch};
pub use space::{Cielab, Cielch, Cmyk, ColorSpace, Hsl, Hsv, Representation, Rgb};
pub use vision::{blindness, Blindness, Deficiency};
