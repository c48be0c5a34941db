#![deny(unsafe_code)]
//! WASM bindings for the colorlab color engine.
//!
//! Every export takes color strings and returns a string (canonical hex or
//! JSON). Errors surface as `JsValue` strings. The `*_json` helpers hold the
//! logic so it can be tested off the wasm target.

use colorlab_core::{
    contrast_ratio, is_readable as core_is_readable, parse, ColorError, ColorReport,
    ColorSpace, CssNames, ReadabilityOptions, Scheme,
};
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Error raised by the JSON helpers: either bad input or bad JSON.
#[derive(Debug)]
pub enum BindingError {
    Color(ColorError),
    Json(serde_json::Error),
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::Color(e) => write!(f, "{e}"),
            BindingError::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl From<ColorError> for BindingError {
    fn from(e: ColorError) -> Self {
        BindingError::Color(e)
    }
}

impl From<serde_json::Error> for BindingError {
    fn from(e: serde_json::Error) -> Self {
        BindingError::Json(e)
    }
}

pub fn report_json(input: &str) -> Result<String, BindingError> {
    let report = ColorReport::build(parse(input)?, &CssNames);
    Ok(serde_json::to_string(&report)?)
}

pub fn convert_json(input: &str, space: &str) -> Result<String, BindingError> {
    let space: ColorSpace = space.parse()?;
    Ok(serde_json::to_string(&space.convert(parse(input)?))?)
}

pub fn scheme_json(input: &str, name: &str) -> Result<String, BindingError> {
    let scheme: Scheme = name.parse()?;
    Ok(serde_json::to_string(&scheme.generate(parse(input)?))?)
}

pub fn blindness_json(input: &str) -> Result<String, BindingError> {
    Ok(serde_json::to_string(&colorlab_core::blindness(parse(input)?))?)
}

/// An empty options string means the defaults (AA, small text).
pub fn readable_with_options(a: &str, b: &str, options_json: &str) -> Result<bool, BindingError> {
    let options: ReadabilityOptions = if options_json.trim().is_empty() {
        ReadabilityOptions::default()
    } else {
        serde_json::from_str(options_json)?
    };
    Ok(core_is_readable(parse(a)?, parse(b)?, options))
}

/// Canonical hex form of any accepted color string.
#[wasm_bindgen]
pub fn normalize(input: &str) -> Result<String, JsValue> {
    colorlab_core::normalize(input).map_err(to_js)
}

/// Full color report as JSON.
#[wasm_bindgen]
pub fn report(input: &str) -> Result<String, JsValue> {
    report_json(input).map_err(to_js)
}

/// One color-space representation as JSON, tagged with its `space`.
#[wasm_bindgen]
pub fn convert(input: &str, space: &str) -> Result<String, JsValue> {
    convert_json(input, space).map_err(to_js)
}

/// A scheme's colors as a JSON array of hex strings.
#[wasm_bindgen]
pub fn scheme(input: &str, name: &str) -> Result<String, JsValue> {
    scheme_json(input, name).map_err(to_js)
}

/// WCAG contrast ratio between two colors.
#[wasm_bindgen]
pub fn readability(a: &str, b: &str) -> Result<f64, JsValue> {
    Ok(contrast_ratio(parse(a).map_err(to_js)?, parse(b).map_err(to_js)?))
}

/// Whether two colors are readable together, options as
/// `{"level": "AA" | "AAA", "size": "small" | "large"}`.
#[wasm_bindgen(js_name = isReadable)]
pub fn is_readable(a: &str, b: &str, options_json: &str) -> Result<bool, JsValue> {
    readable_with_options(a, b, options_json).map_err(to_js)
}

/// The four deficiency simulations as JSON.
#[wasm_bindgen]
pub fn blindness(input: &str) -> Result<String, JsValue> {
    blindness_json(input).map_err(to_js)
}
