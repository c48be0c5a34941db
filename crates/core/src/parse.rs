//! Validation and canonicalization of user-supplied color strings.
//!
//! Accepted forms (case insensitive, surrounding whitespace ignored):
//! - hex with or without `#`: `rgb`, `rgba`, `rrggbb`, `rrggbbaa`
//! - `rgb()` / `rgba()` with comma- or space-separated channels, integers
//!   or percentages, and an optional alpha (4th comma argument or `/ a`)
//! - `hsl()` / `hsla()` with the same argument layout
//! - CSS named colors and `transparent`
//!
//! Everything else is an [`ColorError::InvalidColorFormat`]. The error is
//! terminal for the request: there is no fallback color.

use crate::color::Color;
use crate::error::ColorError;
use crate::named::css_color;
use crate::space::{hsl_to_rgb, Hsl};
use tracing::debug;

/// Parses any accepted color string into a [`Color`].
pub fn parse(input: &str) -> Result<Color, ColorError> {
    parse_inner(input).inspect_err(|err| debug!(input, %err, "rejected color input"))
}

/// Parses a color string and returns its canonical hex form
/// (`#rrggbb`, or `#rrggbbaa` when not fully opaque).
pub fn normalize(input: &str) -> Result<String, ColorError> {
    parse(input).map(Color::to_hex)
}

fn invalid(msg: impl Into<String>) -> ColorError {
    ColorError::InvalidColorFormat(msg.into())
}

fn parse_inner(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty color string"));
    }
    let lower = trimmed.to_ascii_lowercase();

    if let Some(digits) = lower.strip_prefix('#') {
        return parse_hex(digits);
    }

    if let Some((func, args)) = lower
        .strip_suffix(')')
        .and_then(|body| body.split_once('('))
    {
        return match func.trim() {
            "rgb" | "rgba" => parse_rgb_args(args),
            "hsl" | "hsla" => parse_hsl_args(args),
            other => Err(invalid(format!("unsupported color function '{other}'"))),
        };
    }

    if lower == "transparent" {
        return Ok(Color::rgba(0, 0, 0, 0));
    }
    if let Some(color) = css_color(&lower) {
        return Ok(color);
    }

    parse_hex(&lower).map_err(|_| invalid(format!("'{trimmed}' is not a color")))
}

/// Parses 3, 4, 6 or 8 hex digits (no `#`). Short forms duplicate each nibble.
fn parse_hex(digits: &str) -> Result<Color, ColorError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(format!("invalid hex digits '{digits}'")));
    }
    match digits.len() {
        3 | 4 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            Color::from_hex(&expanded)
        }
        6 | 8 => Color::from_hex(digits),
        n => Err(invalid(format!("expected 3, 4, 6 or 8 hex digits, got {n}"))),
    }
}

/// Splits function arguments into the three components and an optional alpha.
///
/// Legacy syntax uses commas throughout (`rgb(1, 2, 3, 0.5)`); modern syntax
/// separates with spaces and puts alpha after a slash (`rgb(1 2 3 / 50%)`).
fn split_args(args: &str) -> Result<([&str; 3], Option<&str>), ColorError> {
    let (components, slash_alpha) = match args.split_once('/') {
        Some((components, alpha)) => (components, Some(alpha.trim())),
        None => (args, None),
    };

    let legacy = components.contains(',');
    let parts: Vec<&str> = if legacy {
        if slash_alpha.is_some() {
            return Err(invalid("cannot mix commas with '/' alpha"));
        }
        components.split(',').map(str::trim).collect()
    } else {
        components.split_whitespace().collect()
    };

    // A bare fourth argument is alpha only in the comma form.
    match (parts.as_slice(), slash_alpha) {
        ([a, b, c], alpha) => Ok(([*a, *b, *c], alpha)),
        ([a, b, c, alpha], None) if legacy => Ok(([*a, *b, *c], Some(*alpha))),
        _ => Err(invalid(format!("expected 3 components, got {}", parts.len()))),
    }
}

fn parse_number(token: &str) -> Result<f64, ColorError> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(format!("invalid number '{token}'")))
}

fn in_range(value: f64, max: f64, token: &str) -> Result<f64, ColorError> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(format!("component '{token}' out of range")))
    }
}

/// An RGB channel: `0..=255` or `0%..=100%`, returned as a unit fraction.
fn parse_channel(token: &str) -> Result<f64, ColorError> {
    match token.strip_suffix('%') {
        Some(pct) => Ok(in_range(parse_number(pct)?, 100.0, token)? / 100.0),
        None => Ok(in_range(parse_number(token)?, 255.0, token)? / 255.0),
    }
}

/// A saturation or lightness: `0..=100`, with or without `%`.
fn parse_percentage(token: &str) -> Result<f64, ColorError> {
    let number = token.strip_suffix('%').unwrap_or(token);
    in_range(parse_number(number)?, 100.0, token)
}

/// An alpha: `0..=1` or `0%..=100%`, returned as a byte.
fn parse_alpha(token: &str) -> Result<u8, ColorError> {
    let fraction = match token.strip_suffix('%') {
        Some(pct) => in_range(parse_number(pct)?, 100.0, token)? / 100.0,
        None => in_range(parse_number(token)?, 1.0, token)?,
    };
    Ok((fraction * 255.0).round() as u8)
}

fn with_alpha(color: Color, alpha: Option<&str>) -> Result<Color, ColorError> {
    match alpha {
        Some(token) => Ok(Color::rgba(color.r, color.g, color.b, parse_alpha(token)?)),
        None => Ok(color),
    }
}

fn parse_rgb_args(args: &str) -> Result<Color, ColorError> {
    let ([r, g, b], alpha) = split_args(args)?;
    let color = Color::from_unit(parse_channel(r)?, parse_channel(g)?, parse_channel(b)?, None);
    with_alpha(color, alpha)
}

fn parse_hsl_args(args: &str) -> Result<Color, ColorError> {
    let ([h, s, l], alpha) = split_args(args)?;
    let hue = parse_number(h.strip_suffix("deg").unwrap_or(h))?;
    let hsl = Hsl {
        h: hue.rem_euclid(360.0),
        s: parse_percentage(s)?,
        l: parse_percentage(l)?,
    };
    with_alpha(hsl_to_rgb(hsl), alpha)
}
