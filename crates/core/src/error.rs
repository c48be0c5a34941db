//! Error types for the colorlab engine.

use thiserror::Error;

/// Errors produced by the color engine.
///
/// Only [`ColorError::InvalidColorFormat`] can come out of color input. The
/// `Unknown*` variants are raised when a user-facing name (CLI flag, WASM
/// argument) does not match one of the engine's closed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input string does not denote a color.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A color space name was not recognized.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// A palette scheme name was not recognized.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// A color vision deficiency name was not recognized.
    #[error("unknown deficiency: {0}")]
    UnknownDeficiency(String),

    /// A readability level or text size was not recognized.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_format_includes_message() {
        let err = ColorError::InvalidColorFormat("notacolor".into());
        let msg = format!("{err}");
        assert!(msg.contains("notacolor"), "missing input in: {msg}");
        assert!(msg.contains("invalid color"), "missing kind in: {msg}");
    }

    #[test]
    fn unknown_names_include_the_name() {
        let cases = [
            ColorError::UnknownColorSpace("xyz".into()),
            ColorError::UnknownScheme("tetradic".into()),
            ColorError::UnknownDeficiency("protanomaly".into()),
            ColorError::UnknownOption("AAAA".into()),
        ];
        for (err, name) in cases
            .iter()
            .zip(["xyz", "tetradic", "protanomaly", "AAAA"])
        {
            let msg = err.to_string();
            assert!(msg.contains(name), "missing '{name}' in: {msg}");
        }
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
