//! Error types for color parsing and contrast configuration.

use thiserror::Error;

/// Errors produced at the input boundary, before any contrast search runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A hex code had the wrong length or a non-hex character.
    #[error("invalid color format: {0}")]
    InvalidFormat(String),

    /// An RGB or HSL component was outside its range or not an integer.
    #[error("color component out of range: {0}")]
    InvalidRange(String),

    /// A WCAG level token was neither A/AA/AAA nor a ratio in [1, 21].
    #[error("unknown WCAG level: {0}")]
    UnknownLevel(String),

    /// A threshold request named an axis other than brightness/lightness.
    #[error("unknown search axis: {0}")]
    UnknownAxis(String),

    /// A batch configuration document could not be deserialized.
    #[error("invalid batch configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "node")]
impl From<ColorError> for napi::Error {
    fn from(err: ColorError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
