//! Error types for color conversion.

use thiserror::Error;

/// Errors raised by [`ColorConverter`](crate::ColorConverter) setters and accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A read was attempted before any color was stored.
    #[error("Color is not set")]
    ColorNotSet,

    /// Input did not match the notation grammar, or a component was out of range.
    #[error("Invalid {notation} color")]
    InvalidColorFormat {
        /// Lowercase keyword of the offending notation (`rgb`, `hsla`, `hex`, ...).
        notation: &'static str,
    },

    /// A notation tag was not one of `HEX`, `RGB`, `RGBA`, `HSB`, `HSBA`, `HSL`, `HSLA`.
    #[error("Invalid color type: {0}")]
    UnknownNotation(String),

    /// Converter configuration could not be parsed.
    #[error("Invalid converter config: {0}")]
    Config(String),
}

impl ColorError {
    pub(crate) const fn invalid(notation: &'static str) -> Self {
        Self::InvalidColorFormat { notation }
    }
}

/// Result type alias using [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;
