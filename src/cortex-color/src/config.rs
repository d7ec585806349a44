//! Converter configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::notation::Notation;

/// Configuration for a [`ColorConverter`](crate::ColorConverter).
///
/// Every field has a default, so a TOML document may set any subset:
///
/// ```toml
/// precision = 2
/// default_notation = "HSLA"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Decimal places kept in HSB/HSL output components.
    pub precision: u32,

    /// Notation used by [`ColorConverter::render`](crate::ColorConverter::render).
    pub default_notation: Notation,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            precision: 1,
            default_notation: Notation::Hex,
        }
    }
}

impl ConverterConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ColorError::Config(e.to_string()))
    }
}
