//! Notation tags selecting an output color family.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// One of the seven supported color notations.
///
/// The tag selects both the target color model and whether the alpha
/// channel is carried in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Notation {
    /// `#RRGGBB` / `#RRGGBBAA`.
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`.
    Rgba,
    /// Hue, saturation, brightness.
    Hsb,
    /// Hue, saturation, brightness, alpha.
    Hsba,
    /// Hue, saturation, lightness.
    Hsl,
    /// Hue, saturation, lightness, alpha.
    Hsla,
}

impl Notation {
    /// All notations, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Hex,
        Self::Rgb,
        Self::Rgba,
        Self::Hsb,
        Self::Hsba,
        Self::Hsl,
        Self::Hsla,
    ];

    /// Returns the uppercase tag, e.g. `"HSLA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Hsb => "HSB",
            Self::Hsba => "HSBA",
            Self::Hsl => "HSL",
            Self::Hsla => "HSLA",
        }
    }

    /// Returns `true` if structured values of this notation carry an `a` field.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsba | Self::Hsla)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|notation| notation.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownNotation(s.to_string()))
    }
}
