//! Structured color values accepted by setters and produced by accessors.
//!
//! [`Rgba`] is the canonical form stored by the converter. The HSB and HSL
//! families are transient: they are converted to [`Rgba`] on input and
//! derived from it on output.

use serde::{Deserialize, Serialize};

/// Red, green and blue channels (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Canonical color: integer channels plus fractional alpha (0-1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Hue (degrees), saturation and brightness (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

/// [`Hsb`] with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue (degrees), saturation and lightness (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// [`Hsl`] with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Drops the alpha channel.
    pub const fn without_alpha(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl Hsb {
    pub const fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    pub const fn with_alpha(self, a: f64) -> Hsba {
        Hsba {
            h: self.h,
            s: self.s,
            b: self.b,
            a,
        }
    }
}

impl Hsba {
    pub const fn new(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self { h, s, b, a }
    }

    pub const fn without_alpha(self) -> Hsb {
        Hsb::new(self.h, self.s, self.b)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    pub const fn without_alpha(self) -> Hsl {
        Hsl::new(self.h, self.s, self.l)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 1.0)
    }
}

// HSL values travel through the HSB path under a renamed third field.

impl From<Hsl> for Hsb {
    fn from(hsl: Hsl) -> Self {
        Self::new(hsl.h, hsl.s, hsl.l)
    }
}

impl From<Hsla> for Hsba {
    fn from(hsla: Hsla) -> Self {
        Self::new(hsla.h, hsla.s, hsla.l, hsla.a)
    }
}

impl From<Hsba> for Hsla {
    fn from(hsba: Hsba) -> Self {
        Self::new(hsba.h, hsba.s, hsba.b, hsba.a)
    }
}

/// Setter input: either a formatted string or a structured value.
///
/// Built implicitly through `From`, so setters accept both
/// `converter.rgb("rgb(1, 2, 3)")` and `converter.rgb(Rgb::new(1, 2, 3))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a, T> {
    /// Text in the notation's functional form; validated on parse.
    Text(&'a str),
    /// Structured value; copied as-is without range validation.
    Value(T),
}

macro_rules! color_input_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a str> for ColorInput<'a, $ty> {
                fn from(text: &'a str) -> Self {
                    Self::Text(text)
                }
            }

            impl<'a> From<&'a String> for ColorInput<'a, $ty> {
                fn from(text: &'a String) -> Self {
                    Self::Text(text.as_str())
                }
            }

            impl From<$ty> for ColorInput<'_, $ty> {
                fn from(value: $ty) -> Self {
                    Self::Value(value)
                }
            }
        )*
    };
}

color_input_from!(Rgb, Rgba, Hsb, Hsba, Hsl, Hsla);

/// A color rendered into one notation as a structured value.
///
/// Serializes without a tag, so `Hsl` becomes `{"h":..,"s":..,"l":..}`
/// and notations without alpha carry no `a` field at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsb(Hsb),
    Hsba(Hsba),
    Hsl(Hsl),
    Hsla(Hsla),
}

/// Result of [`ColorConverter::to`](crate::ColorConverter::to).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    /// Formatted string, e.g. `"hsl(42.7, 88.7%, 38.2%)"`.
    Text(String),
    /// Structured value.
    Value(ColorValue),
}

impl Converted {
    /// Returns the formatted string, if this is a text result.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Value(_) => None,
        }
    }

    /// Returns the structured value, if this is a value result.
    pub fn into_value(self) -> Option<ColorValue> {
        match self {
            Self::Text(_) => None,
            Self::Value(value) => Some(value),
        }
    }
}
