//! String rendering for structured color values.
//!
//! Numbers print in shortest form (`1`, `0.5`, `42.7`). HSB values render
//! with the `hsl`/`hsla` keyword, brightness taking the lightness slot.

use std::fmt;

use crate::model::{ColorValue, Converted, Hsb, Hsba, Hsl, Hsla, Rgb, Rgba};

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.b)
    }
}

impl fmt::Display for Hsba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.b, self.a)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => f.write_str(hex),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Self::Rgba(rgba) => fmt::Display::fmt(rgba, f),
            Self::Hsb(hsb) => fmt::Display::fmt(hsb, f),
            Self::Hsba(hsba) => fmt::Display::fmt(hsba, f),
            Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
            Self::Hsla(hsla) => fmt::Display::fmt(hsla, f),
        }
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}
