//! The stateful converter: setters per notation, one accessor for all outputs.

use std::fmt;

use tracing::{debug, trace};

use crate::config::ConverterConfig;
use crate::convert::{hsba_to_rgba, rgba_to_hsba};
use crate::error::{ColorError, Result};
use crate::hex;
use crate::model::{ColorInput, ColorValue, Converted, Hsb, Hsba, Hsl, Hsla, Rgb, Rgba};
use crate::notation::Notation;
use crate::parse::{self, HSL, HSLA, RGB, RGBA};

/// Holds at most one color in canonical RGBA form.
///
/// Each setter parses its input, converts it to RGBA and replaces the stored
/// color. A failing setter leaves the stored color untouched. Setters return
/// `&mut Self`, so calls chain; the last successful one wins.
///
/// # Examples
///
/// ```
/// use cortex_color::{ColorConverter, Notation};
///
/// let mut converter = ColorConverter::new();
/// let hsl = converter.hex("#B8860B")?.format(Notation::Hsl)?;
/// assert_eq!(hsl, "hsl(42.7, 88.7%, 38.2%)");
/// # Ok::<(), cortex_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorConverter {
    color: Option<Rgba>,
    config: ConverterConfig,
}

impl ColorConverter {
    /// Creates an empty converter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty converter with the given configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            color: None,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Returns the stored canonical color, if any.
    pub fn rgba_value(&self) -> Option<Rgba> {
        self.color
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Sets the color from `rgb(r, g, b)` text or an [`Rgb`] value. Alpha becomes 1.
    pub fn rgb<'a>(&mut self, input: impl Into<ColorInput<'a, Rgb>>) -> Result<&mut Self> {
        let input = input.into();
        let result = match input {
            ColorInput::Text(text) => RGB.parse(text).and_then(|[r, g, b]| {
                Ok(Rgba::new(
                    parse::channel(r, RGB.keyword)?,
                    parse::channel(g, RGB.keyword)?,
                    parse::channel(b, RGB.keyword)?,
                    1.0,
                ))
            }),
            ColorInput::Value(rgb) => Ok(Rgba::from(rgb)),
        };
        self.commit(Notation::Rgb, &input, result)
    }

    /// Sets the color from `rgba(r, g, b, a)` text or an [`Rgba`] value.
    pub fn rgba<'a>(&mut self, input: impl Into<ColorInput<'a, Rgba>>) -> Result<&mut Self> {
        let input = input.into();
        let result = match input {
            ColorInput::Text(text) => RGBA.parse(text).and_then(|[r, g, b, a]| {
                Ok(Rgba::new(
                    parse::channel(r, RGBA.keyword)?,
                    parse::channel(g, RGBA.keyword)?,
                    parse::channel(b, RGBA.keyword)?,
                    a,
                ))
            }),
            ColorInput::Value(rgba) => Ok(rgba),
        };
        self.commit(Notation::Rgba, &input, result)
    }

    /// Sets the color from `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn hex(&mut self, hex: &str) -> Result<&mut Self> {
        self.commit(Notation::Hex, &hex, hex::decode(hex))
    }

    /// Sets the color from HSB. Text input uses the `hsl(h, s%, b%)` form.
    pub fn hsb<'a>(&mut self, input: impl Into<ColorInput<'a, Hsb>>) -> Result<&mut Self> {
        let input = input.into();
        let result = match input {
            ColorInput::Text(text) => HSL
                .parse(text)
                .and_then(|[h, s, b]| hsba_to_rgba(&Hsba::new(h, s, b, 1.0))),
            ColorInput::Value(hsb) => hsba_to_rgba(&hsb.with_alpha(1.0)),
        };
        self.commit(Notation::Hsb, &input, result)
    }

    /// Sets the color from HSBA. Text input uses the `hsla(h, s%, b%, a)` form.
    pub fn hsba<'a>(&mut self, input: impl Into<ColorInput<'a, Hsba>>) -> Result<&mut Self> {
        let input = input.into();
        let result = match input {
            ColorInput::Text(text) => HSLA
                .parse(text)
                .and_then(|[h, s, b, a]| hsba_to_rgba(&Hsba::new(h, s, b, a))),
            ColorInput::Value(hsba) => hsba_to_rgba(&hsba),
        };
        self.commit(Notation::Hsba, &input, result)
    }

    /// Sets the color from HSL; the lightness is routed through [`Self::hsb`].
    pub fn hsl<'a>(&mut self, input: impl Into<ColorInput<'a, Hsl>>) -> Result<&mut Self> {
        match input.into() {
            ColorInput::Text(text) => self.hsb(text),
            ColorInput::Value(hsl) => self.hsb(Hsb::from(hsl)),
        }
    }

    /// Sets the color from HSLA; the lightness is routed through [`Self::hsba`].
    pub fn hsla<'a>(&mut self, input: impl Into<ColorInput<'a, Hsla>>) -> Result<&mut Self> {
        match input.into() {
            ColorInput::Text(text) => self.hsba(text),
            ColorInput::Value(hsla) => self.hsba(Hsba::from(hsla)),
        }
    }

    fn commit(
        &mut self,
        notation: Notation,
        input: &dyn fmt::Debug,
        result: Result<Rgba>,
    ) -> Result<&mut Self> {
        match result {
            Ok(rgba) => {
                debug!(%notation, ?rgba, "color set");
                self.color = Some(rgba);
                Ok(self)
            }
            Err(err) => {
                debug!(%notation, ?input, error = %err, "color input rejected");
                Err(err)
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Renders the stored color in `notation`, as a string when `as_string`
    /// is set and as a structured value otherwise. `HEX` is always a string.
    pub fn to(&self, notation: Notation, as_string: bool) -> Result<Converted> {
        if as_string || notation == Notation::Hex {
            self.format(notation).map(Converted::Text)
        } else {
            self.value(notation).map(Converted::Value)
        }
    }

    /// Renders the stored color as a formatted string.
    pub fn format(&self, notation: Notation) -> Result<String> {
        self.value(notation).map(|value| value.to_string())
    }

    /// Renders the stored color as a structured value.
    pub fn value(&self, notation: Notation) -> Result<ColorValue> {
        let rgba = self.color.as_ref().ok_or(ColorError::ColorNotSet)?;
        trace!(%notation, ?rgba, "converting color");

        let precision = self.config.precision;
        Ok(match notation {
            Notation::Hex => ColorValue::Hex(hex::encode(rgba)),
            Notation::Rgb => ColorValue::Rgb(rgba.without_alpha()),
            Notation::Rgba => ColorValue::Rgba(*rgba),
            Notation::Hsb => ColorValue::Hsb(rgba_to_hsba(rgba, precision).without_alpha()),
            Notation::Hsba => ColorValue::Hsba(rgba_to_hsba(rgba, precision)),
            Notation::Hsl => {
                ColorValue::Hsl(Hsla::from(rgba_to_hsba(rgba, precision)).without_alpha())
            }
            Notation::Hsla => ColorValue::Hsla(Hsla::from(rgba_to_hsba(rgba, precision))),
        })
    }

    /// Renders the stored color as a string in the configured default notation.
    pub fn render(&self) -> Result<String> {
        self.format(self.config.default_notation)
    }
}
