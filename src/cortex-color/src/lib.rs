#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::float_cmp,
    clippy::many_single_char_names
)]
//! Cortex Color - conversion between hex, RGB(A), HSB(A) and HSL(A) notations.
//!
//! A [`ColorConverter`] stores one color in canonical RGBA form (integer
//! channels 0-255, alpha 0-1). Setters accept either a formatted string or a
//! structured value; [`ColorConverter::to`] renders the stored color in any
//! [`Notation`].
//!
//! ```text
//!  "#B8860B"  "rgb(..)"  Hsl { .. }        Notation::Hsl
//!       │          │          │                  ▲
//!       ▼          ▼          ▼                  │
//!   parse + validate ──► Rgba (stored) ──► convert + format
//! ```
//!
//! # Notes
//!
//! - String input is range-checked; structured input is taken as-is.
//! - HSB and HSL share the lightness-based math; HSB strings render with the
//!   `hsl(...)` keyword.
//! - Hex alpha is quantized to eleven steps (`00`, `1A`, ..., `FF`).
//! - All color-space math runs in exact decimal arithmetic.
//!
//! # Examples
//!
//! ```
//! use cortex_color::{ColorConverter, ColorValue, Hsl, Notation, Rgb};
//!
//! let mut converter = ColorConverter::new();
//! converter.hex("#ff0000")?;
//!
//! assert_eq!(converter.format(Notation::Rgba)?, "rgba(255, 0, 0, 1)");
//! assert_eq!(
//!     converter.value(Notation::Hsl)?,
//!     ColorValue::Hsl(Hsl::new(0.0, 100.0, 50.0))
//! );
//!
//! converter.rgb(Rgb::new(0, 0, 255))?;
//! assert_eq!(converter.format(Notation::Hex)?, "#0000FF");
//! # Ok::<(), cortex_color::ColorError>(())
//! ```


mod config;
mod convert;
mod converter;
mod decimal;
mod error;
mod format;
mod hex;
mod model;
mod notation;
mod parse;

pub use config::ConverterConfig;
pub use converter::ColorConverter;
pub use error::{ColorError, Result};
pub use model::{ColorInput, ColorValue, Converted, Hsb, Hsba, Hsl, Hsla, Rgb, Rgba};
pub use notation::Notation;
