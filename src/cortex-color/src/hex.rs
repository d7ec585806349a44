//! Hex codec: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
//!
//! The alpha channel is quantized to eleven steps (0, 0.1, ..., 1) through a
//! fixed byte table. Bytes outside the table decode as opaque, and alphas
//! that do not snap onto a step encode as `FF`.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;

use crate::decimal;
use crate::error::{ColorError, Result};
use crate::model::Rgba;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[A-Fa-f0-9]{3,4}|[A-Fa-f0-9]{6}|[A-Fa-f0-9]{8})$")
        .expect("hex regex pattern is valid")
});

/// Alpha byte for each tenth of opacity, indexed by tenths.
const ALPHA_BYTES: [u8; 11] = [
    0x00, 0x1A, 0x33, 0x4D, 0x66, 0x80, 0x99, 0xB3, 0xCC, 0xE6, 0xFF,
];

fn invalid() -> ColorError {
    ColorError::invalid("hex")
}

/// Decodes an alpha byte, falling back to fully opaque for unmapped bytes.
pub(crate) fn alpha_from_byte(byte: u8) -> f64 {
    ALPHA_BYTES
        .iter()
        .position(|&step| step == byte)
        .map_or(1.0, |tenths| f64::from(tenths as u8) / 10.0)
}

/// Encodes an alpha after snapping it to one decimal place.
/// Alphas outside 0-1 (or not finite) fall back to `FF`.
pub(crate) fn alpha_to_byte(alpha: f64) -> u8 {
    decimal::from_f64(alpha, "hex")
        .ok()
        .map(|alpha| decimal::round_dp(alpha * decimal::TEN, 0))
        .and_then(|tenths| tenths.to_usize())
        .and_then(|tenths| ALPHA_BYTES.get(tenths).copied())
        .unwrap_or(0xFF)
}

/// Parses a hex color string into canonical RGBA.
pub(crate) fn decode(hex: &str) -> Result<Rgba> {
    if !HEX_COLOR.is_match(hex) {
        return Err(invalid());
    }

    let digits = &hex[1..];
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };

    let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
    let (rgb, alpha) = if expanded.len() == 8 {
        (value >> 8, alpha_from_byte((value & 0xFF) as u8))
    } else {
        (value, 1.0)
    };

    Ok(Rgba::new(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
        alpha,
    ))
}

/// Formats canonical RGBA as uppercase hex, appending alpha only when not opaque.
pub(crate) fn encode(rgba: &Rgba) -> String {
    let hex = format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b);
    if rgba.a == 1.0 {
        hex
    } else {
        format!("{hex}{:02X}", alpha_to_byte(rgba.a))
    }
}
