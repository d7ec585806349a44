//! Exact decimal helpers shared by the color-space math.
//!
//! Every conversion runs on [`Decimal`] so chained conversions do not drift
//! the way binary floating point would.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ColorError, Result};

pub(crate) const SIXTY: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
pub(crate) const TWO_FIFTY_FIVE: Decimal = Decimal::from_parts(255, 0, 0, false, 0);
pub(crate) const THREE_SIXTY: Decimal = Decimal::from_parts(360, 0, 0, false, 0);
pub(crate) const SIX: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
pub(crate) const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
pub(crate) const TEN: Decimal = Decimal::TEN;

/// Lifts a real into the decimal domain through its shortest decimal text,
/// so `0.1` becomes exactly `0.1`.
pub(crate) fn from_f64(value: f64, notation: &'static str) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(ColorError::invalid(notation));
    }
    Decimal::from_str(&value.to_string()).map_err(|_| ColorError::invalid(notation))
}

/// Rounds half away from zero to `dp` places and drops trailing zeros.
/// Negative zero collapses to zero.
pub(crate) fn round_dp(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded.normalize()
    }
}

/// Rounds to the nearest integer channel value, saturating at 0 and 255.
pub(crate) fn to_channel(value: Decimal) -> u8 {
    round_dp(value, 0)
        .clamp(Decimal::ZERO, TWO_FIFTY_FIVE)
        .to_u8()
        .unwrap_or(u8::MAX)
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    // Decimal always fits an f64; the fallback is unreachable in practice.
    value.to_f64().unwrap_or(f64::NAN)
}
