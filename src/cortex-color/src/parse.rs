//! Parsing of functional color strings such as `rgb(255, 0, 0)`.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ColorError, Result};

/// Keyword, parenthesized body without `)`, nothing after the closing paren.
static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([a-z]+)\(([^)]+)\)\s*$").expect("functional regex pattern is valid")
});

/// First signed decimal number inside a token; `%` and other noise are ignored.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("number regex pattern is valid"));

const CHANNEL: RangeInclusive<f64> = 0.0..=255.0;
const HUE: RangeInclusive<f64> = 0.0..=360.0;
const PERCENT: RangeInclusive<f64> = 0.0..=100.0;
const ALPHA: RangeInclusive<f64> = 0.0..=1.0;

/// Shape of one functional notation: its keyword and per-component ranges.
/// The arity is the number of ranges.
pub(crate) struct Grammar<const N: usize> {
    pub keyword: &'static str,
    pub ranges: [RangeInclusive<f64>; N],
}

pub(crate) const RGB: Grammar<3> = Grammar {
    keyword: "rgb",
    ranges: [CHANNEL, CHANNEL, CHANNEL],
};

pub(crate) const RGBA: Grammar<4> = Grammar {
    keyword: "rgba",
    ranges: [CHANNEL, CHANNEL, CHANNEL, ALPHA],
};

/// Shared by the `hsl` and `hsb` setters.
pub(crate) const HSL: Grammar<3> = Grammar {
    keyword: "hsl",
    ranges: [HUE, PERCENT, PERCENT],
};

/// Shared by the `hsla` and `hsba` setters.
pub(crate) const HSLA: Grammar<4> = Grammar {
    keyword: "hsla",
    ranges: [HUE, PERCENT, PERCENT, ALPHA],
};

impl<const N: usize> Grammar<N> {
    /// Splits `input` into exactly `N` numbers and range-checks each one.
    ///
    /// Tokens without a number parse as NaN and fail the range check.
    pub(crate) fn parse(&self, input: &str) -> Result<[f64; N]> {
        let invalid = || ColorError::invalid(self.keyword);

        let captures = FUNCTIONAL.captures(input).ok_or_else(invalid)?;
        if &captures[1] != self.keyword {
            return Err(invalid());
        }

        let values: Vec<f64> = captures[2].split(',').map(parse_token).collect();
        let values: [f64; N] = values.try_into().map_err(|_| invalid())?;

        if values
            .iter()
            .zip(&self.ranges)
            .all(|(value, range)| range.contains(value))
        {
            Ok(values)
        } else {
            Err(invalid())
        }
    }
}

fn parse_token(token: &str) -> f64 {
    NUMBER
        .find(token.trim())
        .and_then(|number| number.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Narrows a validated channel to `u8`, rejecting fractional values.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn channel(value: f64, keyword: &'static str) -> Result<u8> {
    if value.fract() == 0.0 && CHANNEL.contains(&value) {
        Ok(value as u8)
    } else {
        Err(ColorError::invalid(keyword))
    }
}
