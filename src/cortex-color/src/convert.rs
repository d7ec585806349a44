//! HSB/HSL to RGBA and back, computed in exact decimal arithmetic.
//!
//! Both directions use the lightness-based formulas for the HSB family as
//! well as for HSL: an HSB value is read with its brightness in the
//! lightness slot, and the reverse direction reports HSL saturation under
//! the HSB name.

use rust_decimal::Decimal;

use crate::decimal::{self, HALF, SIX, SIXTY, THREE_SIXTY, TWO_FIFTY_FIVE};
use crate::error::{ColorError, Result};
use crate::model::{Hsba, Rgba};

const NOTATION: &str = "hsba";

/// Converts an HSBA value to canonical RGBA.
///
/// Fails when the hue falls outside 0-360 degrees, or when a component is
/// so large that the arithmetic overflows. Channels computed from
/// out-of-range saturation or brightness saturate at 0 and 255.
pub(crate) fn hsba_to_rgba(hsba: &Hsba) -> Result<Rgba> {
    let invalid = || ColorError::invalid(NOTATION);

    let hue = decimal::from_f64(hsba.h, NOTATION)?;
    let saturation = decimal::from_f64(hsba.s, NOTATION)?
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or_else(invalid)?;
    let brightness = decimal::from_f64(hsba.b, NOTATION)?
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or_else(invalid)?;

    let spread = brightness
        .checked_mul(Decimal::TWO)
        .and_then(|doubled| doubled.checked_sub(Decimal::ONE))
        .ok_or_else(invalid)?
        .abs();
    let chroma = Decimal::ONE
        .checked_sub(spread)
        .and_then(|scale| scale.checked_mul(saturation))
        .ok_or_else(invalid)?;
    let hue_prime = hue.checked_div(SIXTY).ok_or_else(invalid)?;
    let x = chroma
        .checked_mul(Decimal::ONE - (hue_prime % Decimal::TWO - Decimal::ONE).abs())
        .ok_or_else(invalid)?;

    // Closed unit intervals, first match wins, so 360 degrees lands in the last one.
    let sector = (0..6u8)
        .find(|&sector| {
            let lower = Decimal::from(sector);
            lower <= hue_prime && hue_prime <= lower + Decimal::ONE
        })
        .ok_or_else(invalid)?;

    let zero = Decimal::ZERO;
    let (r1, g1, b1) = match sector {
        0 => (chroma, x, zero),
        1 => (x, chroma, zero),
        2 => (zero, chroma, x),
        3 => (zero, x, chroma),
        4 => (x, zero, chroma),
        _ => (chroma, zero, x),
    };

    let m = chroma
        .checked_div(Decimal::TWO)
        .and_then(|half| brightness.checked_sub(half))
        .ok_or_else(invalid)?;
    let channel = |value: Decimal| {
        value
            .checked_add(m)
            .and_then(|shifted| shifted.checked_mul(TWO_FIFTY_FIVE))
            .map(decimal::to_channel)
            .ok_or_else(invalid)
    };

    Ok(Rgba::new(channel(r1)?, channel(g1)?, channel(b1)?, hsba.a))
}

/// Converts canonical RGBA to HSBA, rounding every component to `precision`
/// decimal places. Alpha passes through unchanged.
pub(crate) fn rgba_to_hsba(rgba: &Rgba, precision: u32) -> Hsba {
    let r = Decimal::from(rgba.r) / TWO_FIFTY_FIVE;
    let g = Decimal::from(rgba.g) / TWO_FIFTY_FIVE;
    let b = Decimal::from(rgba.b) / TWO_FIFTY_FIVE;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let luminance = (max + min) / Decimal::TWO;
    let third = decimal::to_f64(decimal::round_dp(
        luminance * Decimal::ONE_HUNDRED,
        precision,
    ));

    if max == min {
        return Hsba::new(0.0, 0.0, third, rgba.a);
    }

    let d = max - min;
    let saturation = if luminance <= HALF {
        d / (max + min)
    } else {
        d / (Decimal::TWO - (max + min))
    };

    let mut hue = if max == r {
        (g - b) / d + if g < b { SIX } else { Decimal::ZERO }
    } else if max == g {
        (b - r) / d + Decimal::TWO
    } else {
        (r - g) / d + Decimal::from(4)
    };
    hue *= SIXTY;
    if hue.is_sign_negative() {
        hue += THREE_SIXTY;
    }

    Hsba::new(
        decimal::to_f64(decimal::round_dp(hue, precision)),
        decimal::to_f64(decimal::round_dp(
            saturation * Decimal::ONE_HUNDRED,
            precision,
        )),
        third,
        rgba.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        let red = hsba_to_rgba(&Hsba::new(0.0, 100.0, 50.0, 1.0)).unwrap();
        assert_eq!(red, Rgba::new(255, 0, 0, 1.0));

        let green = hsba_to_rgba(&Hsba::new(120.0, 100.0, 50.0, 1.0)).unwrap();
        assert_eq!(green, Rgba::new(0, 255, 0, 1.0));

        let blue = hsba_to_rgba(&Hsba::new(240.0, 100.0, 50.0, 0.3)).unwrap();
        assert_eq!(blue, Rgba::new(0, 0, 255, 0.3));
    }

    #[test]
    fn test_full_turn_is_red() {
        let red = hsba_to_rgba(&Hsba::new(360.0, 100.0, 50.0, 1.0)).unwrap();
        assert_eq!(red, Rgba::new(255, 0, 0, 1.0));
    }

    #[test]
    fn test_hue_out_of_range() {
        assert_eq!(
            hsba_to_rgba(&Hsba::new(-1.0, 50.0, 50.0, 1.0)),
            Err(ColorError::invalid("hsba"))
        );
        assert_eq!(
            hsba_to_rgba(&Hsba::new(361.0, 50.0, 50.0, 1.0)),
            Err(ColorError::invalid("hsba"))
        );
        assert!(hsba_to_rgba(&Hsba::new(f64::NAN, 50.0, 50.0, 1.0)).is_err());
    }

    #[test]
    fn test_overflowing_components_fail() {
        assert_eq!(
            hsba_to_rgba(&Hsba::new(10.0, 1e16, 1e16, 1.0)),
            Err(ColorError::invalid("hsba"))
        );
        assert_eq!(
            hsba_to_rgba(&Hsba::new(10.0, 1e20, 1e20, 1.0)),
            Err(ColorError::invalid("hsba"))
        );
    }

    #[test]
    fn test_channels_saturate() {
        let white = hsba_to_rgba(&Hsba::new(0.0, 0.0, 150.0, 1.0)).unwrap();
        assert_eq!(white, Rgba::new(255, 255, 255, 1.0));
    }

    #[test]
    fn test_goldenrod_to_hsba() {
        let hsba = rgba_to_hsba(&Rgba::new(184, 134, 11, 1.0), 1);
        assert_eq!(hsba, Hsba::new(42.7, 88.7, 38.2, 1.0));
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(
            rgba_to_hsba(&Rgba::new(128, 128, 128, 0.5), 1),
            Hsba::new(0.0, 0.0, 50.2, 0.5)
        );
        assert_eq!(
            rgba_to_hsba(&Rgba::new(255, 255, 255, 1.0), 1),
            Hsba::new(0.0, 0.0, 100.0, 1.0)
        );
        assert_eq!(
            rgba_to_hsba(&Rgba::new(0, 0, 0, 1.0), 1),
            Hsba::new(0.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_red_uses_lightness_saturation() {
        // Textbook HSV would report brightness 100; this family reports 50.
        assert_eq!(
            rgba_to_hsba(&Rgba::new(255, 0, 0, 1.0), 1),
            Hsba::new(0.0, 100.0, 50.0, 1.0)
        );
    }

    #[test]
    fn test_red_max_with_green_below_blue() {
        assert_eq!(
            rgba_to_hsba(&Rgba::new(255, 51, 168, 1.0), 1),
            Hsba::new(325.6, 100.0, 60.0, 1.0)
        );
    }

    #[test]
    fn test_precision() {
        let hsba = rgba_to_hsba(&Rgba::new(184, 134, 11, 1.0), 3);
        assert_eq!(hsba, Hsba::new(42.659, 88.718, 38.235, 1.0));
        let hsba = rgba_to_hsba(&Rgba::new(184, 134, 11, 1.0), 0);
        assert_eq!(hsba, Hsba::new(43.0, 89.0, 38.0, 1.0));
    }
}
