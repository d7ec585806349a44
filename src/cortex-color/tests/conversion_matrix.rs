//! Every notation converts to every other notation for a fixed palette.

use cortex_color::{ColorConverter, Notation, Result};
use pretty_assertions::assert_eq;

struct Fixture {
    hex: &'static str,
    rgb: &'static str,
    rgba: &'static str,
    hsl: &'static str,
    hsla: &'static str,
}

const PALETTE: [Fixture; 9] = [
    Fixture {
        hex: "#B8860B",
        rgb: "rgb(184, 134, 11)",
        rgba: "rgba(184, 134, 11, 1)",
        hsl: "hsl(42.7, 88.7%, 38.2%)",
        hsla: "hsla(42.7, 88.7%, 38.2%, 1)",
    },
    Fixture {
        hex: "#ff5733",
        rgb: "rgb(255, 87, 51)",
        rgba: "rgba(255, 87, 51, 1)",
        hsl: "hsl(10.6, 100%, 60%)",
        hsla: "hsla(10.6, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#33ff57",
        rgb: "rgb(51, 255, 87)",
        rgba: "rgba(51, 255, 87, 1)",
        hsl: "hsl(130.6, 100%, 60%)",
        hsla: "hsla(130.6, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#3357ff",
        rgb: "rgb(51, 87, 255)",
        rgba: "rgba(51, 87, 255, 1)",
        hsl: "hsl(229.4, 100%, 60%)",
        hsla: "hsla(229.4, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#ff33a8",
        rgb: "rgb(255, 51, 168)",
        rgba: "rgba(255, 51, 168, 1)",
        hsl: "hsl(325.6, 100%, 60%)",
        hsla: "hsla(325.6, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#a833ff",
        rgb: "rgb(168, 51, 255)",
        rgba: "rgba(168, 51, 255, 1)",
        hsl: "hsl(274.4, 100%, 60%)",
        hsla: "hsla(274.4, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#33fff6",
        rgb: "rgb(51, 255, 246)",
        rgba: "rgba(51, 255, 246, 1)",
        hsl: "hsl(177.4, 100%, 60%)",
        hsla: "hsla(177.4, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#f6ff33",
        rgb: "rgb(246, 255, 51)",
        rgba: "rgba(246, 255, 51, 1)",
        hsl: "hsl(62.6, 100%, 60%)",
        hsla: "hsla(62.6, 100%, 60%, 1)",
    },
    Fixture {
        hex: "#ff8f33",
        rgb: "rgb(255, 143, 51)",
        rgba: "rgba(255, 143, 51, 1)",
        hsl: "hsl(27.1, 100%, 60%)",
        hsla: "hsla(27.1, 100%, 60%, 1)",
    },
];

const NOTATIONS: [Notation; 5] = [
    Notation::Hex,
    Notation::Rgb,
    Notation::Rgba,
    Notation::Hsl,
    Notation::Hsla,
];

impl Fixture {
    fn text(&self, notation: Notation) -> String {
        match notation {
            Notation::Hex => self.hex.to_uppercase(),
            Notation::Rgb => self.rgb.to_string(),
            Notation::Rgba => self.rgba.to_string(),
            Notation::Hsl | Notation::Hsb => self.hsl.to_string(),
            Notation::Hsla | Notation::Hsba => self.hsla.to_string(),
        }
    }

    fn set(&self, converter: &mut ColorConverter, notation: Notation) -> Result<()> {
        let result = match notation {
            Notation::Hex => converter.hex(self.hex),
            Notation::Rgb => converter.rgb(self.rgb),
            Notation::Rgba => converter.rgba(self.rgba),
            Notation::Hsl => converter.hsl(self.hsl),
            Notation::Hsla => converter.hsla(self.hsla),
            Notation::Hsb => converter.hsb(self.hsl),
            Notation::Hsba => converter.hsba(self.hsla),
        };
        result.map(|_| ())
    }
}

fn assert_converts(from: Notation) {
    let mut converter = ColorConverter::new();
    for fixture in &PALETTE {
        fixture.set(&mut converter, from).unwrap();
        for to in NOTATIONS.into_iter().filter(|&to| to != from) {
            assert_eq!(
                converter.to(to, true).unwrap().to_string(),
                fixture.text(to),
                "{} from {from} to {to}",
                fixture.hex
            );
        }
    }
}

#[test]
fn test_from_hex() {
    assert_converts(Notation::Hex);
}

#[test]
fn test_from_rgb() {
    assert_converts(Notation::Rgb);
}

#[test]
fn test_from_rgba() {
    assert_converts(Notation::Rgba);
}

#[test]
fn test_from_hsl() {
    assert_converts(Notation::Hsl);
}

#[test]
fn test_from_hsla() {
    assert_converts(Notation::Hsla);
}

#[test]
fn test_hsb_strings_match_hsl() {
    let mut converter = ColorConverter::new();
    for fixture in &PALETTE {
        fixture.set(&mut converter, Notation::Hsb).unwrap();
        assert_eq!(converter.format(Notation::Hex).unwrap(), fixture.text(Notation::Hex));
        assert_eq!(converter.format(Notation::Hsb).unwrap(), fixture.hsl);
        assert_eq!(converter.format(Notation::Hsba).unwrap(), fixture.hsla);
    }
}

#[test]
fn test_hex_round_trip_on_alpha_steps() {
    let mut converter = ColorConverter::new();
    for tenths in 0..=10u8 {
        let alpha = f64::from(tenths) / 10.0;
        let rgba = cortex_color::Rgba::new(12, 200, 77, alpha);
        converter.rgba(rgba).unwrap();
        let hex = converter.format(Notation::Hex).unwrap();
        converter.hex(&hex).unwrap();
        assert_eq!(converter.rgba_value(), Some(rgba), "alpha {alpha} via {hex}");
    }
}

#[test]
fn test_hsl_round_trip_is_stable() {
    let mut converter = ColorConverter::new();
    for fixture in &PALETTE {
        converter.hex(fixture.hex).unwrap();
        let direct = converter.format(Notation::Hsl).unwrap();

        let rgba = converter.format(Notation::Rgba).unwrap();
        converter.rgba(rgba.as_str()).unwrap();
        let hsl = converter.format(Notation::Hsl).unwrap();
        converter.hsl(hsl.as_str()).unwrap();

        assert_eq!(converter.format(Notation::Hsl).unwrap(), direct);
    }
}
