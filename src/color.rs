//! Color utilities for stop generation
//!
//! Parsing is delegated to `csscolorparser` (named colors, hex, `rgb()`,
//! `hsl()`, `transparent`, ...), conversion and mixing to `palette`.
//! Colors are serialized in the `hsl(H, S%, L%)` / `hsla(H, S%, L%, A)`
//! notation with one decimal for hue, saturation and lightness.

use palette::encoding::Srgb;
use palette::{FromColor, Mix, Srgba};

use crate::{GradientError, Result};

/// HSL color with alpha, the working representation for interpolation.
pub type Hsla = palette::Hsla<Srgb, f64>;

/// Keyword that gets replaced by a fully transparent sibling color
const TRANSPARENT: &str = "transparent";

// =============================================================================
// Numeric Formatting
// =============================================================================

/// Round `value` to `decimals` decimal places.
///
/// Negative `decimals` round to the left of the decimal point, so
/// `round_to(1234.0, -2)` is `1200.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    // Adding zero turns -0.0 into 0.0
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor + 0.0
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor + 0.0
    }
}

/// Shortest decimal form: `240` rather than `240.0`
fn format_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

// =============================================================================
// Parsing & Serialization
// =============================================================================

/// Parse any CSS color notation into HSLA.
pub fn parse_color(value: &str) -> Result<Hsla> {
    let parsed = csscolorparser::parse(value.trim())
        .map_err(|e| GradientError::InvalidColor(format!("'{}': {}", value, e)))?;

    let srgba = Srgba::new(
        parsed.r as f64,
        parsed.g as f64,
        parsed.b as f64,
        parsed.a as f64,
    );
    Ok(Hsla::from_color(srgba))
}

/// Serialize to `hsl(H, S%, L%)`, or `hsla(H, S%, L%, A)` when not opaque.
pub fn to_hsl_string(color: &Hsla) -> String {
    let hue = round_to(color.hue.into_positive_degrees(), 1);
    let saturation = round_to(color.saturation * 100.0, 1);
    let lightness = round_to(color.lightness * 100.0, 1);

    if color.alpha >= 1.0 {
        format!(
            "hsl({}, {}%, {}%)",
            format_number(hue),
            format_number(saturation),
            format_number(lightness)
        )
    } else {
        format!(
            "hsla({}, {}%, {}%, {})",
            format_number(hue),
            format_number(saturation),
            format_number(lightness),
            format_number(color.alpha)
        )
    }
}

// =============================================================================
// Stop Helpers
// =============================================================================

/// Mix two colors in HSLA space.
///
/// `amount = 0` yields `start`, `amount = 1` yields `end`. Hue travels the
/// shorter arc, alpha is interpolated linearly.
pub fn mix(start: &Hsla, end: &Hsla, amount: f64) -> Hsla {
    start.mix(*end, amount)
}

/// Resolve both endpoints, turning a `transparent` keyword into its sibling
/// color at zero alpha.
///
/// A plain `transparent` is black at zero alpha, so interpolating towards it
/// passes through gray. Borrowing the sibling's hue, saturation and lightness
/// keeps the fade on the sibling's hue.
pub fn transparent_fix(colors: [&str; 2]) -> Result<[Hsla; 2]> {
    let resolve = |index: usize| -> Result<Hsla> {
        if colors[index].trim().eq_ignore_ascii_case(TRANSPARENT) {
            let mut sibling = parse_color(colors[1 - index])?;
            sibling.alpha = 0.0;
            Ok(sibling)
        } else {
            parse_color(colors[index])
        }
    };
    Ok([resolve(0)?, resolve(1)?])
}

/// Round the alpha component of an `hsla(...)` string to `alpha_decimals`.
///
/// Percentage components and the hue are kept as written. Strings without
/// an alpha component come back in normalized `name(a, b, c)` form.
pub fn round_hsl_alpha(color: &str, alpha_decimals: u32) -> String {
    let (Some(open), Some(close)) = (color.find('('), color.rfind(')')) else {
        return color.to_string();
    };
    if close < open {
        return color.to_string();
    }

    let prefix = &color[..open];
    let values: Vec<String> = color[open + 1..close]
        .split(',')
        .enumerate()
        .map(|(index, component)| {
            let component = component.trim();
            if index != 3 || component.contains('%') {
                return component.to_string();
            }
            match component.parse::<f64>() {
                Ok(alpha) => format_number(round_to(alpha, alpha_decimals as i32)),
                Err(_) => component.to_string(),
            }
        })
        .collect();

    format!("{}({})", prefix, values.join(", "))
}

/// Test if two colors are identical once canonicalized to HSL notation.
///
/// `#ff0000`, `rgb(255, 0, 0)` and `red` are all the same color.
pub fn is_same_color(a: &str, b: &str) -> Result<bool> {
    Ok(to_hsl_string(&parse_color(a)?) == to_hsl_string(&parse_color(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.34, 1), 12.3);
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(1234.0, -2), 1200.0);
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(format_number(round_to(-0.01, 1)), "0");
    }

    #[test]
    fn test_to_hsl_string_opaque() {
        assert_eq!(to_hsl_string(&parse_color("red").unwrap()), "hsl(0, 100%, 50%)");
        assert_eq!(to_hsl_string(&parse_color("blue").unwrap()), "hsl(240, 100%, 50%)");
        assert_eq!(to_hsl_string(&parse_color("white").unwrap()), "hsl(0, 0%, 100%)");
        assert_eq!(to_hsl_string(&parse_color("black").unwrap()), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_to_hsl_string_translucent() {
        let color = parse_color("rgba(0, 0, 255, 0.5)").unwrap();
        assert_eq!(to_hsl_string(&color), "hsla(240, 100%, 50%, 0.5)");
        assert_eq!(to_hsl_string(&parse_color("transparent").unwrap()), "hsla(0, 0%, 0%, 0)");
    }

    #[test]
    fn test_parse_color_invalid() {
        assert!(matches!(
            parse_color("notacolor"),
            Err(GradientError::InvalidColor(_))
        ));
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_mix_endpoints() {
        let red = parse_color("red").unwrap();
        let blue = parse_color("blue").unwrap();
        assert_eq!(to_hsl_string(&mix(&red, &blue, 0.0)), "hsl(0, 100%, 50%)");
        assert_eq!(to_hsl_string(&mix(&red, &blue, 1.0)), "hsl(240, 100%, 50%)");
    }

    #[test]
    fn test_mix_interpolates_alpha() {
        let black = parse_color("black").unwrap();
        let clear = parse_color("rgba(0, 0, 0, 0)").unwrap();
        let mixed = mix(&black, &clear, 0.25);
        assert!((mixed.alpha - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_fix() {
        let [start, end] = transparent_fix(["transparent", "blue"]).unwrap();
        assert_eq!(to_hsl_string(&start), "hsla(240, 100%, 50%, 0)");
        assert_eq!(to_hsl_string(&end), "hsl(240, 100%, 50%)");

        let [start, end] = transparent_fix(["red", "transparent"]).unwrap();
        assert_eq!(to_hsl_string(&start), "hsl(0, 100%, 50%)");
        assert_eq!(to_hsl_string(&end), "hsla(0, 100%, 50%, 0)");
    }

    #[test]
    fn test_transparent_fix_leaves_other_colors() {
        let [start, end] = transparent_fix(["#00ff00", "rgba(0, 0, 0, 0)"]).unwrap();
        assert_eq!(to_hsl_string(&start), "hsl(120, 100%, 50%)");
        assert_eq!(to_hsl_string(&end), "hsla(0, 0%, 0%, 0)");
    }

    #[test]
    fn test_round_hsl_alpha() {
        assert_eq!(
            round_hsl_alpha("hsla(240, 100%, 50%, 0.123456)", 2),
            "hsla(240, 100%, 50%, 0.12)"
        );
        assert_eq!(
            round_hsl_alpha("hsla(12.3, 45.6%, 50%, 0.98765)", 3),
            "hsla(12.3, 45.6%, 50%, 0.988)"
        );
        assert_eq!(round_hsl_alpha("hsl(0, 100%, 50%)", 1), "hsl(0, 100%, 50%)");
        assert_eq!(round_hsl_alpha("hsla(0,100%,50%,0.04)", 1), "hsla(0, 100%, 50%, 0)");
        assert_eq!(round_hsl_alpha("red", 1), "red");
    }

    #[test]
    fn test_is_same_color() {
        assert!(is_same_color("#ff0000", "rgb(255,0,0)").unwrap());
        assert!(is_same_color("red", "hsl(0, 100%, 50%)").unwrap());
        assert!(!is_same_color("red", "blue").unwrap());
        assert!(!is_same_color("red", "rgba(255, 0, 0, 0.5)").unwrap());
        assert!(is_same_color("red", "nope").is_err());
    }
}
