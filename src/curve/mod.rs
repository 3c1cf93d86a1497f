//! Supported easing curves
//!
//! The set of curves is closed: six closed-form easing functions plus the
//! hand-tuned `scrim` table. Curves are named after the CSS function that
//! produces them (`ease-in-sine-gradient`, ..., `scrim-gradient`).
//!
//! # Example
//!
//! ```rust
//! use easing_gradients::curve::{is_easing_gradient, EasingCurve};
//!
//! let curve: EasingCurve = "ease-out-quad-gradient".parse().unwrap();
//! assert_eq!(curve, EasingCurve::EaseOutQuad);
//! assert!(is_easing_gradient("scrim-gradient(black, transparent)"));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::{GradientError, Result};

pub mod easing;

/// Suffix shared by every gradient function name
const GRADIENT_SUFFIX: &str = "-gradient";

/// Gradient function names recognised in CSS, in declaration order.
pub const SUPPORTED_GRADIENTS: &[&str] = &[
    "ease-in-sine-gradient",
    "ease-out-sine-gradient",
    "ease-in-out-sine-gradient",
    "ease-in-quad-gradient",
    "ease-out-quad-gradient",
    "ease-in-out-quad-gradient",
    "scrim-gradient",
];

/// Scrim coordinates as `(curve output, position in percent)`.
pub const SCRIM_COORDINATES: [(f64, f64); 13] = [
    (0.00, 0.0),
    (0.14, 8.52),
    (0.28, 17.53),
    (0.42, 27.19),
    (0.54, 36.28),
    (0.64, 44.56),
    (0.72, 51.97),
    (0.79, 59.18),
    (0.85, 66.33),
    (0.90, 73.39),
    (0.94, 80.36),
    (0.97, 87.18),
    (0.99, 93.73),
];

/// Enum of all easing curves for pattern matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingCurve {
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    /// Fixed 13-point table for shadow and overlay gradients
    Scrim,
}

impl EasingCurve {
    pub const ALL: [EasingCurve; 7] = [
        EasingCurve::EaseInSine,
        EasingCurve::EaseOutSine,
        EasingCurve::EaseInOutSine,
        EasingCurve::EaseInQuad,
        EasingCurve::EaseOutQuad,
        EasingCurve::EaseInOutQuad,
        EasingCurve::Scrim,
    ];

    /// Short name, without the `-gradient` suffix
    pub fn name(&self) -> &'static str {
        match self {
            EasingCurve::EaseInSine => "ease-in-sine",
            EasingCurve::EaseOutSine => "ease-out-sine",
            EasingCurve::EaseInOutSine => "ease-in-out-sine",
            EasingCurve::EaseInQuad => "ease-in-quad",
            EasingCurve::EaseOutQuad => "ease-out-quad",
            EasingCurve::EaseInOutQuad => "ease-in-out-quad",
            EasingCurve::Scrim => "scrim",
        }
    }

    /// CSS function name, e.g. `ease-in-sine-gradient`
    pub fn gradient_name(&self) -> &'static str {
        match self {
            EasingCurve::EaseInSine => SUPPORTED_GRADIENTS[0],
            EasingCurve::EaseOutSine => SUPPORTED_GRADIENTS[1],
            EasingCurve::EaseInOutSine => SUPPORTED_GRADIENTS[2],
            EasingCurve::EaseInQuad => SUPPORTED_GRADIENTS[3],
            EasingCurve::EaseOutQuad => SUPPORTED_GRADIENTS[4],
            EasingCurve::EaseInOutQuad => SUPPORTED_GRADIENTS[5],
            EasingCurve::Scrim => SUPPORTED_GRADIENTS[6],
        }
    }

    /// The closed-form easing function, or `None` for table-driven curves.
    pub fn easing_fn(&self) -> Option<fn(f64) -> f64> {
        match self {
            EasingCurve::EaseInSine => Some(easing::sine_in),
            EasingCurve::EaseOutSine => Some(easing::sine_out),
            EasingCurve::EaseInOutSine => Some(easing::sine_in_out),
            EasingCurve::EaseInQuad => Some(easing::quad_in),
            EasingCurve::EaseOutQuad => Some(easing::quad_out),
            EasingCurve::EaseInOutQuad => Some(easing::quad_in_out),
            EasingCurve::Scrim => None,
        }
    }
}

impl std::fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.gradient_name())
    }
}

impl FromStr for EasingCurve {
    type Err = GradientError;

    /// Accepts both `ease-in-sine-gradient` and the short `ease-in-sine`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let short = trimmed.strip_suffix(GRADIENT_SUFFIX).unwrap_or(trimmed);
        EasingCurve::ALL
            .into_iter()
            .find(|curve| curve.name() == short)
            .ok_or_else(|| {
                tracing::warn!("Sorry, easing gradient does not support {}.", s);
                GradientError::UnsupportedCurve(s.to_string())
            })
    }
}

/// Alternation of every supported gradient name
fn gradient_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = SUPPORTED_GRADIENTS
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("escaped gradient names form a valid pattern")
    })
}

/// Check if a string contains one of the supported gradient names.
///
/// This is an unanchored substring test: `"my-scrim-gradient-x"` matches too.
pub fn is_easing_gradient(value: &str) -> bool {
    gradient_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gradient_names() {
        for curve in EasingCurve::ALL {
            assert_eq!(curve.gradient_name().parse::<EasingCurve>().unwrap(), curve);
            assert_eq!(curve.name().parse::<EasingCurve>().unwrap(), curve);
        }
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "ease-in-cubic-gradient".parse::<EasingCurve>().unwrap_err();
        assert_eq!(
            err,
            GradientError::UnsupportedCurve("ease-in-cubic-gradient".to_string())
        );
        assert!("linear-gradient".parse::<EasingCurve>().is_err());
        assert!("".parse::<EasingCurve>().is_err());
    }

    #[test]
    fn test_display_matches_gradient_name() {
        assert_eq!(EasingCurve::EaseInOutQuad.to_string(), "ease-in-out-quad-gradient");
        assert_eq!(EasingCurve::Scrim.to_string(), "scrim-gradient");
    }

    #[test]
    fn test_only_scrim_is_table_driven() {
        for curve in EasingCurve::ALL {
            assert_eq!(curve.easing_fn().is_none(), curve == EasingCurve::Scrim);
        }
    }

    #[test]
    fn test_is_easing_gradient() {
        assert!(is_easing_gradient("ease-in-sine-gradient"));
        assert!(is_easing_gradient("scrim-gradient"));
        assert!(is_easing_gradient("ease-in-out-quad-gradient(to top, red, blue)"));
        assert!(!is_easing_gradient("linear-gradient"));
        assert!(!is_easing_gradient("ease-in-sine"));
    }

    #[test]
    fn test_is_easing_gradient_is_unanchored() {
        assert!(is_easing_gradient("repeating-ease-in-sine-gradient"));
        assert!(is_easing_gradient("background: scrim-gradient(black, white)"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&EasingCurve::EaseInOutSine).unwrap();
        assert_eq!(json, "\"ease-in-out-sine\"");
    }

    #[test]
    fn test_scrim_table_shape() {
        assert_eq!(SCRIM_COORDINATES.len(), 13);
        assert_eq!(SCRIM_COORDINATES[0], (0.0, 0.0));
        assert!(SCRIM_COORDINATES.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
    }
}
