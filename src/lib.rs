/*!
# easing-gradients

Approximates a non-linear easing curve as a list of `linear-gradient` color
stops, so that a plain two-color gradient follows the curve instead of a
straight line.

## Pipeline

```text
easing curve ──► sampler ──► coordinates ──► stops ──► "hsl(..) 0%, .., blue 100%"
                                   ▲
                 start/end color ──┘ (HSL mix per coordinate)
```

## Example

```rust
use easing_gradients::get_color_stops;

let stops = get_color_stops(["red", "blue"], "ease-in-out-sine-gradient", 0.05, 1).unwrap();
assert!(stops.starts_with("hsl(0, 100%, 50%) 0%"));
assert!(stops.ends_with("blue 100%"));
```
*/

pub mod color;
pub mod curve;
pub mod rewrite;
pub mod sampler;
pub mod stops;

pub use color::is_same_color;
pub use curve::{is_easing_gradient, EasingCurve};
pub use rewrite::rewrite_css;
pub use sampler::{sample, Coordinate, CoordinateSet};
pub use stops::{color_stops, get_color_stops, ColorStop, GradientOptions};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library error type
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("Sorry, easing gradient does not support {0}")]
    UnsupportedCurve(String),

    #[error("Invalid color {0}")]
    InvalidColor(String),

    #[error("Invalid precision {0}: expected a finite value in (0, √2]")]
    InvalidPrecision(f64),

    #[error("Sampling with precision {precision} did not converge after {iterations} refinements")]
    NotConverged { precision: f64, iterations: usize },

    #[error("Invalid gradient arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, GradientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GradientError::UnsupportedCurve("ease-in-cubic-gradient".to_string());
        assert_eq!(
            err.to_string(),
            "Sorry, easing gradient does not support ease-in-cubic-gradient"
        );

        let err = GradientError::NotConverged {
            precision: 0.1,
            iterations: 3,
        };
        assert!(err.to_string().contains("did not converge"));
    }

    #[test]
    fn test_end_to_end_is_pure() {
        let a = get_color_stops(["red", "blue"], "ease-in-quad-gradient", 0.1, 3).unwrap();
        let b = get_color_stops(["red", "blue"], "ease-in-quad-gradient", 0.1, 3).unwrap();
        assert_eq!(a, b);
    }
}
