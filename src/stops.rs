//! Color stop compilation
//!
//! Turns two endpoint colors and an easing curve into the stop list of a
//! `linear-gradient(...)`: one HSL-mixed stop per sampled coordinate, closed
//! by the caller's end color at `100%`.

use serde::{Deserialize, Serialize};

use crate::color::{mix, round_hsl_alpha, to_hsl_string, transparent_fix};
use crate::curve::EasingCurve;
use crate::sampler::sample;
use crate::Result;

/// Tuning knobs for stop generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientOptions {
    /// Minimum distance between consecutive curve samples
    pub precision: f64,
    /// Decimal places kept in the alpha channel of generated colors
    pub alpha_decimals: u32,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            precision: 0.1,
            alpha_decimals: 3,
        }
    }
}

/// A single `color position` pair of a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorStop {
    pub color: String,
    pub position: String,
}

impl std::fmt::Display for ColorStop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.position)
    }
}

/// Compute the color stops for `colors = [start, end]` along `curve`.
///
/// The last stop is always the end color exactly as the caller wrote it.
///
/// # Errors
///
/// Returns `GradientError::InvalidColor` for unparseable colors and
/// `GradientError::InvalidPrecision` for an unusable precision.
pub fn color_stops(
    colors: [&str; 2],
    curve: EasingCurve,
    options: &GradientOptions,
) -> Result<Vec<ColorStop>> {
    let [start, end] = transparent_fix(colors)?;
    let coordinates = sample(curve, options.precision)?;

    let mut stops = Vec::with_capacity(coordinates.len() + 1);
    for coordinate in &coordinates {
        let mixed = mix(&start, &end, coordinate.amount);
        stops.push(ColorStop {
            color: round_hsl_alpha(&to_hsl_string(&mixed), options.alpha_decimals),
            position: coordinate.position.clone(),
        });
    }
    stops.push(ColorStop {
        color: colors[1].trim().to_string(),
        position: "100%".to_string(),
    });

    Ok(stops)
}

/// Build the comma-separated stop list for a gradient function call.
///
/// # Arguments
/// * `colors` - Start and end color (any CSS notation, or `transparent`)
/// * `easing_type` - Gradient name, e.g. `ease-in-out-sine-gradient`
/// * `precision` - Minimum spacing between curve samples
/// * `alpha_decimals` - Decimal places kept in generated alpha values
///
/// # Example
/// ```
/// use easing_gradients::get_color_stops;
///
/// let stops = get_color_stops(["black", "white"], "scrim-gradient", 0.1, 3).unwrap();
/// assert!(stops.starts_with("hsl(0, 0%, 0%) 0%, hsl(0, 0%, 14%) 8.52%"));
/// ```
pub fn get_color_stops(
    colors: [&str; 2],
    easing_type: &str,
    precision: f64,
    alpha_decimals: u32,
) -> Result<String> {
    let curve: EasingCurve = easing_type.parse()?;
    let options = GradientOptions {
        precision,
        alpha_decimals,
    };

    let stops = color_stops(colors, curve, &options)?;
    Ok(stops
        .iter()
        .map(ColorStop::to_string)
        .collect::<Vec<_>>()
        .join(", "))
}
