//! Adaptive curve sampling
//!
//! Walks an easing curve in fixed input steps and keeps only the samples that
//! are farther than `delta` from the previously kept one. When the last kept
//! sample ends up too close to the curve's end point `(1, 1)`, `delta` is
//! shrunk and the whole curve is sampled again, so the final segment before
//! the implicit `100%` stop is never a sliver.
//!
//! Coordinates are `(x, y)` where `x` is the curve output (reused as the
//! color mix ratio) and `y` is the curve input (the gradient position).

use serde::Serialize;

use crate::color::round_to;
use crate::curve::{EasingCurve, SCRIM_COORDINATES};
use crate::{GradientError, Result};

/// Number of curve-input steps in one walk; the step is `1 / WALK_STEPS`.
pub const WALK_STEPS: u32 = 1000;

/// Slack subtracted from `delta` when checking the distance to `(1, 1)`.
pub const DELTA_TOLERANCE: f64 = 0.01;

/// Amount `delta` shrinks by on every refinement.
pub const DELTA_ADJUST: f64 = 0.001;

/// A retained curve sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    /// Curve output in `[0, 1]`, used as the interpolation fraction
    pub amount: f64,
    /// Curve input in `[0, 1]`
    pub offset: f64,
    /// `offset` as a CSS percentage, e.g. `"12.3%"`
    pub position: String,
}

impl Coordinate {
    fn sampled(amount: f64, offset: f64) -> Self {
        Self {
            amount,
            offset,
            position: percentage(offset),
        }
    }
}

/// Ordered samples of one curve.
///
/// The first coordinate is always `(0, "0%")` and offsets increase strictly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateSet {
    pub curve: EasingCurve,
    /// Spacing the walk converged on; `None` for table-driven curves
    pub delta: Option<f64>,
    coordinates: Vec<Coordinate>,
}

impl CoordinateSet {
    /// The fixed scrim table, independent of any precision.
    pub fn scrim() -> Self {
        let coordinates = SCRIM_COORDINATES
            .iter()
            .map(|&(amount, percent)| Coordinate {
                amount,
                offset: percent / 100.0,
                position: format!("{}%", percent),
            })
            .collect();
        Self {
            curve: EasingCurve::Scrim,
            delta: None,
            coordinates,
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.coordinates.last()
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

/// Euclidean distance between two points of the unit square
pub(crate) fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Convert a fraction to a percentage string with one decimal, e.g. `0.123` → `"12.3%"`
pub fn percentage(fraction: f64) -> String {
    format!("{}%", round_to(fraction * 100.0, 1))
}

/// Sample `curve` into coordinates spaced by roughly `precision`.
///
/// # Errors
///
/// - `GradientError::InvalidPrecision` if `precision` is not finite, not
///   positive, or larger than the diagonal of the unit square.
/// - `GradientError::NotConverged` if the refinement bound is exhausted.
pub fn sample(curve: EasingCurve, precision: f64) -> Result<CoordinateSet> {
    if !precision.is_finite() || precision <= 0.0 || precision > std::f64::consts::SQRT_2 {
        return Err(GradientError::InvalidPrecision(precision));
    }

    let Some(ease) = curve.easing_fn() else {
        return Ok(CoordinateSet::scrim());
    };

    // Once delta - tolerance drops below zero every tail distance qualifies.
    let max_refinements = ((precision + DELTA_TOLERANCE) / DELTA_ADJUST).ceil() as usize + 1;

    let mut delta = precision;
    for iteration in 0..=max_refinements {
        let coordinates = walk(ease, delta);
        let tail = coordinates
            .last()
            .map_or((0.0, 0.0), |c| (c.amount, c.offset));

        if distance((1.0, 1.0), tail) > delta - DELTA_TOLERANCE {
            tracing::trace!(%curve, precision, delta, iteration, "sampling converged");
            return Ok(CoordinateSet {
                curve,
                delta: Some(delta),
                coordinates,
            });
        }

        tracing::debug!(%curve, delta, "tail segment too short, refining");
        delta -= DELTA_ADJUST;
    }

    Err(GradientError::NotConverged {
        precision,
        iterations: max_refinements,
    })
}

/// One pass over `[0, 1)` keeping samples farther than `delta` apart.
fn walk(ease: fn(f64) -> f64, delta: f64) -> Vec<Coordinate> {
    let mut coordinates = vec![Coordinate {
        amount: 0.0,
        offset: 0.0,
        position: "0%".to_string(),
    }];
    let mut last = (0.0, 0.0);

    for step in 0..WALK_STEPS {
        let y = f64::from(step) / f64::from(WALK_STEPS);
        let x = ease(y);
        if distance((x, y), last) > delta {
            coordinates.push(Coordinate::sampled(x, y));
            last = (x, y);
        }
    }

    coordinates
}
