//! Easing functions over the unit interval
//!
//! Each function maps normalized progress `t ∈ [0, 1]` to eased progress in
//! `[0, 1]`, with `f(0) = 0` and `f(1) = 1`.

use std::f64::consts::{FRAC_PI_2, PI};

/// Sine ease-in: slow start, fast finish.
pub fn sine_in(t: f64) -> f64 {
    let v = (t * FRAC_PI_2).cos();
    // cos(π/2) is not exactly zero in floating point
    if v.abs() < 1e-14 {
        1.0
    } else {
        1.0 - v
    }
}

/// Sine ease-out: fast start, slow finish.
pub fn sine_out(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}

/// Sine ease-in-out.
pub fn sine_in_out(t: f64) -> f64 {
    -0.5 * ((PI * t).cos() - 1.0)
}

/// Quadratic ease-in.
pub fn quad_in(t: f64) -> f64 {
    t * t
}

/// Quadratic ease-out.
pub fn quad_out(t: f64) -> f64 {
    -t * (t - 2.0)
}

/// Quadratic ease-in-out.
pub fn quad_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t
    } else {
        let t = t - 1.0;
        -0.5 * (t * (t - 2.0) - 1.0)
    }
}
