//! Normal cumulative distribution function.

use std::{cmp::Ordering, f64::consts::SQRT_2};

use statrs::function::erf::erfc;

/// `P(Z <= x)` for a standard normal `Z`.
#[must_use]
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// `P(X <= x)` for `X ~ N(mean, std_dev²)`.
///
/// A zero deviation degenerates to a step at `mean` (with `0.5` at the step).
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev > 0.0 {
        return standard_normal_cdf((x - mean) / std_dev);
    }
    match x.total_cmp(&mean) {
        Ordering::Less => 0.0,
        Ordering::Equal => 0.5,
        Ordering::Greater => 1.0,
    }
}
