//! # Point and interval estimates
//!
//! Minutes-weighted means and normal-approximation confidence intervals.
//!
//! The interval always uses the standard normal critical value, whatever the
//! sample size:
//!
//! ```text
//! IC = x̄ ± z · s / √n,   z = Φ⁻¹((1 + level) / 2)
//! ```

use super::sample::{
    check_weights, ensure_finite, ensure_min_len, finite_result, mean, sample_std_dev,
};
use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Confidence level used when the caller does not pick one.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// A point estimate with its two-sided interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub point_estimate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ConfidenceInterval {
    /// Distance from the point estimate to either bound.
    pub fn margin(&self) -> f64 {
        self.upper_bound - self.point_estimate
    }

    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }

    /// Whether two intervals share at least one point.
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower_bound <= other.upper_bound && other.lower_bound <= self.upper_bound
    }
}

/// Weighted arithmetic mean `Σ v·w / Σ w`.
///
/// # Errors
/// `InvalidInput` when the sequences differ in length, are empty, contain a
/// non-finite value, or the weights do not sum to a positive total.
///
/// # Examples
/// ```
/// use club_stats::stats::weighted_mean;
///
/// assert_eq!(weighted_mean(&[2.0, 4.0, 6.0], &[1.0, 1.0, 1.0]).unwrap(), 4.0);
/// ```
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> StatsResult<f64> {
    let total = check_weights(values, weights)?;
    let weighted: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    finite_result(weighted / total, "weighted mean")
}

/// Standard normal quantile at `(1 + level) / 2`.
pub fn critical_value(confidence_level: f64) -> StatsResult<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(StatsError::invalid(format!(
            "confidence level must lie strictly between 0 and 1, got {}",
            confidence_level
        )));
    }
    let standard = Normal::new(0.0, 1.0).map_err(|e| StatsError::invalid(e.to_string()))?;
    Ok(standard.inverse_cdf((1.0 + confidence_level) / 2.0))
}

/// Confidence interval for the mean of `sample` under the normal approximation.
///
/// # Errors
/// `InvalidInput` when the sample has fewer than two observations, the
/// level is outside `(0, 1)` or a bound overflows.
pub fn confidence_interval(sample: &[f64], confidence_level: f64) -> StatsResult<ConfidenceInterval> {
    ensure_min_len(sample, 2, "confidence interval")?;
    ensure_finite(sample, "sample")?;
    let z = critical_value(confidence_level)?;

    let m = mean(sample)?;
    let s = sample_std_dev(sample)?;
    let margin = finite_result(z * s / (sample.len() as f64).sqrt(), "interval margin")?;

    Ok(ConfidenceInterval {
        point_estimate: m,
        lower_bound: finite_result(m - margin, "lower bound")?,
        upper_bound: finite_result(m + margin, "upper bound")?,
    })
}
