//! # Samples
//!
//! Missing-value exclusion and the descriptive statistics every estimator
//! builds on. All functions reject non-finite observations instead of
//! letting a NaN leak into a mean or a bound.

use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};

/// An ordered sequence of observations with missing values already removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Build a sample from observations that may be missing.
    ///
    /// `None` and NaN observations are dropped; order is preserved.
    pub fn from_optional<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let values = observations
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> StatsResult<f64> {
        mean(&self.values)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::from_optional(values.into_iter().map(Some))
    }
}

/// Values paired with weights of the same length and a positive weight total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSample {
    values: Vec<f64>,
    weights: Vec<f64>,
}

impl WeightedSample {
    pub fn new(values: Vec<f64>, weights: Vec<f64>) -> StatsResult<Self> {
        check_weights(&values, &weights)?;
        Ok(Self { values, weights })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> StatsResult<f64> {
        super::weighted_mean(&self.values, &self.weights)
    }
}

/// Returns the weight total once the pairing invariant holds.
pub(crate) fn check_weights(values: &[f64], weights: &[f64]) -> StatsResult<f64> {
    if values.len() != weights.len() {
        return Err(StatsError::invalid(format!(
            "values and weights differ in length ({} vs {})",
            values.len(),
            weights.len()
        )));
    }
    if values.is_empty() {
        return Err(StatsError::invalid("weighted mean of an empty sample"));
    }
    ensure_finite(values, "values")?;
    ensure_finite(weights, "weights")?;

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(StatsError::invalid(format!(
            "weight total must be strictly positive, got {}",
            total
        )));
    }
    Ok(total)
}

pub(crate) fn ensure_finite(values: &[f64], what: &str) -> StatsResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(StatsError::invalid(format!(
            "{} contain a non-finite observation at index {}",
            what, idx
        ))),
        None => Ok(()),
    }
}

/// Rejects a computed quantity that overflowed.
pub(crate) fn finite_result(value: f64, what: &str) -> StatsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::invalid(format!("{} overflowed to {}", what, value)))
    }
}

pub(crate) fn ensure_min_len(values: &[f64], min: usize, what: &str) -> StatsResult<()> {
    if values.len() < min {
        return Err(StatsError::invalid(format!(
            "{} needs at least {} observations, got {}",
            what,
            min,
            values.len()
        )));
    }
    Ok(())
}

/// Arithmetic mean. Requires at least one finite observation.
pub fn mean(values: &[f64]) -> StatsResult<f64> {
    ensure_min_len(values, 1, "mean")?;
    ensure_finite(values, "values")?;
    finite_result(values.iter().sum::<f64>() / values.len() as f64, "mean")
}

/// Unbiased sample variance (n − 1 denominator).
pub fn sample_variance(values: &[f64]) -> StatsResult<f64> {
    ensure_min_len(values, 2, "sample variance")?;
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    finite_result(ss / (values.len() as f64 - 1.0), "sample variance")
}

/// Unbiased sample standard deviation.
pub fn sample_std_dev(values: &[f64]) -> StatsResult<f64> {
    sample_variance(values).map(f64::sqrt)
}
