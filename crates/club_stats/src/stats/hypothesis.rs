//! # Hypothesis tests
//!
//! Welch's unequal-variance t-test for two independent samples and the
//! Pearson correlation used by the scatter-style questions.

use super::sample::{ensure_finite, ensure_min_len, finite_result, mean, sample_variance};
use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Significance threshold callers use to phrase a conclusion.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Outcome of a two-sample test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypothesisTestResult {
    /// t statistic, positive when the first sample has the larger mean
    pub statistic: f64,
    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
    /// Welch–Satterthwaite degrees of freedom
    pub degrees_of_freedom: f64,
}

impl HypothesisTestResult {
    /// Reject equal means when `p_value < alpha`. No rounding is applied.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Welch's t-test for a difference in means without assuming equal variances.
///
/// # Errors
/// `InvalidInput` when either sample has fewer than two observations or both
/// samples are constant (zero standard error).
///
/// # Examples
/// ```
/// use club_stats::stats::welch_t_test;
///
/// let home = [6.0, 6.5, 7.0];
/// let away = [5.0, 5.5, 6.0];
/// let result = welch_t_test(&home, &away).unwrap();
/// assert!(result.statistic > 0.0);
/// assert!((0.0..=1.0).contains(&result.p_value));
/// ```
pub fn welch_t_test(sample_a: &[f64], sample_b: &[f64]) -> StatsResult<HypothesisTestResult> {
    ensure_min_len(sample_a, 2, "first sample")?;
    ensure_min_len(sample_b, 2, "second sample")?;
    ensure_finite(sample_a, "first sample")?;
    ensure_finite(sample_b, "second sample")?;

    let n_a = sample_a.len() as f64;
    let n_b = sample_b.len() as f64;
    let se_a = sample_variance(sample_a)? / n_a;
    let se_b = sample_variance(sample_b)? / n_b;

    let combined = finite_result(se_a + se_b, "standard error")?;
    if combined <= 0.0 {
        return Err(StatsError::invalid(
            "both samples are constant; the standard error is zero",
        ));
    }

    let statistic = finite_result(
        (mean(sample_a)? - mean(sample_b)?) / combined.sqrt(),
        "t statistic",
    )?;

    // Welch–Satterthwaite
    let df = combined.powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));

    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::invalid(e.to_string()))?;
    let p_value = (2.0 * dist.sf(statistic.abs())).clamp(0.0, 1.0);

    Ok(HypothesisTestResult {
        statistic,
        p_value,
        degrees_of_freedom: df,
    })
}

/// Pearson product-moment correlation of paired observations.
///
/// # Errors
/// `InvalidInput` on a length mismatch, fewer than two pairs, or when
/// either axis has zero variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> StatsResult<f64> {
    if x.len() != y.len() {
        return Err(StatsError::invalid(format!(
            "paired samples differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    ensure_min_len(x, 2, "correlation")?;
    let mx = mean(x)?;
    let my = mean(y)?;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::invalid("correlation undefined for a constant axis"));
    }
    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welch_home_vs_away() {
        let home = [6.0, 6.5, 7.0];
        let away = [5.0, 5.5, 6.0];
        let result = welch_t_test(&home, &away).unwrap();

        // equal variances 0.25, n = 3 → se = √(1/6), t = 1 / √(1/6) = √6
        assert!((result.statistic - 6f64.sqrt()).abs() < 1e-12);
        assert!((result.degrees_of_freedom - 4.0).abs() < 1e-12);
        // two-sided p for t = √6 on 4 df
        assert!((result.p_value - 0.0705).abs() < 5e-4, "p = {}", result.p_value);
        assert!(!result.is_significant(DEFAULT_SIGNIFICANCE_LEVEL));
        assert_eq!(format!("{:.4}", result.p_value).len(), 6);
    }

    #[test]
    fn test_welch_symmetry() {
        let a = [6.1, 7.3, 6.8, 5.9, 7.0];
        let b = [6.6, 6.2, 5.4, 6.0];
        let ab = welch_t_test(&a, &b).unwrap();
        let ba = welch_t_test(&b, &a).unwrap();
        assert_eq!(ab.statistic, -ba.statistic);
        assert_eq!(ab.p_value, ba.p_value);
    }

    #[test]
    fn test_welch_identical_samples() {
        let a = [6.0, 6.8, 7.4, 5.9];
        let result = welch_t_test(&a, &a).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_welch_constant_samples() {
        let err = welch_t_test(&[6.0, 6.0], &[7.0, 7.0, 7.0]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn test_welch_one_constant_sample_is_fine() {
        let result = welch_t_test(&[6.0, 6.0, 6.0], &[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(result.statistic, 0.0);
    }

    #[test]
    fn test_welch_too_small() {
        assert!(welch_t_test(&[6.0], &[5.0, 6.0]).is_err());
        assert!(welch_t_test(&[6.0, 7.0], &[]).is_err());
    }

    #[test]
    fn test_welch_large_difference_is_significant() {
        let a = [8.0, 8.2, 7.9, 8.1, 8.3, 7.8];
        let b = [6.0, 6.1, 5.9, 6.2, 5.8, 6.0];
        let result = welch_t_test(&a, &b).unwrap();
        assert!(result.p_value < 1e-6);
        assert!(result.is_significant(0.05));
    }

    #[test]
    fn test_welch_overflow_is_invalid() {
        let huge = [1e308, 1.7e308];
        let tiny = [-1e308, -1.7e308];
        assert!(matches!(
            welch_t_test(&huge, &tiny),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_pearson_perfect() {
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_axis() {
        assert!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_pearson_length_mismatch() {
        assert!(pearson_correlation(&[1.0, 2.0], &[1.0]).is_err());
    }
}
