//! # Statistical Estimator
//!
//! Pure, allocation-light estimators over in-memory samples.
//!
//! - `sample` - missing-value exclusion, mean and unbiased variance
//! - `estimate` - weighted mean and normal-approximation confidence intervals
//! - `hypothesis` - Welch's t-test and Pearson correlation
//! - `ratio` - per-unit efficiency ratios and top-N ranking
//!
//! Every precondition violation surfaces as `StatsError::InvalidInput`;
//! nothing here logs or returns NaN.

pub mod estimate;
pub mod hypothesis;
pub mod ratio;
pub mod sample;

pub use estimate::*;
pub use hypothesis::*;
pub use ratio::*;
pub use sample::{mean, sample_std_dev, sample_variance, Sample, WeightedSample};
