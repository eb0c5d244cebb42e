//! # Analysis Configuration
//!
//! Thresholds shared by every question. Defaults reproduce the published
//! dashboard: 95% intervals, p < 0.05, top-10 rankings drawn from the 20
//! players with the fewest minutes.
//!
//! ```rust
//! use club_stats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_yaml_str("top_n: 5").unwrap();
//! assert_eq!(config.top_n, 5);
//! assert_eq!(config.significance_level, 0.05);
//! ```

use crate::error::{AnalysisError, Result};
use crate::stats::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SIGNIFICANCE_LEVEL};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Confidence level for mean intervals, in (0, 1)
    pub confidence_level: f64,
    /// Reject equal means below this p-value
    pub significance_level: f64,
    /// Entries kept by ranking questions
    pub top_n: usize,
    /// Lowest-minutes players considered by the low-minutes efficiency question
    pub low_minutes_pool: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            top_n: 10,
            low_minutes_pool: 20,
        }
    }
}

impl AnalysisConfig {
    /// Stricter thresholds for small squads (99% intervals, p < 0.01).
    pub fn strict() -> Self {
        Self {
            confidence_level: 0.99,
            significance_level: 0.01,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "confidence_level must lie in (0, 1), got {}",
                self.confidence_level
            )));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(AnalysisError::InvalidConfig(format!(
                "significance_level must lie in (0, 1), got {}",
                self.significance_level
            )));
        }
        if self.top_n == 0 {
            return Err(AnalysisError::InvalidConfig("top_n must be positive".into()));
        }
        if self.low_minutes_pool == 0 {
            return Err(AnalysisError::InvalidConfig(
                "low_minutes_pool must be positive".into(),
            ));
        }
        Ok(())
    }
}
