use thiserror::Error;

/// Precondition violations raised by the estimator.
///
/// Every estimator failure is an `InvalidInput`: mismatched lengths,
/// zero weight totals, samples below their statistical minimum,
/// out-of-range confidence levels and zero-variance comparisons.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StatsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        StatsError::InvalidInput(msg.into())
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),
}

impl AnalysisError {
    /// True when the failure comes from the data the analysis was given
    /// rather than from how it was configured.
    pub fn is_data_error(&self) -> bool {
        matches!(self, AnalysisError::Stats(_))
    }
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;
pub type Result<T> = std::result::Result<T, AnalysisError>;
