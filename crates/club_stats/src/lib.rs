//! # club_stats - Match statistics for a football club
//!
//! Answers a fixed catalogue of questions about per-match player
//! statistics: home/away performance, expected-goals efficiency,
//! offensive output per minute and rating correlations.
//!
//! ## Features
//! - Statistical estimator: weighted mean, normal-approximation confidence
//!   intervals, Welch's t-test, per-unit ratios
//! - In-memory dataset with equality filters and per-player aggregation
//! - Question registry mapping each question to a pure analysis function
//!
//! ```rust
//! use club_stats::{AnalysisConfig, Dataset, Location, MatchRecord, QuestionId, QuestionRegistry, StatField};
//!
//! let rows = [(Location::Home, 6.0), (Location::Home, 7.0), (Location::Away, 5.0), (Location::Away, 6.5)];
//! let dataset: Dataset = rows
//!     .iter()
//!     .map(|(loc, rating)| {
//!         MatchRecord::new("Player")
//!             .with_location(*loc)
//!             .with(StatField::Rating, *rating)
//!             .with(StatField::MinutesPlayed, 90.0)
//!     })
//!     .collect();
//!
//! let answer = QuestionRegistry::standard()
//!     .run(QuestionId::HomeAway, &dataset, &AnalysisConfig::default())
//!     .unwrap();
//! assert!(!answer.conclusion.is_empty());
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod stats;

pub use analysis::{Answer, Finding, QuestionId, QuestionRegistry};
pub use config::AnalysisConfig;
pub use data::{Dataset, Location, MatchRecord, PlayerTable, StatField};
pub use error::{AnalysisError, Result, StatsError};
