//! # Analysis Module
//!
//! The fixed catalogue of questions asked of a club's match data. Each
//! question is a pure function over a shared `Dataset`; the registry maps
//! a `QuestionId` to its function.
//!
//! ## Submodules
//!
//! - `finding` - result shapes and conclusion phrasing
//! - `questions` - one analysis function per question
//! - `registry` - `QuestionId` → analysis lookup

pub mod finding;
pub mod questions;
pub mod registry;

#[cfg(test)]
mod tests;

pub use finding::{
    Answer, Finding, LocationSummary, PlayerPoint, RankedPlayer, ShortfallEntry,
};
pub use registry::{AnalysisFn, Question, QuestionRegistry};

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one analytical question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionId {
    HomeAway,
    RatingIntervals,
    XgVsGoals,
    ContributionPerMinute,
    RatingVsContributions,
    XgUnderperformers,
    PassesVsRating,
    EfficientLowMinutes,
}

impl QuestionId {
    pub const ALL: [QuestionId; 8] = [
        QuestionId::HomeAway,
        QuestionId::RatingIntervals,
        QuestionId::XgVsGoals,
        QuestionId::ContributionPerMinute,
        QuestionId::RatingVsContributions,
        QuestionId::XgUnderperformers,
        QuestionId::PassesVsRating,
        QuestionId::EfficientLowMinutes,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            QuestionId::HomeAway => "home-away",
            QuestionId::RatingIntervals => "rating-intervals",
            QuestionId::XgVsGoals => "xg-vs-goals",
            QuestionId::ContributionPerMinute => "contribution-per-minute",
            QuestionId::RatingVsContributions => "rating-vs-contributions",
            QuestionId::XgUnderperformers => "xg-underperformers",
            QuestionId::PassesVsRating => "passes-vs-rating",
            QuestionId::EfficientLowMinutes => "efficient-low-minutes",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuestionId::HomeAway => "Performance: home vs away",
            QuestionId::RatingIntervals => "Rating confidence intervals by venue",
            QuestionId::XgVsGoals => "Expected goals (xG) vs goals",
            QuestionId::ContributionPerMinute => "Offensive efficiency per minute",
            QuestionId::RatingVsContributions => "Rating vs goal involvements",
            QuestionId::XgUnderperformers => "High xG, few goals",
            QuestionId::PassesVsRating => "Pass accuracy vs rating",
            QuestionId::EfficientLowMinutes => "Efficiency with little playing time",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuestionId::HomeAway => {
                "Is there a significant difference in player performance between home and away matches?"
            }
            QuestionId::RatingIntervals => {
                "Where does the true mean rating lie at home and away, and do the ranges overlap?"
            }
            QuestionId::XgVsGoals => {
                "Is there a relationship between expected goals and the goals players score?"
            }
            QuestionId::ContributionPerMinute => {
                "Which players contributed the most goals and assists per minute played?"
            }
            QuestionId::RatingVsContributions => {
                "Are the best-rated players also the ones who score or assist the most?"
            }
            QuestionId::XgUnderperformers => {
                "Are there players with high expected goals but low goal conversion?"
            }
            QuestionId::PassesVsRating => {
                "Is there a relationship between accurate passes and a player's rating?"
            }
            QuestionId::EfficientLowMinutes => {
                "Which players delivered the most with the least time on the pitch?"
            }
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for QuestionId {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        QuestionId::ALL
            .into_iter()
            .find(|id| id.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalysisError::UnknownQuestion(wanted.to_string()))
    }
}
