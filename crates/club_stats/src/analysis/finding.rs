//! # Findings
//!
//! What each question returns, ready for a text or JSON renderer.
//! Conclusions compare raw p-values and coefficients; rounding only
//! happens in the sentences themselves.

use super::QuestionId;
use crate::data::Location;
use crate::stats::{ConfidenceInterval, HypothesisTestResult};
use serde::Serialize;

/// Rating summary for one venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSummary {
    pub location: Location,
    /// Appearances with a recorded rating
    pub appearances: usize,
    /// Rating weighted by minutes played
    pub weighted_mean: f64,
    /// Unweighted mean rating with its interval
    pub interval: ConfidenceInterval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPoint {
    pub player: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub player: String,
    pub value: f64,
    pub minutes_played: f64,
    pub goal_involvements: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortfallEntry {
    pub player: String,
    pub expected_goals: f64,
    pub goals: f64,
    /// xG minus goals
    pub shortfall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    LocationComparison {
        home: LocationSummary,
        away: LocationSummary,
        test: HypothesisTestResult,
        significance_level: f64,
        significant: bool,
    },
    RatingIntervals {
        confidence_level: f64,
        home: ConfidenceInterval,
        away: ConfidenceInterval,
        overlap: bool,
    },
    Scatter {
        x_label: String,
        y_label: String,
        points: Vec<PlayerPoint>,
        /// Pearson r; `None` when fewer than two players or a constant axis
        correlation: Option<f64>,
    },
    Ranking {
        metric: String,
        entries: Vec<RankedPlayer>,
    },
    Shortfall {
        mean_expected_goals: f64,
        mean_goals: f64,
        entries: Vec<ShortfallEntry>,
    },
}

impl Finding {
    pub fn conclusion(&self) -> String {
        match self {
            Finding::LocationComparison {
                test,
                significance_level,
                significant,
                ..
            } => {
                if *significant {
                    format!(
                        "There is a statistically significant difference in player performance between home and away matches (p = {:.4} < {}).",
                        test.p_value, significance_level
                    )
                } else {
                    format!(
                        "There is no statistically significant difference in player performance between home and away matches (p = {:.4} >= {}).",
                        test.p_value, significance_level
                    )
                }
            }
            Finding::RatingIntervals { overlap, .. } => {
                if *overlap {
                    "The intervals overlap: the observed home/away difference may be due to chance.".to_string()
                } else {
                    "The intervals do not overlap: the home/away rating difference is statistically meaningful.".to_string()
                }
            }
            Finding::Scatter {
                x_label,
                y_label,
                correlation,
                ..
            } => match correlation {
                Some(r) => format!(
                    "{} between {} and {} (r = {:.2}).",
                    describe_correlation(*r),
                    x_label.to_lowercase(),
                    y_label.to_lowercase(),
                    r
                ),
                None => "Not enough varied data to estimate a correlation.".to_string(),
            },
            Finding::Ranking { metric, entries } => match entries.first() {
                Some(top) => format!(
                    "{} leads on {} with {:.4}.",
                    top.player,
                    metric.to_lowercase(),
                    top.value
                ),
                None => "No player has recorded minutes in this selection.".to_string(),
            },
            Finding::Shortfall { entries, .. } => match entries.first() {
                Some(top) => format!(
                    "{} player(s) created above-average xG but scored below average; {} trails expectation by {:.2} goals.",
                    entries.len(),
                    top.player,
                    top.shortfall
                ),
                None => "No player combines above-average xG with below-average goals.".to_string(),
            },
        }
    }
}

fn describe_correlation(r: f64) -> String {
    let strength = match r.abs() {
        a if a < 0.1 => return "No linear relationship".to_string(),
        a if a < 0.3 => "A weak",
        a if a < 0.5 => "A moderate",
        _ => "A strong",
    };
    let direction = if r > 0.0 { "positive" } else { "negative" };
    format!("{} {} relationship", strength, direction)
}

/// A finding together with the question it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub question: QuestionId,
    pub title: &'static str,
    pub prompt: &'static str,
    pub finding: Finding,
    pub conclusion: String,
}

impl Answer {
    pub fn new(question: QuestionId, finding: Finding) -> Self {
        let conclusion = finding.conclusion();
        Self {
            question,
            title: question.title(),
            prompt: question.prompt(),
            finding,
            conclusion,
        }
    }
}
