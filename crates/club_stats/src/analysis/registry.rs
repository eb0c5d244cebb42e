//! # Question Registry
//!
//! Explicit `QuestionId` → analysis lookup. Every entry runs against the
//! same borrowed `Dataset`; nothing is cached between calls.

use super::finding::{Answer, Finding};
use super::{questions, QuestionId};
use crate::config::AnalysisConfig;
use crate::data::Dataset;
use crate::error::{AnalysisError, Result};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Signature shared by every analysis.
pub type AnalysisFn = fn(&Dataset, &AnalysisConfig) -> Result<Finding>;

/// A registered question.
#[derive(Clone, Copy)]
pub struct Question {
    pub id: QuestionId,
    analyze: AnalysisFn,
}

impl Question {
    pub fn new(id: QuestionId, analyze: AnalysisFn) -> Self {
        Self { id, analyze }
    }

    pub fn title(&self) -> &'static str {
        self.id.title()
    }

    pub fn prompt(&self) -> &'static str {
        self.id.prompt()
    }

    pub fn analyze(&self, dataset: &Dataset, config: &AnalysisConfig) -> Result<Finding> {
        (self.analyze)(dataset, config)
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question").field("id", &self.id).finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionRegistry {
    questions: FxHashMap<QuestionId, Question>,
}

impl QuestionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every question of the catalogue.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(QuestionId::HomeAway, questions::home_away);
        registry.register(QuestionId::RatingIntervals, questions::rating_intervals);
        registry.register(QuestionId::XgVsGoals, questions::xg_vs_goals);
        registry.register(QuestionId::ContributionPerMinute, questions::contribution_per_minute);
        registry.register(QuestionId::RatingVsContributions, questions::rating_vs_contributions);
        registry.register(QuestionId::XgUnderperformers, questions::xg_underperformers);
        registry.register(QuestionId::PassesVsRating, questions::passes_vs_rating);
        registry.register(QuestionId::EfficientLowMinutes, questions::efficient_low_minutes);
        registry
    }

    /// Add or replace the analysis for `id`.
    pub fn register(&mut self, id: QuestionId, analyze: AnalysisFn) {
        if self.questions.insert(id, Question::new(id, analyze)).is_some() {
            warn!("replaced analysis for question {}", id);
        }
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Registered questions in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        QuestionId::ALL.into_iter().filter_map(|id| self.questions.get(&id))
    }

    pub fn run(&self, id: QuestionId, dataset: &Dataset, config: &AnalysisConfig) -> Result<Answer> {
        config.validate()?;
        let question = self
            .get(id)
            .ok_or_else(|| AnalysisError::UnknownQuestion(id.to_string()))?;
        debug!("running {} over {} records", id, dataset.len());
        let finding = question.analyze(dataset, config)?;
        Ok(Answer::new(id, finding))
    }

    /// Run every registered question, keeping per-question failures.
    pub fn run_all(
        &self,
        dataset: &Dataset,
        config: &AnalysisConfig,
    ) -> Vec<(QuestionId, Result<Answer>)> {
        self.iter()
            .map(|question| (question.id, self.run(question.id, dataset, config)))
            .collect()
    }
}
