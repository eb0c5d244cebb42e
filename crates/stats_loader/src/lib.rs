//! Stats Loader Library
//!
//! Match export CSV → `Dataset` pipeline, plus the report envelope the
//! `club-stats` binary prints or serializes.
//!
//! Numeric cells that are empty or unparseable become missing values, the
//! way the club's spreadsheets have always been read.

use anyhow::{bail, Context, Result};
use club_stats::{
    AnalysisConfig, Answer, Dataset, Location, MatchRecord, QuestionId, QuestionRegistry,
    StatField,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub mod render;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "player_name",
    "home_or_away",
    "statistics_rating",
    "statistics_minutes_played",
    "statistics_goals",
    "statistics_goal_assist",
    "statistics_expected_goals",
    "statistics_accurate_pass",
];

/// Optional column used by the position filter.
pub const POSITION_COLUMN: &str = "player_position";

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Rows whose `home_or_away` was neither home nor away
    pub unknown_location: u32,
}

#[derive(Debug, Deserialize)]
struct MatchRow {
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    player_position: Option<String>,
    #[serde(default)]
    home_or_away: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    statistics_rating: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    statistics_minutes_played: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    statistics_goals: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    statistics_goal_assist: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    statistics_expected_goals: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    statistics_accurate_pass: Option<f64>,
}

impl MatchRow {
    fn into_record(self, stats: &mut ParseStats) -> MatchRecord {
        let location = match self.home_or_away.as_deref() {
            Some(raw) => match raw.parse::<Location>() {
                Ok(loc) => Some(loc),
                Err(_) => {
                    stats.unknown_location += 1;
                    None
                }
            },
            None => None,
        };

        let mut record = MatchRecord::new(self.player_name.unwrap_or_default());
        record.position = self.player_position;
        record.location = location;
        let numbers = [
            (StatField::Rating, self.statistics_rating),
            (StatField::MinutesPlayed, self.statistics_minutes_played),
            (StatField::Goals, self.statistics_goals),
            (StatField::Assists, self.statistics_goal_assist),
            (StatField::ExpectedGoals, self.statistics_expected_goals),
            (StatField::AccuratePasses, self.statistics_accurate_pass),
        ];
        for (field, value) in numbers {
            if let Some(v) = value {
                record = record.with(field, v);
            }
        }
        record
    }
}

/// Required columns absent from `headers`.
pub fn missing_columns(headers: &csv::StringRecord) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect()
}

/// Parse a match export into a `Dataset`.
///
/// # Arguments
///
/// * `csv_path` - Path to the match export
///
/// # Returns
///
/// * `Ok((Dataset, ParseStats))` - Parsed rows and statistics
/// * `Err(anyhow::Error)` - File I/O error or missing required columns
pub fn load_dataset(csv_path: &Path) -> Result<(Dataset, ParseStats)> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    load_dataset_from_reader(file)
        .with_context(|| format!("Failed to load match data from {}", csv_path.display()))
}

/// Parse a match export from any reader.
pub fn load_dataset_from_reader<R: Read>(source: R) -> Result<(Dataset, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        bail!("CSV is missing required columns: {}", missing.join(", "));
    }
    if !headers.iter().any(|h| h == POSITION_COLUMN) {
        debug!("no {} column; position filter will match nothing", POSITION_COLUMN);
    }

    let mut stats = ParseStats::default();
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<MatchRow>().enumerate() {
        stats.total_rows += 1;
        match row {
            Ok(row) => {
                records.push(row.into_record(&mut stats));
                stats.parsed += 1;
            }
            Err(err) => {
                stats.failed += 1;
                // +2: header line and 1-based numbering
                warn!("Skipping line {}: {}", idx + 2, err);
            }
        }
    }

    if stats.unknown_location > 0 {
        warn!(
            "{} rows have an unrecognised home_or_away value",
            stats.unknown_location
        );
    }
    info!(
        "Loaded {} of {} rows ({} failed)",
        stats.parsed, stats.total_rows, stats.failed
    );

    Ok((Dataset::new(records), stats))
}

/// Command-line settings layered over the analysis config.
///
/// Precedence: a YAML file (or the strict preset), then individual overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub strict: bool,
    pub confidence_level: Option<f64>,
    pub significance_level: Option<f64>,
    pub top_n: Option<usize>,
}

impl ConfigOverrides {
    pub fn resolve(&self) -> Result<AnalysisConfig> {
        let mut config = match (&self.config_path, self.strict) {
            (Some(path), _) => AnalysisConfig::load(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?,
            (None, true) => AnalysisConfig::strict(),
            (None, false) => AnalysisConfig::default(),
        };
        if let Some(level) = self.confidence_level {
            config.confidence_level = level;
        }
        if let Some(alpha) = self.significance_level {
            config.significance_level = alpha;
        }
        if let Some(top) = self.top_n {
            config.top_n = top;
        }
        config.validate()?;
        Ok(config)
    }
}

/// A question that could not be answered for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub question: QuestionId,
    pub error: String,
}

/// Answers for one selection of the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// RFC3339 timestamp
    pub generated_at: String,
    pub position_filter: Option<String>,
    pub records: usize,
    pub config: AnalysisConfig,
    pub answers: Vec<Answer>,
    pub failures: Vec<Failure>,
}

/// Run `questions` over `dataset`, optionally narrowed to one position.
pub fn build_report(
    dataset: &Dataset,
    position: Option<&str>,
    questions: &[QuestionId],
    config: &AnalysisConfig,
) -> Report {
    let selection = match position {
        Some(pos) => dataset.in_position(pos),
        None => dataset.clone(),
    };
    let registry = QuestionRegistry::standard();

    let mut answers = Vec::new();
    let mut failures = Vec::new();
    for &id in questions {
        match registry.run(id, &selection, config) {
            Ok(answer) => answers.push(answer),
            Err(err) => {
                warn!("{} could not be answered: {}", id, err);
                failures.push(Failure {
                    question: id,
                    error: err.to_string(),
                });
            }
        }
    }

    Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        position_filter: position.map(str::to_string),
        records: selection.len(),
        config: config.clone(),
        answers,
        failures,
    }
}
