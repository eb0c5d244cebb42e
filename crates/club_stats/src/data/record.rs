use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the match was played, from the club's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Away,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Home, Location::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Home => "home",
            Location::Away => "away",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Location::Home),
            "away" => Ok(Location::Away),
            other => Err(format!("unknown location: {:?}", other)),
        }
    }
}

/// Numeric per-appearance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Rating,
    MinutesPlayed,
    Goals,
    Assists,
    ExpectedGoals,
    AccuratePasses,
}

impl StatField {
    pub const ALL: [StatField; 6] = [
        StatField::Rating,
        StatField::MinutesPlayed,
        StatField::Goals,
        StatField::Assists,
        StatField::ExpectedGoals,
        StatField::AccuratePasses,
    ];

    pub(crate) const COUNT: usize = Self::ALL.len();

    /// Column name in the match export.
    pub fn column(&self) -> &'static str {
        match self {
            StatField::Rating => "statistics_rating",
            StatField::MinutesPlayed => "statistics_minutes_played",
            StatField::Goals => "statistics_goals",
            StatField::Assists => "statistics_goal_assist",
            StatField::ExpectedGoals => "statistics_expected_goals",
            StatField::AccuratePasses => "statistics_accurate_pass",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatField::Rating => "Rating",
            StatField::MinutesPlayed => "Minutes played",
            StatField::Goals => "Goals",
            StatField::Assists => "Assists",
            StatField::ExpectedGoals => "Expected goals (xG)",
            StatField::AccuratePasses => "Accurate passes",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    pub fn value(&self, record: &MatchRecord) -> Option<f64> {
        match self {
            StatField::Rating => record.rating,
            StatField::MinutesPlayed => record.minutes_played,
            StatField::Goals => record.goals,
            StatField::Assists => record.assists,
            StatField::ExpectedGoals => record.expected_goals,
            StatField::AccuratePasses => record.accurate_passes,
        }
    }
}

/// One player's line in one match. Missing statistics are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player_name: String,
    pub position: Option<String>,
    pub location: Option<Location>,
    pub rating: Option<f64>,
    pub minutes_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub expected_goals: Option<f64>,
    pub accurate_passes: Option<f64>,
}

impl MatchRecord {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set a statistic. NaN is stored as missing.
    pub fn with(mut self, field: StatField, value: f64) -> Self {
        let value = if value.is_nan() { None } else { Some(value) };
        match field {
            StatField::Rating => self.rating = value,
            StatField::MinutesPlayed => self.minutes_played = value,
            StatField::Goals => self.goals = value,
            StatField::Assists => self.assists = value,
            StatField::ExpectedGoals => self.expected_goals = value,
            StatField::AccuratePasses => self.accurate_passes = value,
        }
        self
    }
}
