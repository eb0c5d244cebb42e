//! # Question analyses
//!
//! One function per question, all with the `AnalysisFn` signature. Per-player
//! questions aggregate with `Dataset::group_by_player` (sums skip missing
//! values, means are taken over recorded values only).

use super::finding::{Finding, LocationSummary, PlayerPoint, RankedPlayer, ShortfallEntry};
use crate::config::AnalysisConfig;
use crate::data::{Dataset, Location, PlayerAggregate, PlayerTable, StatField};
use crate::error::{Result, StatsError};
use crate::stats::{
    confidence_interval, pearson_correlation, per_unit_ratio, top_n, welch_t_test,
    ConfidenceInterval, RankedEntry, Sample, UnitTotals,
};
use tracing::debug;

const PER_MINUTE_METRIC: &str = "Goals + assists per minute";

fn rating_interval(
    dataset: &Dataset,
    location: Location,
    config: &AnalysisConfig,
) -> Result<(Sample, ConfidenceInterval)> {
    let ratings = dataset.at_location(location).sample(StatField::Rating);
    let interval = confidence_interval(ratings.as_slice(), config.confidence_level)?;
    Ok((ratings, interval))
}

/// Minutes-weighted and unweighted mean rating per venue, compared with
/// Welch's t-test.
pub fn home_away(dataset: &Dataset, config: &AnalysisConfig) -> Result<Finding> {
    let summarize = |location: Location| -> Result<(Sample, LocationSummary)> {
        let (ratings, interval) = rating_interval(dataset, location, config)?;
        let weighted_mean = dataset
            .at_location(location)
            .weighted_pairs(StatField::Rating, StatField::MinutesPlayed)?
            .mean()?;
        let summary = LocationSummary {
            location,
            appearances: ratings.len(),
            weighted_mean,
            interval,
        };
        Ok((ratings, summary))
    };

    let (home_ratings, home) = summarize(Location::Home)?;
    let (away_ratings, away) = summarize(Location::Away)?;
    let test = welch_t_test(home_ratings.as_slice(), away_ratings.as_slice())?;
    let significant = test.is_significant(config.significance_level);

    debug!(
        "home/away: n={}/{} t={:.4} p={:.6}",
        home.appearances, away.appearances, test.statistic, test.p_value
    );

    Ok(Finding::LocationComparison {
        home,
        away,
        test,
        significance_level: config.significance_level,
        significant,
    })
}

/// Rating interval per venue and whether the two overlap.
pub fn rating_intervals(dataset: &Dataset, config: &AnalysisConfig) -> Result<Finding> {
    let (_, home) = rating_interval(dataset, Location::Home, config)?;
    let (_, away) = rating_interval(dataset, Location::Away, config)?;
    Ok(Finding::RatingIntervals {
        confidence_level: config.confidence_level,
        home,
        away,
        overlap: home.overlaps(&away),
    })
}

fn scatter<F>(table: &PlayerTable, x_label: &str, y_label: &str, project: F) -> Finding
where
    F: Fn(&PlayerAggregate) -> Option<(f64, f64)>,
{
    let points: Vec<PlayerPoint> = table
        .sorted()
        .into_iter()
        .filter_map(|(player, agg)| {
            project(agg).map(|(x, y)| PlayerPoint {
                player: player.to_string(),
                x,
                y,
            })
        })
        .collect();

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let correlation = match pearson_correlation(&xs, &ys) {
        Ok(r) => Some(r),
        Err(err) => {
            debug!("correlation skipped: {}", err);
            None
        }
    };

    Finding::Scatter {
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points,
        correlation,
    }
}

/// Σ xG against Σ goals per player.
pub fn xg_vs_goals(dataset: &Dataset, _config: &AnalysisConfig) -> Result<Finding> {
    let table = dataset.group_by_player();
    Ok(scatter(&table, "Expected goals (xG)", "Goals scored", |agg| {
        Some((agg.sum(StatField::ExpectedGoals), agg.sum(StatField::Goals)))
    }))
}

fn ranked(table: &PlayerTable, entries: Vec<RankedEntry<&str>>) -> Vec<RankedPlayer> {
    entries
        .into_iter()
        .filter_map(|entry| {
            table.get(entry.key).map(|agg| RankedPlayer {
                player: entry.key.to_string(),
                value: entry.value,
                minutes_played: agg.sum(StatField::MinutesPlayed),
                goal_involvements: agg.goal_involvements(),
            })
        })
        .collect()
}

/// Players ranked by (goals + assists) / minutes.
pub fn contribution_per_minute(dataset: &Dataset, config: &AnalysisConfig) -> Result<Finding> {
    let table = dataset.group_by_player();
    let ratios = per_unit_ratio(
        table.totals(&[StatField::Goals, StatField::Assists], StatField::MinutesPlayed),
    );
    let entries = ranked(&table, top_n(ratios, config.top_n));
    Ok(Finding::Ranking {
        metric: PER_MINUTE_METRIC.to_string(),
        entries,
    })
}

/// Mean rating against total goal involvements. Players never rated are dropped.
pub fn rating_vs_contributions(dataset: &Dataset, _config: &AnalysisConfig) -> Result<Finding> {
    let table = dataset.group_by_player();
    Ok(scatter(&table, "Goal involvements", "Mean rating", |agg| {
        agg.mean(StatField::Rating)
            .map(|rating| (agg.goal_involvements(), rating))
    }))
}

/// Players above the squad mean in xG but below it in goals, by shortfall.
pub fn xg_underperformers(dataset: &Dataset, config: &AnalysisConfig) -> Result<Finding> {
    let table = dataset.group_by_player();
    let no_players = || StatsError::InvalidInput("no players in the selection".into());
    let mean_expected_goals = table
        .mean_of_sums(StatField::ExpectedGoals)
        .ok_or_else(no_players)?;
    let mean_goals = table.mean_of_sums(StatField::Goals).ok_or_else(no_players)?;

    let shortfalls = table.iter().filter_map(|(player, agg)| {
        let xg = agg.sum(StatField::ExpectedGoals);
        let goals = agg.sum(StatField::Goals);
        (xg > mean_expected_goals && goals < mean_goals).then_some((player, xg - goals))
    });

    let entries = top_n(shortfalls, config.top_n)
        .into_iter()
        .filter_map(|entry| {
            table.get(entry.key).map(|agg| ShortfallEntry {
                player: entry.key.to_string(),
                expected_goals: agg.sum(StatField::ExpectedGoals),
                goals: agg.sum(StatField::Goals),
                shortfall: entry.value,
            })
        })
        .collect();

    Ok(Finding::Shortfall {
        mean_expected_goals,
        mean_goals,
        entries,
    })
}

/// Mean accurate passes against mean rating, for players with both recorded.
pub fn passes_vs_rating(dataset: &Dataset, _config: &AnalysisConfig) -> Result<Finding> {
    let table = dataset.group_by_player();
    Ok(scatter(&table, "Mean accurate passes", "Mean rating", |agg| {
        Some((agg.mean(StatField::AccuratePasses)?, agg.mean(StatField::Rating)?))
    }))
}

/// Per-minute efficiency among the players with the fewest minutes.
pub fn efficient_low_minutes(dataset: &Dataset, config: &AnalysisConfig) -> Result<Finding> {
    let table = dataset.group_by_player();

    let mut played: Vec<(&str, &PlayerAggregate)> = table
        .iter()
        .filter(|(_, agg)| agg.sum(StatField::MinutesPlayed) > 0.0)
        .collect();
    played.sort_by(|a, b| {
        a.1.sum(StatField::MinutesPlayed)
            .total_cmp(&b.1.sum(StatField::MinutesPlayed))
            .then_with(|| a.0.cmp(b.0))
    });
    played.truncate(config.low_minutes_pool);

    let ratios = per_unit_ratio(played.into_iter().map(|(player, agg)| {
        let totals = UnitTotals::new(agg.goal_involvements(), agg.sum(StatField::MinutesPlayed));
        (player, totals)
    }));
    let entries = ranked(&table, top_n(ratios, config.top_n));

    Ok(Finding::Ranking {
        metric: PER_MINUTE_METRIC.to_string(),
        entries,
    })
}
