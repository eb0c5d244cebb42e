//! Plain-text rendering of answers and player tables.
//!
//! p-values are printed with four decimals, every other number with two.

use crate::Report;
use club_stats::analysis::{LocationSummary, PlayerPoint, RankedPlayer, ShortfallEntry};
use club_stats::stats::ConfidenceInterval;
use club_stats::{Answer, Finding, Location, PlayerTable, StatField};
use std::fmt::Write;

const RULE: &str = "------------------------------------------------------------";

fn location_line(out: &mut String, summary: &LocationSummary) {
    let ci = &summary.interval;
    let _ = writeln!(
        out,
        "  {:<5} n={:<4} weighted mean {:.2}  mean {:.2}  [{:.2}, {:.2}]",
        summary.location.as_str(),
        summary.appearances,
        summary.weighted_mean,
        ci.point_estimate,
        ci.lower_bound,
        ci.upper_bound
    );
}

/// Level as a percentage without trailing zeros: 0.95 → "95", 0.975 → "97.5".
fn percent(level: f64) -> String {
    let text = format!("{:.2}", level * 100.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn interval_line(out: &mut String, location: Location, ci: &ConfidenceInterval) {
    let _ = writeln!(
        out,
        "  {:<5} mean {:.2}  [{:.2}, {:.2}]",
        location.as_str(),
        ci.point_estimate,
        ci.lower_bound,
        ci.upper_bound
    );
}

fn points_block(out: &mut String, x_label: &str, y_label: &str, points: &[PlayerPoint]) {
    let _ = writeln!(out, "  {:<24} {:>12} {:>12}", "Player", x_label, y_label);
    for p in points {
        let _ = writeln!(out, "  {:<24} {:>12.2} {:>12.2}", p.player, p.x, p.y);
    }
}

fn ranking_block(out: &mut String, entries: &[RankedPlayer]) {
    for (rank, e) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<24} {:>8.2} per 90  ({:.2} G+A in {:.2} min)",
            rank + 1,
            e.player,
            e.value * 90.0,
            e.goal_involvements,
            e.minutes_played
        );
    }
}

fn shortfall_block(out: &mut String, entries: &[ShortfallEntry]) {
    for e in entries {
        let _ = writeln!(
            out,
            "  {:<24} xG {:>6.2}  goals {:>6.2}  shortfall {:>6.2}",
            e.player, e.expected_goals, e.goals, e.shortfall
        );
    }
}

/// Human-readable block for one answer.
pub fn render_answer(answer: &Answer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "[{}] {}", answer.question, answer.title);
    let _ = writeln!(out, "{}", answer.prompt);
    let _ = writeln!(out);

    match &answer.finding {
        Finding::LocationComparison {
            home, away, test, ..
        } => {
            location_line(&mut out, home);
            location_line(&mut out, away);
            let _ = writeln!(
                out,
                "  Welch t = {:.2}, df = {:.2}, p = {:.4}",
                test.statistic, test.degrees_of_freedom, test.p_value
            );
        }
        Finding::RatingIntervals {
            confidence_level,
            home,
            away,
            ..
        } => {
            let _ = writeln!(out, "  {}% confidence intervals", percent(*confidence_level));
            interval_line(&mut out, Location::Home, home);
            interval_line(&mut out, Location::Away, away);
        }
        Finding::Scatter {
            x_label,
            y_label,
            points,
            ..
        } => points_block(&mut out, x_label, y_label, points),
        Finding::Ranking { metric, entries } => {
            let _ = writeln!(out, "  {}", metric);
            ranking_block(&mut out, entries);
        }
        Finding::Shortfall {
            mean_expected_goals,
            mean_goals,
            entries,
        } => {
            let _ = writeln!(
                out,
                "  squad mean xG {:.2}, squad mean goals {:.2}",
                mean_expected_goals, mean_goals
            );
            shortfall_block(&mut out, entries);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", answer.conclusion);
    out
}

/// Every answer and failure in a report.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    match &report.position_filter {
        Some(pos) => {
            let _ = writeln!(out, "{} appearances (position {})", report.records, pos);
        }
        None => {
            let _ = writeln!(out, "{} appearances", report.records);
        }
    }
    for answer in &report.answers {
        out.push_str(&render_answer(answer));
    }
    for failure in &report.failures {
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "[{}] not answered: {}", failure.question, failure.error);
    }
    out
}

/// Season totals per player, most goals first. `limit` of 0 prints everyone.
pub fn render_players(table: &PlayerTable, limit: usize) -> String {
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|a, b| {
        b.1.sum(StatField::Goals)
            .total_cmp(&a.1.sum(StatField::Goals))
            .then_with(|| a.0.cmp(b.0))
    });
    if limit > 0 {
        rows.truncate(limit);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>4} {:>8} {:>6} {:>6} {:>6} {:>6}",
        "Player", "Apps", "Minutes", "Goals", "Ast", "xG", "Rating"
    );
    for (name, agg) in rows {
        let rating = agg
            .mean(StatField::Rating)
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<24} {:>4} {:>8.2} {:>6.2} {:>6.2} {:>6.2} {:>6}",
            name,
            agg.appearances,
            agg.sum(StatField::MinutesPlayed),
            agg.sum(StatField::Goals),
            agg.sum(StatField::Assists),
            agg.sum(StatField::ExpectedGoals),
            rating
        );
    }
    out
}
