use super::*;
use crate::config::AnalysisConfig;
use crate::data::{Dataset, Location, MatchRecord, StatField};
use crate::error::{AnalysisError, StatsError};

struct Line {
    player: &'static str,
    position: &'static str,
    location: Location,
    rating: Option<f64>,
    minutes: f64,
    goals: f64,
    assists: f64,
    xg: Option<f64>,
    passes: Option<f64>,
}

fn line(
    player: &'static str,
    position: &'static str,
    location: Location,
    rating: Option<f64>,
    minutes: f64,
    (goals, assists): (f64, f64),
    xg: Option<f64>,
    passes: Option<f64>,
) -> Line {
    Line {
        player,
        position,
        location,
        rating,
        minutes,
        goals,
        assists,
        xg,
        passes,
    }
}

fn to_record(l: &Line) -> MatchRecord {
    MatchRecord {
        player_name: l.player.to_string(),
        position: Some(l.position.to_string()),
        location: Some(l.location),
        rating: l.rating,
        minutes_played: Some(l.minutes),
        goals: Some(l.goals),
        assists: Some(l.assists),
        expected_goals: l.xg,
        accurate_passes: l.passes,
    }
}

/// Season fixture.
///
/// Home ratings 7.0, 6.8, 6.2, 6.6 (minutes 90, 90, 30, 90);
/// away ratings 6.5, 6.0, 5.5, 5.8 (minutes 90, 80, 20, 10).
fn season() -> Dataset {
    use Location::{Away, Home};
    let lines = vec![
        line("Ana", "F", Home, Some(7.0), 90.0, (1.0, 0.0), Some(0.8), Some(20.0)),
        line("Ana", "F", Away, Some(6.5), 90.0, (0.0, 1.0), Some(0.4), Some(18.0)),
        line("Bruno", "M", Home, Some(6.8), 90.0, (0.0, 1.0), Some(0.1), Some(40.0)),
        line("Bruno", "M", Away, Some(6.0), 80.0, (0.0, 0.0), Some(0.2), Some(35.0)),
        line("Caio", "F", Home, Some(6.2), 30.0, (0.0, 1.0), Some(0.9), None),
        line("Caio", "F", Away, Some(5.5), 20.0, (0.0, 0.0), Some(1.5), None),
        line("Davi", "D", Home, Some(6.6), 90.0, (0.0, 0.0), Some(0.0), Some(30.0)),
        line("Davi", "D", Away, None, 0.0, (0.0, 0.0), None, None),
        line("Enzo", "F", Away, Some(5.8), 10.0, (1.0, 0.0), Some(0.3), Some(2.0)),
        line("Fabio", "G", Away, None, 0.0, (0.0, 0.0), None, None),
    ];
    lines.iter().map(to_record).collect()
}

fn run(id: QuestionId, dataset: &Dataset, config: &AnalysisConfig) -> Answer {
    QuestionRegistry::standard()
        .run(id, dataset, config)
        .unwrap_or_else(|e| panic!("{} failed: {}", id, e))
}

#[test]
fn test_registry_covers_catalogue() {
    let registry = QuestionRegistry::standard();
    assert_eq!(registry.len(), QuestionId::ALL.len());
    let ids: Vec<_> = registry.iter().map(|q| q.id).collect();
    assert_eq!(ids, QuestionId::ALL.to_vec());
}

#[test]
fn test_question_slugs_round_trip() {
    for id in QuestionId::ALL {
        assert_eq!(id.slug().parse::<QuestionId>().unwrap(), id);
    }
    assert!(matches!(
        "pergunta-9".parse::<QuestionId>(),
        Err(AnalysisError::UnknownQuestion(_))
    ));
}

#[test]
fn test_home_away_comparison() {
    let answer = run(QuestionId::HomeAway, &season(), &AnalysisConfig::default());
    let Finding::LocationComparison {
        home,
        away,
        test,
        significant,
        ..
    } = answer.finding
    else {
        panic!("unexpected finding");
    };

    assert_eq!(home.appearances, 4);
    assert_eq!(away.appearances, 4);
    assert!((home.weighted_mean - 6.74).abs() < 1e-9);
    // Davi's unrated away appearance carries no weight
    assert!((away.weighted_mean - 6.165).abs() < 1e-9);
    assert!((home.interval.point_estimate - 6.65).abs() < 1e-9);
    assert!((away.interval.point_estimate - 5.95).abs() < 1e-9);

    assert!(test.statistic > 0.0);
    assert_eq!(significant, test.p_value < 0.05);
}

#[test]
fn test_home_away_reference_scenario() {
    let dataset: Dataset = [6.0, 6.5, 7.0]
        .iter()
        .map(|r| (Location::Home, *r))
        .chain([5.0, 5.5, 6.0].iter().map(|r| (Location::Away, *r)))
        .map(|(loc, r)| {
            MatchRecord::new("P")
                .with_location(loc)
                .with(StatField::Rating, r)
                .with(StatField::MinutesPlayed, 90.0)
        })
        .collect();

    let answer = run(QuestionId::HomeAway, &dataset, &AnalysisConfig::default());
    assert!(answer.conclusion.starts_with("There is no statistically significant"));
    assert!(answer.conclusion.contains("p = 0.0705"));

    let lenient = AnalysisConfig {
        significance_level: 0.10,
        ..AnalysisConfig::default()
    };
    let answer = run(QuestionId::HomeAway, &dataset, &lenient);
    assert!(answer.conclusion.starts_with("There is a statistically significant"));
}

#[test]
fn test_home_away_needs_two_ratings_per_venue() {
    let dataset: Dataset = vec![
        MatchRecord::new("A").with_location(Location::Home).with(StatField::Rating, 7.0),
        MatchRecord::new("B").with_location(Location::Away).with(StatField::Rating, 6.0),
        MatchRecord::new("C").with_location(Location::Away).with(StatField::Rating, 6.4),
    ]
    .into_iter()
    .collect();

    let err = QuestionRegistry::standard()
        .run(QuestionId::HomeAway, &dataset, &AnalysisConfig::default())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Stats(StatsError::InvalidInput(_))));
    assert!(err.is_data_error());
}

#[test]
fn test_rating_intervals() {
    let answer = run(QuestionId::RatingIntervals, &season(), &AnalysisConfig::default());
    let Finding::RatingIntervals { home, away, overlap, confidence_level } = answer.finding else {
        panic!("unexpected finding");
    };
    assert_eq!(confidence_level, 0.95);
    assert!(home.contains(6.65));
    assert!(away.contains(5.95));
    assert_eq!(overlap, home.overlaps(&away));
}

#[test]
fn test_contribution_per_minute_ranking() {
    let answer = run(QuestionId::ContributionPerMinute, &season(), &AnalysisConfig::default());
    let Finding::Ranking { entries, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    let names: Vec<_> = entries.iter().map(|e| e.player.as_str()).collect();
    // Fabio never played a minute
    assert_eq!(names, vec!["Enzo", "Caio", "Ana", "Bruno", "Davi"]);
    assert!((entries[0].value - 0.1).abs() < 1e-12);
    assert_eq!(entries[2].minutes_played, 180.0);
    assert_eq!(entries[2].goal_involvements, 2.0);
    assert!(answer.conclusion.starts_with("Enzo leads"));
}

#[test]
fn test_contribution_per_minute_top_n() {
    let config = AnalysisConfig {
        top_n: 2,
        ..AnalysisConfig::default()
    };
    let answer = run(QuestionId::ContributionPerMinute, &season(), &config);
    let Finding::Ranking { entries, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_efficient_low_minutes_pool() {
    let config = AnalysisConfig {
        top_n: 2,
        low_minutes_pool: 3,
        ..AnalysisConfig::default()
    };
    let answer = run(QuestionId::EfficientLowMinutes, &season(), &config);
    let Finding::Ranking { entries, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    let names: Vec<_> = entries.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(names, vec!["Enzo", "Caio"]);
}

#[test]
fn test_efficient_low_minutes_pool_excludes_regulars() {
    let config = AnalysisConfig {
        low_minutes_pool: 2,
        ..AnalysisConfig::default()
    };
    let answer = run(QuestionId::EfficientLowMinutes, &season(), &config);
    let Finding::Ranking { entries, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    assert!(entries.iter().all(|e| e.minutes_played <= 50.0));
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_xg_underperformers() {
    let answer = run(QuestionId::XgUnderperformers, &season(), &AnalysisConfig::default());
    let Finding::Shortfall {
        mean_expected_goals,
        mean_goals,
        entries,
    } = answer.finding
    else {
        panic!("unexpected finding");
    };
    assert!((mean_expected_goals - 0.7).abs() < 1e-9);
    assert!((mean_goals - 2.0 / 6.0).abs() < 1e-9);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].player, "Caio");
    assert!((entries[0].shortfall - 2.4).abs() < 1e-9);
}

#[test]
fn test_xg_underperformers_empty_selection() {
    let err = QuestionRegistry::standard()
        .run(
            QuestionId::XgUnderperformers,
            &Dataset::default(),
            &AnalysisConfig::default(),
        )
        .unwrap_err();
    assert!(err.is_data_error());
}

#[test]
fn test_xg_vs_goals_scatter() {
    let answer = run(QuestionId::XgVsGoals, &season(), &AnalysisConfig::default());
    let Finding::Scatter { points, correlation, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    assert_eq!(points.len(), 6);
    assert_eq!(points[0].player, "Ana");
    assert!((points[0].x - 1.2).abs() < 1e-9);
    assert_eq!(points[0].y, 1.0);
    let r = correlation.unwrap();
    assert!((-1.0..=1.0).contains(&r));
}

#[test]
fn test_rating_vs_contributions_drops_unrated() {
    let answer = run(QuestionId::RatingVsContributions, &season(), &AnalysisConfig::default());
    let Finding::Scatter { points, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    assert_eq!(points.len(), 5);
    assert!(points.iter().all(|p| p.player != "Fabio"));
    let ana = points.iter().find(|p| p.player == "Ana").unwrap();
    assert_eq!(ana.x, 2.0);
    assert!((ana.y - 6.75).abs() < 1e-9);
}

#[test]
fn test_passes_vs_rating_needs_both_means() {
    let answer = run(QuestionId::PassesVsRating, &season(), &AnalysisConfig::default());
    let Finding::Scatter { points, correlation, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    let names: Vec<_> = points.iter().map(|p| p.player.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Davi", "Enzo"]);
    assert!(correlation.unwrap() > 0.0);
}

#[test]
fn test_scatter_without_players_has_no_correlation() {
    let answer = run(QuestionId::XgVsGoals, &Dataset::default(), &AnalysisConfig::default());
    let Finding::Scatter { points, correlation, .. } = &answer.finding else {
        panic!("unexpected finding");
    };
    assert!(points.is_empty());
    assert!(correlation.is_none());
    assert!(answer.conclusion.starts_with("Not enough"));
}

#[test]
fn test_position_filter_before_analysis() {
    let forwards = season().in_position("F");
    let answer = run(QuestionId::ContributionPerMinute, &forwards, &AnalysisConfig::default());
    let Finding::Ranking { entries, .. } = answer.finding else {
        panic!("unexpected finding");
    };
    let names: Vec<_> = entries.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(names, vec!["Enzo", "Caio", "Ana"]);
}

#[test]
fn test_invalid_config_rejected_before_running() {
    let config = AnalysisConfig {
        confidence_level: 1.5,
        ..AnalysisConfig::default()
    };
    let err = QuestionRegistry::standard()
        .run(QuestionId::RatingIntervals, &season(), &config)
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidConfig(_)));
}

#[test]
fn test_run_all_keeps_going_after_failures() {
    let results = QuestionRegistry::standard().run_all(&Dataset::default(), &AnalysisConfig::default());
    assert_eq!(results.len(), QuestionId::ALL.len());
    let failed: Vec<_> = results
        .iter()
        .filter(|(_, r)| r.is_err())
        .map(|(id, _)| *id)
        .collect();
    assert!(failed.contains(&QuestionId::HomeAway));
    assert!(failed.contains(&QuestionId::XgUnderperformers));
    assert!(!failed.contains(&QuestionId::XgVsGoals));
}

#[test]
fn test_custom_registry_lookup() {
    let mut registry = QuestionRegistry::new();
    registry.register(QuestionId::XgVsGoals, questions::xg_vs_goals);
    assert!(registry.get(QuestionId::HomeAway).is_none());
    let err = registry
        .run(QuestionId::HomeAway, &season(), &AnalysisConfig::default())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownQuestion(_)));
}

#[test]
fn test_answer_serializes_with_kind_tag() {
    let answer = run(QuestionId::RatingIntervals, &season(), &AnalysisConfig::default());
    let json = serde_json::to_value(&answer).unwrap();
    assert_eq!(json["question"], "rating-intervals");
    assert_eq!(json["finding"]["kind"], "rating_intervals");
}
