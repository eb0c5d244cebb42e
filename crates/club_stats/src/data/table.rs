use super::record::{MatchRecord, StatField};
use crate::stats::UnitTotals;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Running sums for one player. Missing observations are skipped, so the
/// sum of a field with no observations is 0 and its mean is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerAggregate {
    pub appearances: u32,
    sums: [f64; StatField::COUNT],
    counts: [u32; StatField::COUNT],
}

impl PlayerAggregate {
    pub(crate) fn add(&mut self, record: &MatchRecord) {
        self.appearances += 1;
        for field in StatField::ALL {
            if let Some(v) = field.value(record) {
                self.sums[field.index()] += v;
                self.counts[field.index()] += 1;
            }
        }
    }

    pub fn sum(&self, field: StatField) -> f64 {
        self.sums[field.index()]
    }

    /// Number of appearances where `field` was recorded.
    pub fn count(&self, field: StatField) -> u32 {
        self.counts[field.index()]
    }

    pub fn mean(&self, field: StatField) -> Option<f64> {
        match self.count(field) {
            0 => None,
            n => Some(self.sum(field) / n as f64),
        }
    }

    /// Goals plus assists over the player's appearances.
    pub fn goal_involvements(&self) -> f64 {
        self.sum(StatField::Goals) + self.sum(StatField::Assists)
    }
}

/// Per-player aggregation of a dataset, keyed by player name.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    players: FxHashMap<String, PlayerAggregate>,
}

impl PlayerTable {
    pub(crate) fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        let mut players: FxHashMap<String, PlayerAggregate> = FxHashMap::default();
        // unnamed appearances count toward venue samples but belong to no player
        for record in records.into_iter().filter(|r| !r.player_name.is_empty()) {
            players
                .entry(record.player_name.clone())
                .or_default()
                .add(record);
        }
        Self { players }
    }

    pub fn get(&self, player: &str) -> Option<&PlayerAggregate> {
        self.players.get(player)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerAggregate)> {
        self.players.iter().map(|(name, agg)| (name.as_str(), agg))
    }

    /// Players in name order.
    pub fn sorted(&self) -> Vec<(&str, &PlayerAggregate)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// Σ numerators over Σ denominator per player, ready for `per_unit_ratio`.
    pub fn totals<'a>(
        &'a self,
        numerators: &'a [StatField],
        denominator: StatField,
    ) -> impl Iterator<Item = (&'a str, UnitTotals)> + 'a {
        self.iter().map(move |(name, agg)| {
            let numerator = numerators.iter().map(|f| agg.sum(*f)).sum();
            (name, UnitTotals::new(numerator, agg.sum(denominator)))
        })
    }

    /// Mean of a per-player sum across players.
    pub fn mean_of_sums(&self, field: StatField) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let total: f64 = self.players.values().map(|agg| agg.sum(field)).sum();
        Some(total / self.players.len() as f64)
    }
}
