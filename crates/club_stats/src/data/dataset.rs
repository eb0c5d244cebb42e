use super::record::{Location, MatchRecord, StatField};
use super::table::PlayerTable;
use crate::error::StatsResult;
use crate::stats::{Sample, WeightedSample};

/// Immutable table of appearances, loaded once and shared by reference
/// with every analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<MatchRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows matching `predicate`, as a new dataset.
    pub fn filter<F>(&self, predicate: F) -> Dataset
    where
        F: Fn(&MatchRecord) -> bool,
    {
        Dataset::new(self.records.iter().filter(|r| predicate(r)).cloned().collect())
    }

    pub fn at_location(&self, location: Location) -> Dataset {
        self.filter(|r| r.location == Some(location))
    }

    pub fn in_position(&self, position: &str) -> Dataset {
        self.filter(|r| r.position.as_deref() == Some(position))
    }

    /// All recorded values of `field`, missing ones excluded.
    pub fn sample(&self, field: StatField) -> Sample {
        Sample::from_optional(self.records.iter().map(|r| field.value(r)))
    }

    /// `value` weighted by `weight`, over the rows where both are recorded.
    pub fn weighted_pairs(&self, value: StatField, weight: StatField) -> StatsResult<WeightedSample> {
        let (values, weights): (Vec<f64>, Vec<f64>) = self
            .records
            .iter()
            .filter_map(|r| match (value.value(r), weight.value(r)) {
                (Some(v), Some(w)) if !v.is_nan() && !w.is_nan() => Some((v, w)),
                _ => None,
            })
            .unzip();
        WeightedSample::new(values, weights)
    }

    pub fn group_by_player(&self) -> PlayerTable {
        PlayerTable::from_records(&self.records)
    }

    /// Distinct positions, in order of first appearance.
    pub fn positions(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for position in self.records.iter().filter_map(|r| r.position.as_ref()) {
            if !seen.iter().any(|p| p == position) {
                seen.push(position.clone());
            }
        }
        seen
    }
}

impl FromIterator<MatchRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MatchRecord>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
