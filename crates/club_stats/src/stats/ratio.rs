//! # Per-unit efficiency
//!
//! `numerator / denominator` per group (goals + assists per minute played),
//! plus the descending top-N cut used by every "most efficient" ranking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Summed numerator and denominator for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitTotals {
    pub numerator: f64,
    pub denominator: f64,
}

impl UnitTotals {
    pub fn new(numerator: f64, denominator: f64) -> Self {
        Self { numerator, denominator }
    }

    /// `None` when the denominator is exactly zero.
    pub fn ratio(&self) -> Option<f64> {
        if self.denominator == 0.0 {
            None
        } else {
            Some(self.numerator / self.denominator)
        }
    }
}

/// Ratio per key. Keys whose denominator is exactly zero are left out.
///
/// # Examples
/// ```
/// use club_stats::stats::{per_unit_ratio, UnitTotals};
///
/// let ratios = per_unit_ratio([("a", UnitTotals::new(10.0, 2.0)), ("b", UnitTotals::new(3.0, 0.0))]);
/// assert_eq!(ratios.get("a"), Some(&5.0));
/// assert!(!ratios.contains_key("b"));
/// ```
pub fn per_unit_ratio<K, I>(groups: I) -> FxHashMap<K, f64>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, UnitTotals)>,
{
    groups
        .into_iter()
        .filter_map(|(key, totals)| totals.ratio().map(|r| (key, r)))
        .collect()
}

/// A key with its ranking value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry<K> {
    pub key: K,
    pub value: f64,
}

/// Highest `n` values first; equal values are ordered by key.
pub fn top_n<K, I>(values: I, n: usize) -> Vec<RankedEntry<K>>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut ranked: Vec<RankedEntry<K>> = values
        .into_iter()
        .map(|(key, value)| RankedEntry { key, value })
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_basic() {
        let ratios = per_unit_ratio(vec![("striker", UnitTotals::new(10.0, 2.0))]);
        assert_eq!(ratios["striker"], 5.0);
    }

    #[test]
    fn test_zero_denominator_excluded() {
        let ratios = per_unit_ratio(vec![
            ("bench", UnitTotals::new(0.0, 0.0)),
            ("cameo", UnitTotals::new(1.0, 0.0)),
            ("starter", UnitTotals::new(2.0, 180.0)),
        ]);
        assert_eq!(ratios.len(), 1);
        assert!(ratios.contains_key("starter"));
    }

    #[test]
    fn test_top_n_orders_and_cuts() {
        let ranked = top_n(vec![("a", 0.1), ("b", 0.3), ("c", 0.2), ("d", 0.05)], 3);
        let keys: Vec<_> = ranked.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_n_ties_by_key() {
        let ranked = top_n(vec![("zeca", 1.0), ("ana", 1.0), ("bruno", 2.0)], 10);
        let keys: Vec<_> = ranked.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["bruno", "ana", "zeca"]);
    }

    #[test]
    fn test_top_n_zero() {
        assert!(top_n(vec![("a", 1.0)], 0).is_empty());
    }
}
