//! # Match Data
//!
//! In-memory table of player appearances and the handful of table
//! operations the questions need: equality filters, null exclusion and
//! per-player aggregation.
//!
//! - `record` - `MatchRecord`, `Location`, `StatField`
//! - `dataset` - `Dataset` (filters, samples, grouping)
//! - `table` - `PlayerTable` per-player sums and means

pub mod dataset;
pub mod record;
pub mod table;

pub use dataset::Dataset;
pub use record::{Location, MatchRecord, StatField};
pub use table::{PlayerAggregate, PlayerTable};
