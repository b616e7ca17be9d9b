use super::metric::Metric;
use crate::model::{ActivityRecord, RankedEntry};
use std::cmp::Reverse;

/// Most entries a ranking keeps.
pub const TOP_N: usize = 12;

/// Orders by the metric key, then by name, both descending, and keeps the
/// first [`TOP_N`]. Names are unique, so the order is total.
pub fn rank<M: Metric>(record: ActivityRecord<M::Value>) -> Vec<RankedEntry<M::Value>> {
    let mut entries: Vec<RankedEntry<M::Value>> = record
        .entries
        .into_iter()
        .map(|(name, value)| RankedEntry { name, value })
        .collect();

    entries.sort_by_cached_key(|e| (Reverse(M::key(&e.value)), Reverse(e.name.clone())));
    entries.truncate(TOP_N);
    entries
}
