//! Month index
//!
//! Derives the set of distinct month buckets present in a record collection
//! and exposes it as a sorted, deduplicated, most-recent-first listing.

use std::collections::BTreeSet;

use crate::models::{MonthKey, Record};

/// Sentinel bucket label covering the whole store; always listed first and
/// always the fallback selection.
pub const ALL_TIME: &str = "All Time";

/// Distinct month keys present in `records`, most recent first
///
/// Records whose dates do not parse into a month key belong to no bucket and
/// are simply absent here; they still show up in the all-time view.
pub fn month_keys(records: &[Record]) -> Vec<MonthKey> {
    let keys: BTreeSet<MonthKey> = records
        .iter()
        .filter_map(|record| MonthKey::from_date(&record.date))
        .collect();
    keys.into_iter().rev().collect()
}

/// Bucket labels for a selector widget: `All Time` followed by `MM/YYYY`
/// labels, most recent first
pub fn bucket_labels(records: &[Record]) -> Vec<String> {
    let mut labels = vec![ALL_TIME.to_string()];
    labels.extend(month_keys(records).iter().map(MonthKey::label));
    labels
}

/// Keep `previous` if that bucket still exists, otherwise reset to `All Time`
pub fn resolve_selection(records: &[Record], previous: &str) -> String {
    if bucket_labels(records).iter().any(|label| label == previous) {
        previous.to_string()
    } else {
        ALL_TIME.to_string()
    }
}
