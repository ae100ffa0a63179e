use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trv_types::TrvRecord;

/// Minimum-duration thresholds (hours) reported per year.
pub const DURATION_THRESHOLDS_HOURS: [i64; 3] = [6, 12, 24];

/// Per-year counts of records lasting at least `min_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdDistribution {
    pub min_hours: i64,
    pub counts: BTreeMap<i32, usize>,
}

/// Count of records per start-date year.
pub fn yearly_distribution(records: &[TrvRecord]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.year()).or_insert(0) += 1;
    }
    counts
}

/// Count of records per start-date year among those whose duration is at
/// least `min_hours`. Years with no qualifying record are absent.
pub fn yearly_distribution_by_min_duration(
    records: &[TrvRecord],
    min_hours: i64,
) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for record in records.iter().filter(|r| r.duration_hours() >= min_hours) {
        *counts.entry(record.year()).or_insert(0) += 1;
    }
    counts
}

/// Count of records per raw stop-reason code.
pub fn stop_reason_histogram(records: &[TrvRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.stop_reason.clone()).or_insert(0) += 1;
    }
    counts
}
