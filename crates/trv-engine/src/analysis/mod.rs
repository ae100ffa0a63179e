// Analysis module - Aggregate statistics over an immutable record set
// Every function is pure and borrows the records

pub mod distribution;
pub mod duration;

pub use distribution::{
    DURATION_THRESHOLDS_HOURS, ThresholdDistribution, stop_reason_histogram,
    yearly_distribution, yearly_distribution_by_min_duration,
};
pub use duration::{DurationStats, TrackLengthStats, duration_stats, track_length_stats};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trv_types::TrvRecord;

/// Dataset-wide overview combining every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub total_points: usize,
    pub track_length: Option<TrackLengthStats>,
    pub duration: Option<DurationStats>,
    /// Sorted ascending.
    pub years_covered: Vec<i32>,
    pub yearly_distribution: BTreeMap<i32, usize>,
    /// One entry per threshold in [`DURATION_THRESHOLDS_HOURS`], zero-filled
    /// for every year in `yearly_distribution`.
    pub yearly_by_min_duration: Vec<ThresholdDistribution>,
    pub stop_reasons: BTreeMap<String, usize>,
}

pub fn summarize(records: &[TrvRecord]) -> DatasetSummary {
    let yearly = yearly_distribution(records);
    let years_covered = yearly.keys().copied().collect();

    let yearly_by_min_duration = DURATION_THRESHOLDS_HOURS
        .iter()
        .map(|&min_hours| {
            let mut counts = yearly_distribution_by_min_duration(records, min_hours);
            for year in yearly.keys() {
                counts.entry(*year).or_insert(0);
            }
            ThresholdDistribution { min_hours, counts }
        })
        .collect();

    DatasetSummary {
        total_records: records.len(),
        total_points: records.iter().map(|r| r.track.len()).sum(),
        track_length: track_length_stats(records),
        duration: duration_stats(records),
        years_covered,
        yearly_distribution: yearly,
        yearly_by_min_duration,
        stop_reasons: stop_reason_histogram(records),
    }
}
