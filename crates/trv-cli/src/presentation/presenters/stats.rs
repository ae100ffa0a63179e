use std::path::Path;
use trv_engine::DatasetSummary;
use trv_types::stop_reason_label;

use crate::presentation::formatters::format_source;
use crate::presentation::view_models::{
    DurationViewModel, StatsViewModel, StopReasonRow, TrackLengthViewModel, YearRange, YearRow,
};

pub fn present_stats(source: &Path, summary: &DatasetSummary) -> StatsViewModel {
    let years = match (
        summary.years_covered.first(),
        summary.years_covered.last(),
    ) {
        (Some(&first), Some(&last)) => Some(YearRange {
            first,
            last,
            count: summary.years_covered.len(),
        }),
        _ => None,
    };

    let yearly = summary
        .yearly_distribution
        .iter()
        .map(|(&year, &records)| YearRow {
            year,
            records,
            at_least: summary
                .yearly_by_min_duration
                .iter()
                .map(|t| t.counts.get(&year).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    let stop_reasons = summary
        .stop_reasons
        .iter()
        .map(|(code, &count)| StopReasonRow {
            code: code.clone(),
            label: stop_reason_label(code).to_string(),
            count,
        })
        .collect();

    StatsViewModel {
        source: format_source(source),
        total_records: summary.total_records,
        total_points: summary.total_points,
        years,
        track_length: summary.track_length.as_ref().map(|t| TrackLengthViewModel {
            min: t.min,
            max: t.max,
            mean: t.mean,
        }),
        duration: summary.duration.as_ref().map(|d| DurationViewModel {
            min_hours: d.min_hours,
            max_hours: d.max_hours,
            mean_hours: d.mean_hours,
            median_hours: d.median_hours,
        }),
        thresholds_hours: summary
            .yearly_by_min_duration
            .iter()
            .map(|t| t.min_hours)
            .collect(),
        yearly,
        stop_reasons,
    }
}
