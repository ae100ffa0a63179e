use serde::{Deserialize, Serialize};
use trv_types::TrvRecord;

/// Spread of per-record durations (last minus first track timestamp).
///
/// Records with fewer than two points contribute a zero duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationStats {
    pub count: usize,
    pub min_hours: i64,
    pub max_hours: i64,
    pub mean_hours: f64,
    pub median_hours: f64,
}

/// Spread of track lengths in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLengthStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub total_points: usize,
}

/// Duration statistics, or `None` for an empty record set.
pub fn duration_stats(records: &[TrvRecord]) -> Option<DurationStats> {
    let mut hours: Vec<i64> = records.iter().map(TrvRecord::duration_hours).collect();
    if hours.is_empty() {
        return None;
    }
    hours.sort_unstable();

    let count = hours.len();
    let total: i64 = hours.iter().sum();
    let mid = count / 2;
    let median_hours = if count % 2 == 0 {
        (hours[mid - 1] + hours[mid]) as f64 / 2.0
    } else {
        hours[mid] as f64
    };

    Some(DurationStats {
        count,
        min_hours: hours[0],
        max_hours: hours[count - 1],
        mean_hours: total as f64 / count as f64,
        median_hours,
    })
}

/// Track length statistics, or `None` for an empty record set.
pub fn track_length_stats(records: &[TrvRecord]) -> Option<TrackLengthStats> {
    let lengths = records.iter().map(|r| r.track.len());
    let min = lengths.clone().min()?;
    let max = lengths.clone().max()?;
    let total_points: usize = lengths.sum();

    Some(TrackLengthStats {
        min,
        max,
        mean: total_points as f64 / records.len() as f64,
        total_points,
    })
}
