use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Literal marker that opens every record header line
pub const HEADER_FLAG: &str = "66666";

/// Number of comma-delimited fields on a header line
pub const HEADER_FIELD_COUNT: usize = 8;

/// Number of comma-delimited fields on a track line
pub const TRACK_FIELD_COUNT: usize = 6;

/// One hourly observation along a residual vortex path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub timestamp: NaiveDateTime,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// 850hPa stream function.
    pub stream_function: f64,
    /// 850hPa relative vorticity.
    pub vorticity: f64,
    /// 850hPa wind speed.
    pub velocity: f64,
}

/// Full lifecycle of one residual vortex: header metadata plus its track.
///
/// Records are built by the parser (or by JSON import, which re-checks the
/// same invariants) and are never mutated afterwards:
/// - `track.len() == record_count`
/// - track timestamps are strictly ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrvRecord {
    /// Always [`HEADER_FLAG`].
    pub flag: String,
    /// International storm identifier.
    pub intl_code: String,
    /// Declared number of track lines following the header.
    pub record_count: usize,
    /// Sequence index of the originating tropical cyclone.
    pub sequence_num: i64,
    /// China-specific storm identifier.
    pub china_code: String,
    /// Categorical code describing why tracking ended.
    pub stop_reason: String,
    /// Storm name, possibly empty.
    pub name: String,
    pub start_date: NaiveDate,
    pub track: Vec<TrackPoint>,
}

impl TrvRecord {
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    pub fn first_point(&self) -> Option<&TrackPoint> {
        self.track.first()
    }

    pub fn last_point(&self) -> Option<&TrackPoint> {
        self.track.last()
    }

    /// Time between first and last track point. Zero for tracks with fewer
    /// than two points.
    pub fn duration(&self) -> TimeDelta {
        match (self.track.first(), self.track.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => TimeDelta::zero(),
        }
    }

    pub fn duration_hours(&self) -> i64 {
        self.duration().num_hours()
    }

    /// Case-insensitive full match against the storm name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Label used in logs and error messages, e.g. `ALPHA (2024-07-01)`.
    pub fn display_label(&self) -> String {
        let name = if self.name.is_empty() {
            "(unnamed)"
        } else {
            self.name.as_str()
        };
        format!("{} ({})", name, self.start_date)
    }
}
