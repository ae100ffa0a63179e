use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsViewModel {
    pub source: String,
    pub total_records: usize,
    pub total_points: usize,
    pub years: Option<YearRange>,
    pub track_length: Option<TrackLengthViewModel>,
    pub duration: Option<DurationViewModel>,
    /// Duration thresholds (hours) used for the `at_least` columns.
    pub thresholds_hours: Vec<i64>,
    pub yearly: Vec<YearRow>,
    pub stop_reasons: Vec<StopReasonRow>,
}

#[derive(Debug, Serialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TrackLengthViewModel {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

#[derive(Debug, Serialize)]
pub struct DurationViewModel {
    pub min_hours: i64,
    pub max_hours: i64,
    pub mean_hours: f64,
    pub median_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct YearRow {
    pub year: i32,
    pub records: usize,
    /// Parallel to `thresholds_hours`.
    pub at_least: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct StopReasonRow {
    pub code: String,
    pub label: String,
    pub count: usize,
}
