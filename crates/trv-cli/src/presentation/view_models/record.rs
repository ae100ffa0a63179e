use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecordSummaryViewModel {
    /// 0-based position in the source file.
    pub index: usize,
    pub sequence_num: i64,
    pub name: String,
    pub intl_code: String,
    pub china_code: String,
    pub start_date: String,
    pub points: usize,
    pub duration_hours: i64,
    pub stop_reason: String,
    pub stop_reason_label: String,
}

#[derive(Debug, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RecordListViewModel {
    pub source: String,
    pub filter: FilterSummary,
    pub records: Vec<RecordSummaryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TrackPointViewModel {
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub stream_function: f64,
    pub vorticity: f64,
    pub velocity: f64,
}

#[derive(Debug, Serialize)]
pub struct ThresholdFlag {
    pub min_hours: i64,
    pub reached: bool,
}

#[derive(Debug, Serialize)]
pub struct RecordDetailViewModel {
    pub total_records: usize,
    pub record: RecordSummaryViewModel,
    pub flag: String,
    pub record_count: usize,
    pub thresholds: Vec<ThresholdFlag>,
    /// Leading track points.
    pub head: Vec<TrackPointViewModel>,
    /// Final track point when not already part of `head`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<TrackPointViewModel>,
    /// Points between `head` and `last` that are not shown.
    pub omitted: usize,
}
