use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RangeWarningViewModel {
    pub line: usize,
    pub record_name: String,
    pub sequence_num: i64,
    pub timestamp: String,
    pub coordinate: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct ValidationViewModel {
    pub source: String,
    pub units: String,
    pub total_records: usize,
    pub total_points: usize,
    pub warnings: Vec<RangeWarningViewModel>,
}
