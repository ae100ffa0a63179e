use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub exported_records: usize,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub output_path: String,
}
