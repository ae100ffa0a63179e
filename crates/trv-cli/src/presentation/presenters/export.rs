use std::path::Path;
use trv_engine::CsvLayout;

use crate::presentation::formatters::format_source;
use crate::presentation::view_models::ExportViewModel;
use crate::types::ExportFormat;

pub fn present_export(
    exported_records: usize,
    format: ExportFormat,
    layout: Option<CsvLayout>,
    output_path: &Path,
) -> ExportViewModel {
    ExportViewModel {
        exported_records,
        format: format.to_string(),
        layout: layout.map(|l| l.to_string()),
        output_path: format_source(output_path),
    }
}
