use anyhow::Result;
use std::path::{Path, PathBuf};
use trv_engine::{CsvLayout, ParseOptions};
use trv_types::TrvRecord;

use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::services::writer;
use crate::types::{ExportFormat, OutputFormat};

pub struct ExportRequest {
    pub to: ExportFormat,
    pub layout: CsvLayout,
    pub pretty_json: bool,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub year: Option<i32>,
}

pub fn handle(
    file: &Path,
    request: ExportRequest,
    options: &ParseOptions,
    format: OutputFormat,
) -> Result<()> {
    let outcome = super::load(file, options)?;
    let records: Vec<&TrvRecord> = super::select(
        &outcome.collection,
        request.name.as_deref(),
        request.year,
    )
    .into_iter()
    .map(|(_, record)| record)
    .collect();

    let mut out = writer::open_output(request.output.as_deref())?;
    writer::write_records(
        &mut *out,
        &records,
        request.to,
        request.layout,
        request.pretty_json,
    )?;
    drop(out);

    // Data went to stdout; nothing else may be printed there.
    let Some(output_path) = request.output else {
        log::info!("Exported {} records to stdout", records.len());
        return Ok(());
    };

    let layout = match request.to {
        ExportFormat::Csv => Some(request.layout),
        ExportFormat::Json => None,
    };
    let vm = presenters::present_export(records.len(), request.to, layout, &output_path);
    ConsoleRenderer::new(format).render(
        CommandResultViewModel::new(vm).with_badge(StatusBadge::success("Export complete")),
    )
}
