use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use trv_engine::CsvLayout;
use trv_types::TrvRecord;

use crate::types::ExportFormat;

/// Buffered sink for export output: the given file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

pub fn write_records(
    writer: &mut dyn Write,
    records: &[&TrvRecord],
    format: ExportFormat,
    layout: CsvLayout,
    pretty_json: bool,
) -> Result<()> {
    match format {
        ExportFormat::Json => {
            trv_engine::export_json(&mut *writer, records.iter().copied(), pretty_json)?;
            // JSON writers leave no trailing newline.
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            trv_engine::export_csv(&mut *writer, records.iter().copied(), layout)?;
        }
    }
    writer.flush()?;
    Ok(())
}
