// Engine module - Core processing logic (parsing, aggregation, lookup, export)
// This layer sits between the record types and the CLI presentation

pub mod analysis;
pub mod collection;
pub mod error;
pub mod export;
pub mod lookup;
pub mod parser;

pub use analysis::{DatasetSummary, DurationStats, ThresholdDistribution, TrackLengthStats};
pub use collection::TrvCollection;
pub use error::{Error, Result};
pub use export::CsvLayout;
pub use lookup::{ByName, ByYear};
pub use parser::{ParseOptions, ParseOutcome, Units};

use std::io::Write;
use std::path::Path;
use trv_types::{FormatError, TrvRecord};

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Parse TRV text into a collection plus range warnings
pub fn parse(text: &str, options: &ParseOptions) -> std::result::Result<ParseOutcome, FormatError> {
    parser::parse_str(text, options)
}

/// Parse a TRV file from disk
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<ParseOutcome> {
    parser::parse_file(path, options)
}

/// Summarize a collection (counts, durations, distributions)
pub fn summarize(collection: &TrvCollection) -> DatasetSummary {
    analysis::summarize(collection.records())
}

/// Write records as a JSON array
pub fn export_json<'a, W, I>(writer: W, records: I, pretty: bool) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TrvRecord>,
{
    export::write_json(writer, records, pretty)
}

/// Write records as CSV in the chosen layout
pub fn export_csv<'a, W, I>(writer: W, records: I, layout: CsvLayout) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TrvRecord>,
{
    export::write_csv(writer, records, layout)
}

/// Read a JSON export back into a collection
pub fn import_json(text: &str) -> Result<TrvCollection> {
    export::from_json_str(text)
}
