//! Line-oriented TRV record parser.
//!
//! Input is a sequence of lines; each header line (first field `66666`)
//! opens a record which collects exactly `record_count` following track
//! lines. Parsing is strict: the first [`FormatError`] aborts the whole
//! parse, since a misaligned record count desynchronizes every later record
//! boundary. Out-of-bounds coordinates never abort; they are returned as
//! [`RangeWarning`]s next to the collection.

mod assembler;
mod classify;
mod fields;

pub use classify::{LineKind, classify};
pub use fields::{parse_date, parse_timestamp};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use trv_types::{FormatError, RangeWarning, SpatialBounds};

use crate::collection::TrvCollection;
use crate::error::Result;
use assembler::Assembler;

/// Encoding of latitude, longitude and velocity in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Values as written: degrees and m/s.
    #[default]
    Degrees,
    /// Raw CMA encoding: 0.1° and 0.1 m/s.
    Tenths,
}

impl Units {
    pub(crate) fn scale(self) -> f64 {
        match self {
            Units::Degrees => 1.0,
            Units::Tenths => 10.0,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Degrees => write!(f, "degrees"),
            Units::Tenths => write!(f, "tenths"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub units: Units,
    pub bounds: SpatialBounds,
}

/// Successfully parsed input.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub collection: TrvCollection,
    pub warnings: Vec<RangeWarning>,
}

/// Parse a sequence of lines.
pub fn parse_lines<I, S>(
    lines: I,
    options: &ParseOptions,
) -> std::result::Result<ParseOutcome, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = Assembler::new(options);
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line = if index == 0 {
            line.strip_prefix('\u{feff}').unwrap_or(line)
        } else {
            line
        };
        assembler.feed(index + 1, line)?;
    }
    assembler.finish()
}

/// Parse in-memory text.
pub fn parse_str(text: &str, options: &ParseOptions) -> std::result::Result<ParseOutcome, FormatError> {
    parse_lines(text.lines(), options)
}

/// Parse from a buffered reader.
pub fn parse_reader<R: BufRead>(reader: R, options: &ParseOptions) -> Result<ParseOutcome> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(parse_lines(lines, options)?)
}

/// Parse a file from disk.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<ParseOutcome> {
    let text = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(parse_str(&text, options)?)
}
