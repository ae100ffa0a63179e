//! Serialization of parsed records.
//!
//! JSON keeps the full record (scalars plus nested track) and can be read
//! back with [`read_json`]. CSV is write-only and comes in two layouts: one
//! row per track point with the owning record repeated, or one row per
//! record without track detail.

mod csv;
mod json;

pub use self::csv::{FLATTENED_COLUMNS, HEADER_ONLY_COLUMNS, write_csv};
pub use self::json::{from_json_str, read_json, to_json_string, validate_record, write_json};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row layout for CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CsvLayout {
    /// One row per track point, record fields repeated on every row.
    #[default]
    Flattened,
    /// One row per record, no track detail.
    HeaderOnly,
}

impl fmt::Display for CsvLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvLayout::Flattened => write!(f, "flattened"),
            CsvLayout::HeaderOnly => write!(f, "header-only"),
        }
    }
}
