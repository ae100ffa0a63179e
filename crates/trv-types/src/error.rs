use chrono::NaiveDateTime;
use std::fmt;

/// What went wrong on a rejected input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Header line does not have exactly 8 fields.
    HeaderFieldCount { found: usize },

    /// Track line does not have exactly 6 fields.
    TrackFieldCount { found: usize },

    /// Integer header field could not be parsed.
    InvalidInteger { field: &'static str, value: String },

    /// Declared record count is negative.
    NegativeRecordCount { value: i64 },

    /// Floating-point track field could not be parsed or is not finite.
    InvalidNumber { field: &'static str, value: String },

    /// Header start date could not be parsed.
    InvalidDate { value: String },

    /// Track timestamp could not be parsed.
    InvalidTimestamp { value: String },

    /// Track line with no open record to belong to.
    OrphanTrackLine,

    /// Input ended before the open record received all its track lines.
    IncompleteRecord {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A new header appeared before the open record was complete.
    PrematureTermination {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Track timestamp equals the previous one.
    DuplicateTimestamp { timestamp: NaiveDateTime },

    /// Track timestamp precedes the previous one.
    OutOfOrderTimestamp {
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorKind::HeaderFieldCount { found } => {
                write!(f, "header line must have 8 fields, found {}", found)
            }
            FormatErrorKind::TrackFieldCount { found } => {
                write!(f, "track line must have 6 fields, found {}", found)
            }
            FormatErrorKind::InvalidInteger { field, value } => {
                write!(f, "{} is not an integer: {:?}", field, value)
            }
            FormatErrorKind::NegativeRecordCount { value } => {
                write!(f, "record_count must not be negative, found {}", value)
            }
            FormatErrorKind::InvalidNumber { field, value } => {
                write!(f, "{} is not a finite number: {:?}", field, value)
            }
            FormatErrorKind::InvalidDate { value } => {
                write!(f, "start_date is not a valid date: {:?}", value)
            }
            FormatErrorKind::InvalidTimestamp { value } => {
                write!(f, "timestamp is not a valid date-hour: {:?}", value)
            }
            FormatErrorKind::OrphanTrackLine => {
                write!(f, "track line does not belong to any open record")
            }
            FormatErrorKind::IncompleteRecord {
                name,
                expected,
                found,
            } => write!(
                f,
                "incomplete record {}: expected {} track lines, input ended after {}",
                name, expected, found
            ),
            FormatErrorKind::PrematureTermination {
                name,
                expected,
                found,
            } => write!(
                f,
                "record {} terminated early: expected {} track lines, found {} before next header",
                name, expected, found
            ),
            FormatErrorKind::DuplicateTimestamp { timestamp } => write!(
                f,
                "duplicate timestamp {}",
                timestamp.format("%Y-%m-%d %H:%M")
            ),
            FormatErrorKind::OutOfOrderTimestamp { previous, current } => write!(
                f,
                "timestamp {} precedes previous point {}",
                current.format("%Y-%m-%d %H:%M"),
                previous.format("%Y-%m-%d %H:%M")
            ),
        }
    }
}

/// A rejected input line. Any format error aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// 1-based line number.
    pub line: usize,
    /// Offending line as read, before trimming.
    pub raw: String,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, raw: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            line,
            raw: raw.into(),
            kind,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} (line: {:?})",
            self.line,
            self.kind,
            crate::truncate(&self.raw, 120)
        )
    }
}

impl std::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line_and_raw_text() {
        let err = FormatError::new(
            7,
            "66666,WP01",
            FormatErrorKind::HeaderFieldCount { found: 2 },
        );
        assert_eq!(
            err.to_string(),
            "line 7: header line must have 8 fields, found 2 (line: \"66666,WP01\")"
        );
    }

    #[test]
    fn test_incomplete_record_message() {
        let kind = FormatErrorKind::IncompleteRecord {
            name: "ALPHA (2024-07-01)".to_string(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            kind.to_string(),
            "incomplete record ALPHA (2024-07-01): expected 3 track lines, input ended after 2"
        );
    }
}
