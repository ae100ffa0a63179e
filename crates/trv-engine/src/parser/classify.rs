use trv_types::HEADER_FLAG;

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Line whose first non-space character is `#`.
    Comment,
    /// Header line, split into trimmed fields.
    Header(Vec<&'a str>),
    /// Track-data line, split into trimmed fields.
    Track(Vec<&'a str>),
}

/// Classify a raw input line.
///
/// A line is a header iff its first comma-delimited field is exactly the
/// header flag. Field arity is not checked here.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('#') {
        return LineKind::Comment;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields[0] == HEADER_FLAG {
        LineKind::Header(fields)
    } else {
        LineKind::Track(fields)
    }
}
