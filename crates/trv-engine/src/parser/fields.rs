// Scalar field decoders shared by header and track lines.
// Each returns None on failure; the assembler attaches line context.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

const FULL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a start date: `YYYY-MM-DD` or compact `YYYYMMDD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Some(date) = parse_compact_date(value) {
        return Some(date);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse an hourly timestamp.
///
/// Accepts `YYYYMMDDHH`, `YYYY-MM-DD HH`, `YYYY-MM-DD HH:MM[:SS]` and the
/// `T`-separated variants. Minutes and seconds must be zero.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    let parsed = if value.len() == 10 && all_digits(value) {
        let date = parse_compact_date(&value[..8])?;
        let hour: u32 = value[8..].parse().ok()?;
        date.and_hms_opt(hour, 0, 0)
    } else if let Some(ts) = FULL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        Some(ts)
    } else {
        let (date, hour) = value.split_once(|c| c == ' ' || c == 'T')?;
        let hour = hour.trim();
        if hour.is_empty() || hour.len() > 2 || !all_digits(hour) {
            return None;
        }
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        date.and_hms_opt(hour.parse().ok()?, 0, 0)
    }?;

    if parsed.minute() != 0 || parsed.second() != 0 {
        return None;
    }
    Some(parsed)
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parse a finite floating-point value. `NaN` and infinities are rejected.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !all_digits(value) {
        return None;
    }
    let year = value[..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn all_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}
