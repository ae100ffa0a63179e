use serde::Serialize;
use std::io::Write;
use trv_types::{TrackPoint, TrvRecord};

use super::CsvLayout;
use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const FLATTENED_COLUMNS: [&str; 14] = [
    "flag",
    "intl_code",
    "record_count",
    "sequence_num",
    "china_code",
    "stop_reason",
    "name",
    "start_date",
    "timestamp",
    "latitude",
    "longitude",
    "stream_function",
    "vorticity",
    "velocity",
];

pub const HEADER_ONLY_COLUMNS: [&str; 9] = [
    "flag",
    "intl_code",
    "record_count",
    "sequence_num",
    "china_code",
    "stop_reason",
    "name",
    "start_date",
    "duration_hours",
];

// Field order must match HEADER_ONLY_COLUMNS.
#[derive(Serialize)]
struct HeaderRow<'a> {
    flag: &'a str,
    intl_code: &'a str,
    record_count: usize,
    sequence_num: i64,
    china_code: &'a str,
    stop_reason: &'a str,
    name: &'a str,
    start_date: String,
    duration_hours: i64,
}

// Field order must match FLATTENED_COLUMNS.
#[derive(Serialize)]
struct PointRow<'a> {
    flag: &'a str,
    intl_code: &'a str,
    record_count: usize,
    sequence_num: i64,
    china_code: &'a str,
    stop_reason: &'a str,
    name: &'a str,
    start_date: String,
    timestamp: String,
    latitude: String,
    longitude: String,
    stream_function: String,
    vorticity: String,
    velocity: String,
}

impl<'a> PointRow<'a> {
    fn new(record: &'a TrvRecord, point: &TrackPoint) -> Self {
        Self {
            flag: &record.flag,
            intl_code: &record.intl_code,
            record_count: record.record_count,
            sequence_num: record.sequence_num,
            china_code: &record.china_code,
            stop_reason: &record.stop_reason,
            name: &record.name,
            start_date: record.start_date.format(DATE_FORMAT).to_string(),
            timestamp: point.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            latitude: format_float(point.latitude),
            longitude: format_float(point.longitude),
            stream_function: format_float(point.stream_function),
            vorticity: format_float(point.vorticity),
            velocity: format_float(point.velocity),
        }
    }
}

/// Write records as CSV in the chosen layout. The column header row is
/// always written, even for an empty record set.
pub fn write_csv<'a, W, I>(writer: W, records: I, layout: CsvLayout) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TrvRecord>,
{
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    match layout {
        CsvLayout::Flattened => {
            csv_writer.write_record(FLATTENED_COLUMNS)?;
            for record in records {
                for point in &record.track {
                    csv_writer.serialize(PointRow::new(record, point))?;
                }
            }
        }
        CsvLayout::HeaderOnly => {
            csv_writer.write_record(HEADER_ONLY_COLUMNS)?;
            for record in records {
                csv_writer.serialize(HeaderRow {
                    flag: &record.flag,
                    intl_code: &record.intl_code,
                    record_count: record.record_count,
                    sequence_num: record.sequence_num,
                    china_code: &record.china_code,
                    stop_reason: &record.stop_reason,
                    name: &record.name,
                    start_date: record.start_date.format(DATE_FORMAT).to_string(),
                    duration_hours: record.duration_hours(),
                })?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}

// Shortest representation that parses back to the same value.
fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseOptions, parse_str};

    const SAMPLE: &str = "\
66666,WP012024,2,1,CN001,landfall,ALPHA,2024-07-01
2024-07-01 00,20.0,120.0,1.5,0.002,15.0
2024-07-01 01,20.2,120.3,1.4,0.0019,14.0
66666,WP022024,0,2,CN002,0,BRAVO JR,2024-08-01
";

    fn render(layout: CsvLayout) -> String {
        let collection = parse_str(SAMPLE, &ParseOptions::default())
            .unwrap()
            .collection;
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &collection, layout).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_flattened_layout() {
        insta::assert_snapshot!(render(CsvLayout::Flattened), @r"
        flag,intl_code,record_count,sequence_num,china_code,stop_reason,name,start_date,timestamp,latitude,longitude,stream_function,vorticity,velocity
        66666,WP012024,2,1,CN001,landfall,ALPHA,2024-07-01,2024-07-01 00:00,20.0,120.0,1.5,0.002,15.0
        66666,WP012024,2,1,CN001,landfall,ALPHA,2024-07-01,2024-07-01 01:00,20.2,120.3,1.4,0.0019,14.0
        ");
    }

    #[test]
    fn test_header_only_layout() {
        insta::assert_snapshot!(render(CsvLayout::HeaderOnly), @r"
        flag,intl_code,record_count,sequence_num,china_code,stop_reason,name,start_date,duration_hours
        66666,WP012024,2,1,CN001,landfall,ALPHA,2024-07-01,1
        66666,WP022024,0,2,CN002,0,BRAVO JR,2024-08-01,0
        ");
    }

    #[test]
    fn test_empty_export_writes_column_header() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, Vec::<&TrvRecord>::new(), CsvLayout::HeaderOnly).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            format!("{}\n", HEADER_ONLY_COLUMNS.join(","))
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let collection = parse_str(
            "66666,WP1,0,1,CN1,0,ALPHA,2024-07-01",
            &ParseOptions::default(),
        )
        .unwrap()
        .collection;
        let mut record = collection.records()[0].clone();
        record.name = "ALPHA, II".to_string();

        let mut buffer = Vec::new();
        write_csv(&mut buffer, [&record], CsvLayout::HeaderOnly).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"ALPHA, II\""));
    }
}
