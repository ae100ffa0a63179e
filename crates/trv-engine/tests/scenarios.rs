use std::collections::BTreeMap;
use trv_engine::{CsvLayout, ParseOptions, TrvCollection};
use trv_testing::fixtures::{ALPHA, INCOMPLETE, TrackFileBuilder};
use trv_types::FormatErrorKind;

fn parse(text: &str) -> TrvCollection {
    trv_engine::parse(text, &ParseOptions::default())
        .expect("Failed to parse")
        .collection
}

#[test]
fn test_single_record_one_hour() {
    let collection = parse(ALPHA);
    assert_eq!(collection.len(), 1);

    let record = &collection.records()[0];
    assert_eq!(record.name, "ALPHA");
    assert_eq!(record.track.len(), 2);
    assert_eq!(record.duration_hours(), 1);
}

#[test]
fn test_truncated_record_is_rejected() {
    let err = trv_engine::parse(INCOMPLETE, &ParseOptions::default()).unwrap_err();
    assert_eq!(err.line, 1);
    assert!(matches!(
        err.kind,
        FormatErrorKind::IncompleteRecord {
            expected: 3,
            found: 2,
            ..
        }
    ));
}

#[test]
fn test_yearly_distribution_over_built_file() {
    let text = TrackFileBuilder::new()
        .record("A", "1999-07-01", "0", &[0])
        .record("B", "1999-09-12", "1", &[0, 12])
        .record("C", "2001-06-20", "2", &[])
        .build();

    assert_eq!(
        parse(&text).yearly_distribution(),
        BTreeMap::from([(1999, 2), (2001, 1)])
    );
}

#[test]
fn test_parse_is_idempotent() {
    let text = TrackFileBuilder::new()
        .record("A", "2003-08-01", "0", &[0, 6, 12])
        .line("# trailing comment")
        .record("B", "2003-09-01", "3", &[3])
        .build();

    assert_eq!(parse(&text), parse(&text));
}

#[test]
fn test_lookup_is_complete() {
    let text = TrackFileBuilder::new()
        .record("Nari", "2001-09-06", "0", &[0])
        .record("Utor", "2001-07-05", "1", &[0, 1])
        .record("NARI", "2007-09-13", "3", &[])
        .build();
    let collection = parse(&text);

    let by_name: Vec<_> = collection
        .find_by_name("nari")
        .map(|r| r.sequence_num)
        .collect();
    let expected: Vec<_> = collection
        .iter()
        .filter(|r| r.name_matches("nari"))
        .map(|r| r.sequence_num)
        .collect();
    assert_eq!(by_name, expected);
    assert_eq!(by_name, vec![1, 3]);
}

#[test]
fn test_export_formats_from_one_collection() {
    let collection = parse(ALPHA);

    let mut json = Vec::new();
    trv_engine::export_json(&mut json, &collection, true).unwrap();
    let restored = trv_engine::import_json(std::str::from_utf8(&json).unwrap()).unwrap();
    assert_eq!(restored, collection);

    let mut csv = Vec::new();
    trv_engine::export_csv(&mut csv, &collection, CsvLayout::Flattened).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    // Column header plus one row per track point.
    assert_eq!(csv.lines().count(), 3);
}
