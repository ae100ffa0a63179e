use chrono::Timelike;
use std::io::{Read, Write};
use trv_types::{HEADER_FLAG, TrvRecord};

use crate::collection::TrvCollection;
use crate::error::{Error, Result};

/// Write records as one JSON array.
pub fn write_json<'a, W, I>(writer: W, records: I, pretty: bool) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TrvRecord>,
{
    let records: Vec<&TrvRecord> = records.into_iter().collect();
    if pretty {
        serde_json::to_writer_pretty(writer, &records)?;
    } else {
        serde_json::to_writer(writer, &records)?;
    }
    Ok(())
}

pub fn to_json_string<'a, I>(records: I, pretty: bool) -> Result<String>
where
    I: IntoIterator<Item = &'a TrvRecord>,
{
    let mut buffer = Vec::new();
    write_json(&mut buffer, records, pretty)?;
    String::from_utf8(buffer).map_err(|e| Error::Invalid(e.to_string()))
}

/// Read a JSON export back into a collection.
///
/// Every record is re-checked against the invariants the parser enforces.
pub fn read_json<R: Read>(reader: R) -> Result<TrvCollection> {
    let records: Vec<TrvRecord> = serde_json::from_reader(reader)?;
    into_collection(records)
}

pub fn from_json_str(text: &str) -> Result<TrvCollection> {
    let records: Vec<TrvRecord> = serde_json::from_str(text)?;
    into_collection(records)
}

fn into_collection(records: Vec<TrvRecord>) -> Result<TrvCollection> {
    for (index, record) in records.iter().enumerate() {
        validate_record(record).map_err(|reason| {
            Error::Invalid(format!(
                "record {} ({}): {}",
                index,
                record.display_label(),
                reason
            ))
        })?;
    }
    log::debug!("Imported {} records from JSON", records.len());
    Ok(TrvCollection::new(records))
}

/// Check flag, declared count, hourly resolution and timestamp ordering of
/// one record.
pub fn validate_record(record: &TrvRecord) -> std::result::Result<(), String> {
    if record.flag != HEADER_FLAG {
        return Err(format!(
            "flag must be {:?}, found {:?}",
            HEADER_FLAG, record.flag
        ));
    }
    if record.track.len() != record.record_count {
        return Err(format!(
            "record_count is {} but track has {} points",
            record.record_count,
            record.track.len()
        ));
    }
    if let Some(point) = record
        .track
        .iter()
        .find(|p| p.timestamp.minute() != 0 || p.timestamp.second() != 0)
    {
        return Err(format!(
            "track timestamp {} is not on a whole hour",
            point.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    for pair in record.track.windows(2) {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(format!(
                "track timestamps not strictly ascending at {}",
                pair[1].timestamp.format("%Y-%m-%d %H:%M")
            ));
        }
    }
    Ok(())
}
