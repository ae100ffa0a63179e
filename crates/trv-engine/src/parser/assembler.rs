use trv_types::{
    Coordinate, FormatError, FormatErrorKind, HEADER_FIELD_COUNT, HEADER_FLAG, RangeWarning,
    TRACK_FIELD_COUNT, TrackPoint, TrvRecord,
};

use super::classify::{LineKind, classify};
use super::fields::{parse_date, parse_integer, parse_number, parse_timestamp};
use super::{ParseOptions, ParseOutcome};
use crate::collection::TrvCollection;

// Upper bound on track capacity reserved up front from a declared count.
const MAX_PREALLOCATED_POINTS: usize = 1024;

/// Header that is still collecting its track lines.
struct OpenRecord {
    record: TrvRecord,
    line: usize,
    raw: String,
}

/// Parser state for a single parse call.
///
/// Lines are fed in order; a record is sealed as soon as it has collected
/// its declared number of track lines.
pub(crate) struct Assembler<'o> {
    options: &'o ParseOptions,
    open: Option<OpenRecord>,
    records: Vec<TrvRecord>,
    warnings: Vec<RangeWarning>,
    lines_seen: usize,
}

impl<'o> Assembler<'o> {
    pub(crate) fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            open: None,
            records: Vec::new(),
            warnings: Vec::new(),
            lines_seen: 0,
        }
    }

    /// Consume one line. `line_no` is 1-based.
    pub(crate) fn feed(&mut self, line_no: usize, raw: &str) -> Result<(), FormatError> {
        self.lines_seen = line_no;
        match classify(raw) {
            LineKind::Blank | LineKind::Comment => Ok(()),
            LineKind::Header(fields) => self.on_header(line_no, raw, &fields),
            LineKind::Track(fields) => self.on_track(line_no, raw, &fields),
        }
    }

    /// Finish the parse, rejecting a record left open at end of input.
    pub(crate) fn finish(self) -> Result<ParseOutcome, FormatError> {
        if let Some(open) = self.open {
            return Err(FormatError::new(
                open.line,
                open.raw,
                FormatErrorKind::IncompleteRecord {
                    name: open.record.display_label(),
                    expected: open.record.record_count,
                    found: open.record.track.len(),
                },
            ));
        }

        log::info!(
            "Parsed {} records from {} lines ({} range warnings)",
            self.records.len(),
            self.lines_seen,
            self.warnings.len()
        );

        Ok(ParseOutcome {
            collection: TrvCollection::new(self.records),
            warnings: self.warnings,
        })
    }

    fn on_header(&mut self, line_no: usize, raw: &str, fields: &[&str]) -> Result<(), FormatError> {
        if let Some(open) = &self.open {
            return Err(FormatError::new(
                line_no,
                raw,
                FormatErrorKind::PrematureTermination {
                    name: open.record.display_label(),
                    expected: open.record.record_count,
                    found: open.record.track.len(),
                },
            ));
        }

        let record = parse_header(fields).map_err(|kind| FormatError::new(line_no, raw, kind))?;

        if record.record_count == 0 {
            self.seal(record);
        } else {
            self.open = Some(OpenRecord {
                record,
                line: line_no,
                raw: raw.to_string(),
            });
        }
        Ok(())
    }

    fn on_track(&mut self, line_no: usize, raw: &str, fields: &[&str]) -> Result<(), FormatError> {
        let options = self.options;
        let Some(open) = self.open.as_mut() else {
            return Err(FormatError::new(
                line_no,
                raw,
                FormatErrorKind::OrphanTrackLine,
            ));
        };

        let point = parse_track(fields, options).map_err(|kind| FormatError::new(line_no, raw, kind))?;

        if let Some(previous) = open.record.track.last() {
            if point.timestamp == previous.timestamp {
                return Err(FormatError::new(
                    line_no,
                    raw,
                    FormatErrorKind::DuplicateTimestamp {
                        timestamp: point.timestamp,
                    },
                ));
            }
            if point.timestamp < previous.timestamp {
                return Err(FormatError::new(
                    line_no,
                    raw,
                    FormatErrorKind::OutOfOrderTimestamp {
                        previous: previous.timestamp,
                        current: point.timestamp,
                    },
                ));
            }
        }

        check_bounds(&point, &open.record, line_no, options, &mut self.warnings);
        open.record.track.push(point);

        if open.record.track.len() == open.record.record_count {
            if let Some(done) = self.open.take() {
                self.seal(done.record);
            }
        }
        Ok(())
    }

    fn seal(&mut self, record: TrvRecord) {
        log::debug!(
            "Sealed record {} with {} track points",
            record.display_label(),
            record.track.len()
        );
        self.records.push(record);
    }
}

fn parse_header(fields: &[&str]) -> Result<TrvRecord, FormatErrorKind> {
    if fields.len() != HEADER_FIELD_COUNT {
        return Err(FormatErrorKind::HeaderFieldCount {
            found: fields.len(),
        });
    }

    let record_count = parse_integer(fields[2]).ok_or_else(|| FormatErrorKind::InvalidInteger {
        field: "record_count",
        value: fields[2].to_string(),
    })?;
    let record_count = usize::try_from(record_count)
        .map_err(|_| FormatErrorKind::NegativeRecordCount {
            value: record_count,
        })?;

    let sequence_num = parse_integer(fields[3]).ok_or_else(|| FormatErrorKind::InvalidInteger {
        field: "sequence_num",
        value: fields[3].to_string(),
    })?;

    let start_date = parse_date(fields[7]).ok_or_else(|| FormatErrorKind::InvalidDate {
        value: fields[7].to_string(),
    })?;

    Ok(TrvRecord {
        flag: HEADER_FLAG.to_string(),
        intl_code: fields[1].to_string(),
        record_count,
        sequence_num,
        china_code: fields[4].to_string(),
        stop_reason: fields[5].to_string(),
        name: fields[6].to_string(),
        start_date,
        track: Vec::with_capacity(record_count.min(MAX_PREALLOCATED_POINTS)),
    })
}

fn parse_track(fields: &[&str], options: &ParseOptions) -> Result<TrackPoint, FormatErrorKind> {
    if fields.len() != TRACK_FIELD_COUNT {
        return Err(FormatErrorKind::TrackFieldCount {
            found: fields.len(),
        });
    }

    let timestamp = parse_timestamp(fields[0]).ok_or_else(|| FormatErrorKind::InvalidTimestamp {
        value: fields[0].to_string(),
    })?;

    let number = |index: usize, field: &'static str| {
        parse_number(fields[index]).ok_or_else(|| FormatErrorKind::InvalidNumber {
            field,
            value: fields[index].to_string(),
        })
    };

    let scale = options.units.scale();
    Ok(TrackPoint {
        timestamp,
        latitude: number(1, "latitude")? / scale,
        longitude: number(2, "longitude")? / scale,
        stream_function: number(3, "stream_function")?,
        vorticity: number(4, "vorticity")?,
        velocity: number(5, "velocity")? / scale,
    })
}

fn check_bounds(
    point: &TrackPoint,
    owner: &TrvRecord,
    line_no: usize,
    options: &ParseOptions,
    warnings: &mut Vec<RangeWarning>,
) {
    let bounds = &options.bounds;
    let mut warn = |coordinate, value, min, max| {
        warnings.push(RangeWarning {
            line: line_no,
            record_name: owner.name.clone(),
            sequence_num: owner.sequence_num,
            timestamp: point.timestamp,
            coordinate,
            value,
            min,
            max,
        });
    };

    if !bounds.contains_latitude(point.latitude) {
        warn(
            Coordinate::Latitude,
            point.latitude,
            bounds.lat_min,
            bounds.lat_max,
        );
    }
    if !bounds.contains_longitude(point.longitude) {
        warn(
            Coordinate::Longitude,
            point.longitude,
            bounds.lon_min,
            bounds.lon_max,
        );
    }
}
