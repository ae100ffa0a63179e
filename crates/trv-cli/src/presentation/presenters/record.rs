use std::path::Path;
use trv_engine::analysis::DURATION_THRESHOLDS_HOURS;
use trv_types::{TrackPoint, TrvRecord, stop_reason_label};

use crate::presentation::formatters::{TIMESTAMP_FORMAT, format_source};
use crate::presentation::view_models::{
    FilterSummary, RecordDetailViewModel, RecordListViewModel, RecordSummaryViewModel,
    ThresholdFlag, TrackPointViewModel,
};

const HEAD_POINTS: usize = 3;

pub fn present_record_list<'a, I>(
    source: &Path,
    name: Option<&str>,
    year: Option<i32>,
    matches: I,
) -> RecordListViewModel
where
    I: IntoIterator<Item = (usize, &'a TrvRecord)>,
{
    RecordListViewModel {
        source: format_source(source),
        filter: FilterSummary {
            name: name.map(str::to_string),
            year,
        },
        records: matches
            .into_iter()
            .map(|(index, record)| present_record_summary(index, record))
            .collect(),
    }
}

pub fn present_record_detail(
    index: usize,
    total_records: usize,
    record: &TrvRecord,
) -> RecordDetailViewModel {
    let duration_hours = record.duration_hours();
    let head: Vec<TrackPointViewModel> = record
        .track
        .iter()
        .take(HEAD_POINTS)
        .map(present_point)
        .collect();

    let (last, omitted) = if record.track.len() > HEAD_POINTS {
        (
            record.last_point().map(present_point),
            record.track.len() - HEAD_POINTS - 1,
        )
    } else {
        (None, 0)
    };

    RecordDetailViewModel {
        total_records,
        record: present_record_summary(index, record),
        flag: record.flag.clone(),
        record_count: record.record_count,
        thresholds: DURATION_THRESHOLDS_HOURS
            .iter()
            .map(|&min_hours| ThresholdFlag {
                min_hours,
                reached: duration_hours >= min_hours,
            })
            .collect(),
        head,
        last,
        omitted,
    }
}

fn present_record_summary(index: usize, record: &TrvRecord) -> RecordSummaryViewModel {
    RecordSummaryViewModel {
        index,
        sequence_num: record.sequence_num,
        name: record.name.clone(),
        intl_code: record.intl_code.clone(),
        china_code: record.china_code.clone(),
        start_date: record.start_date.to_string(),
        points: record.track.len(),
        duration_hours: record.duration_hours(),
        stop_reason: record.stop_reason.clone(),
        stop_reason_label: stop_reason_label(&record.stop_reason).to_string(),
    }
}

fn present_point(point: &TrackPoint) -> TrackPointViewModel {
    TrackPointViewModel {
        timestamp: point.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        latitude: point.latitude,
        longitude: point.longitude,
        stream_function: point.stream_function,
        vorticity: point.vorticity,
        velocity: point.velocity,
    }
}
