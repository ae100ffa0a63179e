use std::path::Path;
use trv_engine::{ParseOutcome, Units};
use trv_types::RangeWarning;

use crate::presentation::formatters::{TIMESTAMP_FORMAT, format_source};
use crate::presentation::view_models::{RangeWarningViewModel, ValidationViewModel};

pub fn present_validation(source: &Path, units: Units, outcome: &ParseOutcome) -> ValidationViewModel {
    ValidationViewModel {
        source: format_source(source),
        units: units.to_string(),
        total_records: outcome.collection.len(),
        total_points: outcome.collection.total_points(),
        warnings: outcome.warnings.iter().map(present_warning).collect(),
    }
}

fn present_warning(warning: &RangeWarning) -> RangeWarningViewModel {
    RangeWarningViewModel {
        line: warning.line,
        record_name: warning.record_name.clone(),
        sequence_num: warning.sequence_num,
        timestamp: warning.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        coordinate: warning.coordinate.to_string(),
        value: warning.value,
        min: warning.min,
        max: warning.max,
    }
}
