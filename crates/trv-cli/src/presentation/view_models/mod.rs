pub mod common;
pub mod export;
pub mod record;
pub mod result;
pub mod stats;
pub mod validate;

pub use common::{StatusBadge, StatusLevel};
pub use export::ExportViewModel;
pub use record::{
    FilterSummary, RecordDetailViewModel, RecordListViewModel, RecordSummaryViewModel,
    ThresholdFlag, TrackPointViewModel,
};
pub use result::CommandResultViewModel;
pub use stats::{
    DurationViewModel, StatsViewModel, StopReasonRow, TrackLengthViewModel, YearRange, YearRow,
};
pub use validate::{RangeWarningViewModel, ValidationViewModel};

use std::fmt;

/// Plain-text rendering of a view model.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
