pub mod bounds;
pub mod error;
pub mod record;
pub mod stop_reason;
mod util;

pub use bounds::{Coordinate, RangeWarning, SpatialBounds};
pub use error::{FormatError, FormatErrorKind};
pub use record::{HEADER_FIELD_COUNT, HEADER_FLAG, TRACK_FIELD_COUNT, TrackPoint, TrvRecord};
pub use stop_reason::stop_reason_label;
pub use util::*;
