pub mod export;
pub mod record;
pub mod stats;
pub mod validate;

pub use export::present_export;
pub use record::{present_record_detail, present_record_list};
pub use stats::present_stats;
pub use validate::present_validation;
