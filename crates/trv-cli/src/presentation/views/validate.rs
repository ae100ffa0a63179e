use std::fmt;

use crate::presentation::view_models::{CreateView, ValidationViewModel};

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ValidationView { data: self })
    }
}

struct ValidationView<'a> {
    data: &'a ValidationViewModel,
}

impl<'a> fmt::Display for ValidationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "Source: {} (units: {})", data.source, data.units)?;
        writeln!(
            f,
            "Records: {} ({} track points)",
            data.total_records, data.total_points
        )?;

        if data.warnings.is_empty() {
            return writeln!(f, "All track points within bounds.");
        }

        writeln!(f, "Range warnings: {}", data.warnings.len())?;
        for w in &data.warnings {
            writeln!(
                f,
                "  line {}: {} {} out of range [{}, {}] for {} (#{}) at {}",
                w.line, w.coordinate, w.value, w.min, w.max, w.record_name, w.sequence_num, w.timestamp
            )?;
        }
        Ok(())
    }
}
