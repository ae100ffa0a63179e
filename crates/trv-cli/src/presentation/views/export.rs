use std::fmt;

use crate::presentation::view_models::{CreateView, ExportViewModel};

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView { data: self })
    }
}

struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} records to {} ({}",
            self.data.exported_records, self.data.output_path, self.data.format
        )?;
        if let Some(layout) = &self.data.layout {
            write!(f, ", {}", layout)?;
        }
        writeln!(f, ")")
    }
}
