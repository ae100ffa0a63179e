use std::fmt;

use crate::presentation::formatters::format_hours;
use crate::presentation::view_models::{CreateView, StatsViewModel};

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatsView { data: self })
    }
}

struct StatsView<'a> {
    data: &'a StatsViewModel,
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "Source: {}", data.source)?;
        writeln!(
            f,
            "Records: {} ({} track points)",
            data.total_records, data.total_points
        )?;

        let Some(years) = &data.years else {
            writeln!(f, "No records.")?;
            return Ok(());
        };
        writeln!(
            f,
            "Years: {}-{} ({} distinct)",
            years.first, years.last, years.count
        )?;

        if let Some(length) = &data.track_length {
            writeln!(
                f,
                "Track length: min {}, max {}, mean {:.1} points",
                length.min, length.max, length.mean
            )?;
        }
        if let Some(duration) = &data.duration {
            writeln!(
                f,
                "Duration: min {}, max {}, mean {:.1}h, median {:.1}h",
                format_hours(duration.min_hours),
                format_hours(duration.max_hours),
                duration.mean_hours,
                duration.median_hours
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Records per year:")?;
        write!(f, "{:<6} {:>7}", "YEAR", "RECORDS")?;
        for hours in &data.thresholds_hours {
            write!(f, " {:>6}", format!(">={}h", hours))?;
        }
        writeln!(f)?;
        for row in &data.yearly {
            write!(f, "{:<6} {:>7}", row.year, row.records)?;
            for count in &row.at_least {
                write!(f, " {:>6}", count)?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Stop reasons:")?;
        writeln!(f, "{:<6} {:>7}  LABEL", "CODE", "RECORDS")?;
        for row in &data.stop_reasons {
            writeln!(f, "{:<6} {:>7}  {}", row.code, row.count, row.label)?;
        }

        Ok(())
    }
}
