use std::fmt;

use crate::presentation::formatters::{format_hours, format_name};
use crate::presentation::view_models::{
    CreateView, RecordDetailViewModel, RecordListViewModel, TrackPointViewModel,
};

impl CreateView for RecordListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecordListView { data: self })
    }
}

struct RecordListView<'a> {
    data: &'a RecordListViewModel,
}

impl<'a> fmt::Display for RecordListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.records.is_empty() {
            return writeln!(f, "No records match in {}.", self.data.source);
        }

        writeln!(
            f,
            "{:<6} {:<6} {:<16} {:<11} {:>6} {:>8}  STOP",
            "INDEX", "SEQ", "NAME", "START", "POINTS", "DURATION"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;

        for record in &self.data.records {
            writeln!(
                f,
                "{:<6} {:<6} {:<16} {:<11} {:>6} {:>8}  {} ({})",
                record.index,
                record.sequence_num,
                format_name(&record.name),
                record.start_date,
                record.points,
                format_hours(record.duration_hours),
                record.stop_reason,
                record.stop_reason_label
            )?;
        }

        Ok(())
    }
}

impl CreateView for RecordDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecordDetailView { data: self })
    }
}

struct RecordDetailView<'a> {
    data: &'a RecordDetailViewModel,
}

impl<'a> RecordDetailView<'a> {
    fn point(f: &mut fmt::Formatter<'_>, point: &TrackPointViewModel) -> fmt::Result {
        writeln!(
            f,
            "  {:<17} {:>7} {:>8} {:>10} {:>10} {:>8}",
            point.timestamp,
            point.latitude,
            point.longitude,
            point.stream_function,
            point.vorticity,
            point.velocity
        )
    }
}

impl<'a> fmt::Display for RecordDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let record = &data.record;

        writeln!(
            f,
            "{} (#{}), record {} of {}",
            format_name(&record.name),
            record.sequence_num,
            record.index + 1,
            data.total_records
        )?;
        writeln!(f, "  Flag:          {}", data.flag)?;
        writeln!(f, "  Intl code:     {}", record.intl_code)?;
        writeln!(f, "  China code:    {}", record.china_code)?;
        writeln!(f, "  Start date:    {}", record.start_date)?;
        writeln!(
            f,
            "  Stop reason:   {} ({})",
            record.stop_reason, record.stop_reason_label
        )?;
        writeln!(f, "  Track points:  {}", data.record_count)?;
        write!(f, "  Duration:      {}", format_hours(record.duration_hours))?;
        for threshold in &data.thresholds {
            write!(
                f,
                "  >={}h: {}",
                threshold.min_hours,
                if threshold.reached { "yes" } else { "no" }
            )?;
        }
        writeln!(f)?;

        if data.head.is_empty() {
            writeln!(f)?;
            writeln!(f, "No track points.")?;
            return Ok(());
        }

        writeln!(f)?;
        writeln!(
            f,
            "  {:<17} {:>7} {:>8} {:>10} {:>10} {:>8}",
            "TIMESTAMP", "LAT", "LON", "STREAM", "VORTICITY", "VELOCITY"
        )?;
        for point in &data.head {
            Self::point(f, point)?;
        }
        if data.omitted > 0 {
            writeln!(f, "  ... {} more ...", data.omitted)?;
        }
        if let Some(last) = &data.last {
            Self::point(f, last)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use trv_engine::ParseOptions;
    use trv_testing::fixtures::TrackFileBuilder;
    use trv_types::TrvRecord;

    use crate::presentation::presenters::{present_record_detail, present_record_list};
    use crate::presentation::view_models::CreateView;

    fn collection() -> trv_engine::TrvCollection {
        let text = TrackFileBuilder::new()
            .record("Nari", "2001-09-06", "0", &[0])
            .record("Utor", "2001-07-05", "1", &[0, 1, 2, 3, 13])
            .record("", "2007-09-13", "9", &[])
            .build();
        trv_engine::parse(&text, &ParseOptions::default())
            .unwrap()
            .collection
    }

    #[test]
    fn test_record_list_view() {
        let collection = collection();
        let vm = present_record_list(
            Path::new("storms.csv"),
            None,
            None,
            collection.iter().enumerate(),
        );

        insta::assert_snapshot!(vm.create_view().to_string(), @r"
        INDEX  SEQ    NAME             START       POINTS DURATION  STOP
        --------------------------------------------------------------------------------
        0      1      Nari             2001-09-06       1       0h  0 (No vortex feature)
        1      2      Utor             2001-07-05       5      13h  1 (Vortex merger)
        2      3      (unnamed)        2007-09-13       0       0h  9 (Unknown)
        ");
    }

    #[test]
    fn test_record_list_view_empty() {
        let none: Vec<(usize, &TrvRecord)> = Vec::new();
        let vm = present_record_list(Path::new("storms.csv"), Some("x"), None, none);
        insta::assert_snapshot!(vm.create_view().to_string(), @"No records match in storms.csv.");
    }

    #[test]
    fn test_record_detail_view() {
        let collection = collection();
        let vm = present_record_detail(1, collection.len(), collection.get(1).unwrap());

        insta::assert_snapshot!(vm.create_view().to_string(), @r"
        Utor (#2), record 2 of 3
          Flag:          66666
          Intl code:     WP02
          China code:    CN002
          Start date:    2001-07-05
          Stop reason:   1 (Vortex merger)
          Track points:  5
          Duration:      13h  >=6h: yes  >=12h: yes  >=24h: no

          TIMESTAMP             LAT      LON     STREAM  VORTICITY VELOCITY
          2001-07-05 00:00       20      120          1      0.001       10
          2001-07-05 01:00     20.5    120.5          1      0.001       10
          2001-07-05 02:00       21      121          1      0.001       10
          ... 1 more ...
          2001-07-05 13:00       22      122          1      0.001       10
        ");
    }

    #[test]
    fn test_record_detail_view_without_track() {
        let collection = collection();
        let vm = present_record_detail(2, collection.len(), collection.get(2).unwrap());
        let text = vm.create_view().to_string();
        assert!(text.starts_with("(unnamed) (#3), record 3 of 3"));
        assert!(text.ends_with("No track points.\n"));
    }
}
