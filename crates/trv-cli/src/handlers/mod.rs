pub mod export;
pub mod find;
pub mod show;
pub mod stats;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use trv_engine::{ParseOptions, ParseOutcome, TrvCollection};
use trv_types::TrvRecord;

/// Parse `path`, logging each range warning.
pub fn load(path: &Path, options: &ParseOptions) -> Result<ParseOutcome> {
    let outcome = trv_engine::parse_file(path, options)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    for warning in &outcome.warnings {
        log::warn!("{}", warning);
    }
    Ok(outcome)
}

/// Records matching every given filter, paired with their file position.
/// No filter selects everything.
pub fn select<'a>(
    collection: &'a TrvCollection,
    name: Option<&str>,
    year: Option<i32>,
) -> Vec<(usize, &'a TrvRecord)> {
    let matches: Vec<&TrvRecord> = match (name, year) {
        (Some(name), Some(year)) => collection
            .find_by_name(name)
            .filter(|record| record.year() == year)
            .collect(),
        (Some(name), None) => collection.find_by_name(name).collect(),
        (None, Some(year)) => collection.find_by_year(year).collect(),
        (None, None) => collection.iter().collect(),
    };

    matches
        .into_iter()
        .filter_map(|record| collection.position_of(record).map(|i| (i, record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trv_testing::fixtures::TrackFileBuilder;

    #[test]
    fn test_select_combines_filters() {
        let text = TrackFileBuilder::new()
            .record("Nari", "2001-09-06", "0", &[0])
            .record("Utor", "2001-07-05", "1", &[0])
            .record("NARI", "2007-09-13", "3", &[])
            .build();
        let collection = trv_engine::parse(&text, &ParseOptions::default())
            .unwrap()
            .collection;

        let indexes = |name, year| -> Vec<usize> {
            select(&collection, name, year)
                .into_iter()
                .map(|(i, _)| i)
                .collect()
        };

        assert_eq!(indexes(Some("nari"), None), vec![0, 2]);
        assert_eq!(indexes(None, Some(2001)), vec![0, 1]);
        assert_eq!(indexes(Some("nari"), Some(2001)), vec![0]);
        assert_eq!(indexes(None, None), vec![0, 1, 2]);
        assert!(indexes(Some("Haiyan"), None).is_empty());
    }
}
