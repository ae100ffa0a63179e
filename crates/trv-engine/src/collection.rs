use std::collections::BTreeMap;
use trv_types::TrvRecord;

use crate::analysis::{self, DatasetSummary, DurationStats};
use crate::lookup::{self, ByName, ByYear};

/// Immutable, ordered set of parsed records.
///
/// Built once by the parser or by JSON import; every query borrows it.
/// Order follows the source file. Two records with equal fields are still
/// two records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrvCollection {
    records: Vec<TrvRecord>,
}

impl TrvCollection {
    pub(crate) fn new(records: Vec<TrvRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TrvRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrvRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TrvRecord> {
        self.records.get(index)
    }

    /// Position of a record borrowed from this collection. Equal records
    /// elsewhere in memory do not match.
    pub fn position_of(&self, record: &TrvRecord) -> Option<usize> {
        self.records.iter().position(|r| std::ptr::eq(r, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.records.iter().map(|r| r.track.len()).sum()
    }

    pub fn find_by_name(&self, name: &str) -> ByName<'_> {
        lookup::find_by_name(&self.records, name)
    }

    pub fn find_by_year(&self, year: i32) -> ByYear<'_> {
        lookup::find_by_year(&self.records, year)
    }

    pub fn yearly_distribution(&self) -> BTreeMap<i32, usize> {
        analysis::yearly_distribution(&self.records)
    }

    pub fn duration_stats(&self) -> Option<DurationStats> {
        analysis::duration_stats(&self.records)
    }

    pub fn stop_reason_histogram(&self) -> BTreeMap<String, usize> {
        analysis::stop_reason_histogram(&self.records)
    }

    pub fn summarize(&self) -> DatasetSummary {
        analysis::summarize(&self.records)
    }
}

impl<'a> IntoIterator for &'a TrvCollection {
    type Item = &'a TrvRecord;
    type IntoIter = std::slice::Iter<'a, TrvRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
