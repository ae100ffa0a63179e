// Point queries over a borrowed record slice.
// Iterators are lazy and Clone; an empty result is not an error.

use std::slice;
use trv_types::TrvRecord;

/// Records whose name matches case-insensitively.
#[derive(Debug, Clone)]
pub struct ByName<'a> {
    records: slice::Iter<'a, TrvRecord>,
    name: String,
}

impl<'a> Iterator for ByName<'a> {
    type Item = &'a TrvRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name.as_str();
        self.records.by_ref().find(|record| record.name_matches(name))
    }
}

/// Records whose start date falls in a given year.
#[derive(Debug, Clone)]
pub struct ByYear<'a> {
    records: slice::Iter<'a, TrvRecord>,
    year: i32,
}

impl<'a> Iterator for ByYear<'a> {
    type Item = &'a TrvRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let year = self.year;
        self.records.by_ref().find(|record| record.year() == year)
    }
}

pub fn find_by_name<'a>(records: &'a [TrvRecord], name: &str) -> ByName<'a> {
    ByName {
        records: records.iter(),
        name: name.to_string(),
    }
}

pub fn find_by_year(records: &[TrvRecord], year: i32) -> ByYear<'_> {
    ByYear {
        records: records.iter(),
        year,
    }
}
