use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal spatial domain of the dataset (15°N–55°N, 95°E–140°E).
///
/// The bounds describe expected data, not a hard contract: points outside
/// them are reported as [`RangeWarning`]s and kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Default for SpatialBounds {
    fn default() -> Self {
        Self {
            lat_min: 15.0,
            lat_max: 55.0,
            lon_min: 95.0,
            lon_max: 140.0,
        }
    }
}

impl SpatialBounds {
    pub fn contains_latitude(&self, lat: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max
    }

    pub fn contains_longitude(&self, lon: f64) -> bool {
        lon >= self.lon_min && lon <= self.lon_max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Latitude => write!(f, "latitude"),
            Coordinate::Longitude => write!(f, "longitude"),
        }
    }
}

/// Non-fatal notice that a track point lies outside the nominal bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeWarning {
    /// 1-based line number of the track line.
    pub line: usize,
    /// Name of the owning record.
    pub record_name: String,
    /// Sequence number of the owning record.
    pub sequence_num: i64,
    pub timestamp: NaiveDateTime,
    pub coordinate: Coordinate,
    pub value: f64,
    /// Inclusive range the value was checked against.
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} {} out of range [{}, {}] for {} (#{}) at {}",
            self.line,
            self.coordinate,
            self.value,
            self.min,
            self.max,
            self.record_name,
            self.sequence_num,
            self.timestamp.format("%Y-%m-%d %H:%M"),
        )
    }
}
