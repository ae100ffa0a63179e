//! Sample data for parser and CLI tests.
//!
//! Files under `samples/` come in two encodings:
//! - `trv_sample.csv`: tenths of a degree, compact `YYYYMMDDHH` timestamps
//! - `trv_degrees.csv`: decimal degrees, `YYYY-MM-DD HH` timestamps

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Tenths-encoded file with five records, one of them empty.
pub const TENTHS_SAMPLE: &str = "trv_sample.csv";

/// Degree-encoded file with three records.
pub const DEGREES_SAMPLE: &str = "trv_degrees.csv";

/// One record, two points, one hour apart.
pub const ALPHA: &str = "66666,WP012024,2,1,CN001,landfall,ALPHA,2024-07-01
2024-07-01 00,20.0,120.0,1.5,0.002,15.0
2024-07-01 01,20.2,120.3,1.4,0.0019,14.0
";

/// Header declares three points but input stops after two.
pub const INCOMPLETE: &str = "66666,WP012024,3,1,CN001,landfall,ALPHA,2024-07-01
2024-07-01 00,20.0,120.0,1.5,0.002,15.0
2024-07-01 01,20.2,120.3,1.4,0.0019,14.0
";

/// Builds record text line by line for tests that need a specific shape.
#[derive(Debug, Default, Clone)]
pub struct TrackFileBuilder {
    lines: Vec<String>,
    sequence: i64,
}

impl TrackFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header plus `hours.len()` track points on `date`, one per
    /// entry in `hours`. The declared count matches the points written.
    pub fn record(mut self, name: &str, date: &str, stop_reason: &str, hours: &[u32]) -> Self {
        self.sequence += 1;
        self.lines.push(format!(
            "66666,WP{seq:02},{count},{seq},CN{seq:03},{stop_reason},{name},{date}",
            seq = self.sequence,
            count = hours.len(),
        ));
        for (i, hour) in hours.iter().enumerate() {
            self.lines.push(format!(
                "{date} {hour:02},{lat:.1},{lon:.1},1.0,0.001,10.0",
                lat = 20.0 + i as f64 * 0.5,
                lon = 120.0 + i as f64 * 0.5,
            ));
        }
        self
    }

    /// Append a raw line verbatim.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Locates and copies the files under `samples/`.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample {}", path.display()))
    }

    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        let source = self.path(sample_name);
        fs::copy(&source, dest)
            .with_context(|| format!("Failed to copy sample {}", source.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_declares_matching_counts() {
        let text = TrackFileBuilder::new()
            .record("ALPHA", "1999-07-01", "0", &[0, 6])
            .record("BRAVO", "2001-08-02", "1", &[])
            .build();

        assert_eq!(
            text,
            "66666,WP01,2,1,CN001,0,ALPHA,1999-07-01
1999-07-01 00,20.0,120.0,1.0,0.001,10.0
1999-07-01 06,20.5,120.5,1.0,0.001,10.0
66666,WP02,0,2,CN002,1,BRAVO,2001-08-02
"
        );
    }

    #[test]
    fn test_samples_exist() {
        let samples = SampleFiles::new();
        assert!(samples.path(TENTHS_SAMPLE).exists());
        assert!(samples.read(DEGREES_SAMPLE).unwrap().contains("ALPHA"));
    }
}
