//! Assertions over the CLI's `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a `find`/`validate` style payload lists `expected` records.
pub fn assert_record_count(json: &Value, expected: usize) -> Result<()> {
    let records = json["content"]["records"]
        .as_array()
        .context("Expected 'content.records' array in JSON")?;

    if records.len() != expected {
        anyhow::bail!("Expected {} records, got {}", expected, records.len());
    }

    Ok(())
}

/// Assert the record names, in output order.
pub fn assert_record_names(json: &Value, expected: &[&str]) -> Result<()> {
    let records = json["content"]["records"]
        .as_array()
        .context("Expected 'content.records' array in JSON")?;

    let names: Vec<&str> = records
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default())
        .collect();

    if names != expected {
        anyhow::bail!("Expected names {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert the `content.total_records` counter of a `stats` payload.
pub fn assert_total_records(json: &Value, expected: u64) -> Result<()> {
    let total = json["content"]["total_records"]
        .as_u64()
        .context("Expected 'content.total_records' number in JSON")?;

    if total != expected {
        anyhow::bail!("Expected {} total records, got {}", expected, total);
    }

    Ok(())
}
