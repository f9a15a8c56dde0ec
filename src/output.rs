//! Output formatting and persistence for classified shots and summaries.
//!
//! Supports debug/JSON logging, CSV writing and JSON report files.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, info};

use crate::analyzers::aggregate::summarize;
use crate::analyzers::types::{ClassifiedRow, ClassifiedShot, SummaryRow};
use crate::club::Club;
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a classified shot log, replacing any existing file.
///
/// Each row carries its carry gap against the club's baseline carry; the
/// field is empty for clubs with no Good or Soft shots.
pub fn write_classified(path: &str, classified: &[ClassifiedShot]) -> Result<()> {
    debug!(path, rows = classified.len(), "Writing classified shot log");

    let baselines: HashMap<Club, Option<f64>> = summarize(classified)
        .into_iter()
        .map(|s| (s.club, s.baseline_carry))
        .collect();

    let mut writer = WriterBuilder::new().from_path(path)?;
    for c in classified {
        let baseline = baselines.get(&c.shot.club).copied().flatten();
        writer.serialize(ClassifiedRow::new(c, baseline))?;
    }
    writer.flush()?;

    Ok(())
}

/// Appends a [`SummaryRow`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, row: &SummaryRow) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}

/// Serializes a value as pretty JSON to `path`, creating parent directories.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_vec_pretty(value)?;
    fs::write(path, body)?;
    debug!(path = %path.display(), "JSON written");
    Ok(())
}
