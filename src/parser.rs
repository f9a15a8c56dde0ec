//! CSV reader for launch-monitor shot logs.

use anyhow::Result;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use tracing::debug;

use crate::error::YardageError;
use crate::shot::Shot;

/// Columns every shot log must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Club",
    "Ball Speed",
    "Launch Angle",
    "Height",
    "Curve",
    "Offline",
    "Total Distance",
    "Flat Carry",
];

/// Reads every [`Shot`] from the CSV file at `path`.
#[tracing::instrument]
pub fn read_shot_log(path: &str) -> Result<Vec<Shot>> {
    let file = File::open(path)?;
    let shots = parse_shot_log(file)?;
    debug!(shots = shots.len(), "Shot log parsed");
    Ok(shots)
}

/// Decodes a shot log from any CSV source.
///
/// # Errors
///
/// Fails before reading any row if a required column is missing, and fails
/// the whole log if any row has an unknown club or a non-numeric measurement.
pub fn parse_shot_log<R: Read>(reader: R) -> Result<Vec<Shot>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?;
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(YardageError::MissingColumns(missing).into());
    }

    let mut shots = Vec::new();
    for result in rdr.deserialize() {
        let shot: Shot = result?;
        shots.push(shot);
    }

    Ok(shots)
}
