//! Typed errors for shot-log input and reference-limit configuration.

use crate::club::Club;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum YardageError {
    /// A club identifier outside the enumerated set.
    #[error("unknown club identifier `{0}`")]
    UnknownClub(String),

    /// The limits table has no entry for a club that appears in the shot log.
    #[error("no reference limits for club {0}")]
    Lookup(Club),

    #[error("limits table is missing clubs: {}", join(.0))]
    IncompleteLimits(Vec<Club>),

    #[error("shot log is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

fn join(clubs: &[Club]) -> String {
    clubs
        .iter()
        .map(Club::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
