//! Per-club reference limits used by the classifier.
//!
//! [`ShotLimits`] always covers every [`Club`]. It is built from the
//! built-in table or from a JSON file shaped like:
//! ```json
//! {
//!   "8": {
//!     "ball_speed": 48,
//!     "launch_angle": { "min": 18, "max": 22 },
//!     "height": { "min": 19, "max": 32 },
//!     "straight": 3,
//!     "curve": 7,
//!     "offset": 5,
//!     "offline": 7
//!   }
//! }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::club::Club;
use crate::error::YardageError;

/// Acceptable (min, max) window. Only values outside `[min, max]` are
/// flagged, so the bounds themselves count as in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

/// Expected values for one club.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClubLimits {
    pub ball_speed: f64,
    pub launch_angle: Band,
    pub height: Band,
    pub straight: f64,
    pub curve: f64,
    pub offset: f64,
    pub offline: f64,
}

impl ClubLimits {
    /// Draw and Fade need a curve window between `straight` and `curve`.
    pub fn has_shape_band(&self) -> bool {
        self.straight < self.curve
    }
}

/// Ball speed, launch angle, height, straight, curve, offset, offline.
type Row = (Club, f64, (f64, f64), (f64, f64), f64, f64, f64, f64);

static DEFAULT_LIMITS: &[Row] = &[
    (Club::Driver, 62.0, (6.0, 18.0), (9.0, 23.0), 6.0, 11.0, 12.0, 15.0),
    (Club::Wood3, 59.0, (5.0, 24.0), (13.0, 24.0), 4.0, 9.0, 11.0, 14.0),
    (Club::Wood5, 58.0, (6.0, 27.0), (13.0, 30.0), 4.0, 9.0, 10.0, 13.0),
    (Club::Iron3, 54.0, (10.0, 14.0), (13.0, 23.0), 4.0, 9.0, 10.0, 11.0),
    (Club::Iron4, 55.0, (9.0, 16.0), (13.0, 24.0), 4.0, 10.0, 8.0, 10.0),
    (Club::Iron5, 54.0, (11.0, 16.0), (17.0, 27.0), 3.0, 8.0, 7.0, 9.0),
    (Club::Iron6, 53.0, (12.0, 17.0), (18.0, 29.0), 3.0, 8.0, 6.0, 8.0),
    (Club::Iron7, 50.0, (14.0, 22.0), (19.0, 30.0), 3.0, 8.0, 5.0, 8.0),
    (Club::Iron8, 48.0, (18.0, 22.0), (19.0, 32.0), 3.0, 7.0, 5.0, 7.0),
    (Club::Iron9, 45.0, (21.0, 25.0), (19.0, 33.0), 3.0, 7.0, 4.0, 7.0),
    (Club::PitchingWedge, 40.0, (24.0, 39.0), (18.0, 35.0), 2.0, 5.0, 4.0, 5.0),
    (Club::Wedge46, 40.0, (22.0, 33.0), (16.0, 28.0), 5.0, 5.0, 3.0, 5.0),
    (Club::Wedge50, 37.0, (28.0, 33.0), (20.0, 28.0), 2.0, 5.0, 3.0, 5.0),
    (Club::Wedge52, 35.0, (26.0, 42.0), (17.0, 32.0), 2.0, 5.0, 3.0, 5.0),
    (Club::SandWedge, 35.0, (30.0, 35.0), (17.0, 25.0), 2.0, 4.0, 3.0, 4.0),
    (Club::Wedge58, 30.0, (30.0, 45.0), (15.0, 25.0), 1.0, 3.0, 2.0, 3.0),
    (Club::Wedge60, 30.0, (38.0, 48.0), (14.0, 24.0), 0.0, 1.0, 2.0, 2.0),
];

/// Reference limits for every club.
#[derive(Debug, Clone)]
pub struct ShotLimits {
    entries: HashMap<Club, ClubLimits>,
}

impl ShotLimits {
    /// Builds a table, refusing one that leaves any club uncovered.
    pub fn new(entries: HashMap<Club, ClubLimits>) -> Result<Self, YardageError> {
        let missing: Vec<Club> = Club::ALL
            .into_iter()
            .filter(|club| !entries.contains_key(club))
            .collect();

        if !missing.is_empty() {
            return Err(YardageError::IncompleteLimits(missing));
        }

        Ok(Self { entries })
    }

    /// Loads the table from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let limits = Self::from_json(&content)?;
        debug!(path, clubs = limits.entries.len(), "Loaded limits table");
        Ok(limits)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<Club, ClubLimits> = serde_json::from_str(content)?;
        Ok(Self::new(entries)?)
    }

    /// Limits for `club`.
    ///
    /// # Errors
    ///
    /// Returns [`YardageError::Lookup`] if the club has no entry.
    pub fn get(&self, club: Club) -> Result<&ClubLimits, YardageError> {
        self.entries.get(&club).ok_or(YardageError::Lookup(club))
    }

    /// Iterates over all `(club, limits)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Club, &ClubLimits)> {
        Club::ALL
            .into_iter()
            .filter_map(|club| self.entries.get(&club).map(|limits| (club, limits)))
    }

    /// Clubs whose Draw/Fade window is empty (`straight >= curve`).
    pub fn unreachable_shape_bands(&self) -> Vec<Club> {
        self.iter()
            .filter(|(_, limits)| !limits.has_shape_band())
            .map(|(club, _)| club)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn partial(entries: HashMap<Club, ClubLimits>) -> Self {
        Self { entries }
    }
}

impl Default for ShotLimits {
    fn default() -> Self {
        let entries = DEFAULT_LIMITS
            .iter()
            .map(
                |&(club, ball_speed, launch_angle, height, straight, curve, offset, offline)| {
                    let limits = ClubLimits {
                        ball_speed,
                        launch_angle: Band {
                            min: launch_angle.0,
                            max: launch_angle.1,
                        },
                        height: Band {
                            min: height.0,
                            max: height.1,
                        },
                        straight,
                        curve,
                        offset,
                        offline,
                    };
                    (club, limits)
                },
            )
            .collect();

        Self { entries }
    }
}
