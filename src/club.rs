//! The closed set of clubs a shot can be hit with.
//!
//! Identifiers mix names (`Driver`, `PW`) and lofts (`46`, `60`). They are
//! opaque keys: `Club` never converts to a number, and the declaration order
//! below is the order clubs are listed in summaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YardageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Club {
    Driver,
    Wood3,
    Wood5,
    Iron3,
    Iron4,
    Iron5,
    Iron6,
    Iron7,
    Iron8,
    Iron9,
    PitchingWedge,
    Wedge46,
    Wedge50,
    Wedge52,
    SandWedge,
    Wedge58,
    Wedge60,
}

impl Club {
    /// Every club, in display order.
    pub const ALL: [Club; 17] = [
        Club::Driver,
        Club::Wood3,
        Club::Wood5,
        Club::Iron3,
        Club::Iron4,
        Club::Iron5,
        Club::Iron6,
        Club::Iron7,
        Club::Iron8,
        Club::Iron9,
        Club::PitchingWedge,
        Club::Wedge46,
        Club::Wedge50,
        Club::Wedge52,
        Club::SandWedge,
        Club::Wedge58,
        Club::Wedge60,
    ];

    /// The identifier as it appears in shot logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::Wood3 => "3Wood",
            Club::Wood5 => "5Wood",
            Club::Iron3 => "3",
            Club::Iron4 => "4",
            Club::Iron5 => "5",
            Club::Iron6 => "6",
            Club::Iron7 => "7",
            Club::Iron8 => "8",
            Club::Iron9 => "9",
            Club::PitchingWedge => "PW",
            Club::Wedge46 => "46",
            Club::Wedge50 => "50",
            Club::Wedge52 => "52",
            Club::SandWedge => "SW",
            Club::Wedge58 => "58",
            Club::Wedge60 => "60",
        }
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Club {
    type Err = YardageError;

    /// Named identifiers match case-insensitively, lofts must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Club::ALL
            .iter()
            .copied()
            .find(|club| club.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| YardageError::UnknownClub(token.to_string()))
    }
}

impl TryFrom<String> for Club {
    type Error = YardageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Club> for String {
    fn from(club: Club) -> Self {
        club.as_str().to_string()
    }
}
