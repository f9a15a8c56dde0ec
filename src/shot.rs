use serde::{Deserialize, Serialize};

use crate::club::Club;

/// One measured ball flight, as read from a shot log row.
///
/// Column names follow the launch monitor export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    #[serde(rename = "Club")]
    pub club: Club,
    #[serde(rename = "Ball Speed")]
    pub ball_speed: f64,
    #[serde(rename = "Launch Angle")]
    pub launch_angle: f64,
    #[serde(rename = "Height")]
    pub height: f64,
    /// Positive curves right.
    #[serde(rename = "Curve")]
    pub curve: f64,
    /// Signed lateral distance from the target line at landing.
    #[serde(rename = "Offline")]
    pub offline: f64,
    #[serde(rename = "Total Distance")]
    pub total_distance: f64,
    #[serde(rename = "Flat Carry")]
    pub flat_carry: f64,
}

impl Shot {
    /// Lateral miss that comes from the start line rather than the curve.
    pub fn offset(&self) -> f64 {
        self.offline - self.curve
    }

    pub fn roll(&self) -> f64 {
        self.total_distance - self.flat_carry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let shot = Shot {
            club: Club::Iron7,
            ball_speed: 50.0,
            launch_angle: 18.0,
            height: 24.0,
            curve: -3.0,
            offline: 4.0,
            total_distance: 150.0,
            flat_carry: 141.5,
        };

        assert_eq!(shot.offset(), 7.0);
        assert_eq!(shot.roll(), 8.5);
    }
}
