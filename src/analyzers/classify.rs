use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analyzers::types::ClassifiedShot;
use crate::error::YardageError;
use crate::limits::{ClubLimits, ShotLimits};
use crate::shot::Shot;

/// The label a classified shot carries. Declaration order is the order
/// shapes are listed in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShotShape {
    Good,
    Soft,
    Fade,
    Slice,
    Push,
    #[serde(rename = "Slice/Push")]
    SlicePush,
    Draw,
    Hook,
    Pull,
    #[serde(rename = "Hook/Pull")]
    HookPull,
    Balloon,
    Flat,
    #[serde(rename = "Miss Hit")]
    MissHit,
}

/// Where a shape sits around the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeFamily {
    Target,
    Right,
    Left,
    Strike,
}

impl ShotShape {
    pub const ALL: [ShotShape; 13] = [
        ShotShape::Good,
        ShotShape::Soft,
        ShotShape::Fade,
        ShotShape::Slice,
        ShotShape::Push,
        ShotShape::SlicePush,
        ShotShape::Draw,
        ShotShape::Hook,
        ShotShape::Pull,
        ShotShape::HookPull,
        ShotShape::Balloon,
        ShotShape::Flat,
        ShotShape::MissHit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotShape::Good => "Good",
            ShotShape::Soft => "Soft",
            ShotShape::Fade => "Fade",
            ShotShape::Slice => "Slice",
            ShotShape::Push => "Push",
            ShotShape::SlicePush => "Slice/Push",
            ShotShape::Draw => "Draw",
            ShotShape::Hook => "Hook",
            ShotShape::Pull => "Pull",
            ShotShape::HookPull => "Hook/Pull",
            ShotShape::Balloon => "Balloon",
            ShotShape::Flat => "Flat",
            ShotShape::MissHit => "Miss Hit",
        }
    }

    pub fn family(&self) -> ShapeFamily {
        match self {
            ShotShape::Good | ShotShape::Soft | ShotShape::Fade | ShotShape::Draw => {
                ShapeFamily::Target
            }
            ShotShape::Push | ShotShape::Slice | ShotShape::SlicePush => ShapeFamily::Right,
            ShotShape::Pull | ShotShape::Hook | ShotShape::HookPull => ShapeFamily::Left,
            ShotShape::MissHit | ShotShape::Flat | ShotShape::Balloon => ShapeFamily::Strike,
        }
    }
}

impl fmt::Display for ShotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels one shot against its club's limits.
///
/// The first matching rule wins and every later rule relies on the earlier
/// ones having failed, so the order below must not change. Bounds are
/// strict: a value equal to a threshold falls through to the next rule.
pub fn classify(shot: &Shot, limit: &ClubLimits) -> ShotShape {
    let offset = shot.offset();

    if shot.ball_speed < limit.ball_speed - 2.0 {
        return ShotShape::MissHit;
    }
    if shot.height < limit.height.min || shot.launch_angle < limit.launch_angle.min {
        return ShotShape::Flat;
    }
    if shot.height > limit.height.max || shot.launch_angle > limit.launch_angle.max {
        return ShotShape::Balloon;
    }
    if shot.curve < -limit.curve {
        if offset < -limit.offset {
            return ShotShape::HookPull;
        }
        return ShotShape::Hook;
    }
    if shot.curve > limit.curve {
        if offset > limit.offset {
            return ShotShape::SlicePush;
        }
        return ShotShape::Slice;
    }
    if offset < -limit.offset {
        return ShotShape::Pull;
    }
    if offset > limit.offset {
        return ShotShape::Push;
    }
    if -limit.straight > shot.curve && shot.curve > -limit.curve {
        return ShotShape::Draw;
    }
    if limit.curve > shot.curve && shot.curve > limit.straight {
        return ShotShape::Fade;
    }
    if shot.offline < -limit.offline {
        return ShotShape::HookPull;
    }
    if shot.offline > limit.offline {
        return ShotShape::SlicePush;
    }
    if shot.ball_speed < limit.ball_speed {
        return ShotShape::Soft;
    }
    ShotShape::Good
}

/// Labels a whole log. One club without limits fails the entire call.
pub fn classify_all(shots: &[Shot], limits: &ShotLimits) -> Result<Vec<ClassifiedShot>, YardageError> {
    shots
        .iter()
        .map(|shot| {
            let limit = limits.get(shot.club)?;
            Ok(ClassifiedShot {
                shot: *shot,
                shape: classify(shot, limit),
            })
        })
        .collect()
}
