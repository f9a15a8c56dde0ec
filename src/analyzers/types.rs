//! Data types used by the classification and aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::analyzers::classify::{ShapeFamily, ShotShape};
use crate::club::Club;
use crate::shot::Shot;

/// A shot paired with the label the classifier gave it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedShot {
    pub shot: Shot,
    pub shape: ShotShape,
}

/// One row of a classified shot log CSV: the input columns plus the
/// derived values and the label.
#[derive(Debug, Serialize)]
pub struct ClassifiedRow {
    #[serde(rename = "Club")]
    pub(crate) club: Club,
    #[serde(rename = "Ball Speed")]
    pub(crate) ball_speed: f64,
    #[serde(rename = "Launch Angle")]
    pub(crate) launch_angle: f64,
    #[serde(rename = "Height")]
    pub(crate) height: f64,
    #[serde(rename = "Curve")]
    pub(crate) curve: f64,
    #[serde(rename = "Offline")]
    pub(crate) offline: f64,
    #[serde(rename = "Total Distance")]
    pub(crate) total_distance: f64,
    #[serde(rename = "Flat Carry")]
    pub(crate) flat_carry: f64,
    #[serde(rename = "Offset")]
    pub(crate) offset: f64,
    #[serde(rename = "Roll")]
    pub(crate) roll: f64,
    /// Flat carry minus the club's baseline carry.
    #[serde(rename = "Carry Gap")]
    pub(crate) carry_gap: Option<f64>,
    #[serde(rename = "Shot")]
    pub(crate) shape: ShotShape,
}

impl ClassifiedRow {
    pub fn new(c: &ClassifiedShot, baseline_carry: Option<f64>) -> Self {
        let s = &c.shot;
        ClassifiedRow {
            club: s.club,
            ball_speed: s.ball_speed,
            launch_angle: s.launch_angle,
            height: s.height,
            curve: s.curve,
            offline: s.offline,
            total_distance: s.total_distance,
            flat_carry: s.flat_carry,
            offset: s.offset(),
            roll: s.roll(),
            carry_gap: baseline_carry.map(|base| s.flat_carry - base),
            shape: c.shape,
        }
    }
}

/// Statistics for the shots of one club that share a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeAggregate {
    pub count: usize,
    /// Share of the club's shots, in `[0, 1]`.
    pub fraction: f64,
    pub median_carry: f64,
    /// `median_carry` minus the club's baseline carry.
    pub carry_gap: Option<f64>,
    pub median_offline: f64,
    pub mean_offline: f64,
    pub offline_stddev: f64,
    pub mean_roll: f64,
}

/// Everything the presentation layer needs for one club.
#[derive(Debug, Clone, Serialize)]
pub struct ClubSummary {
    pub club: Club,
    pub total: usize,
    /// Median carry of Good shots, or of Soft shots when there are no Good ones.
    pub baseline_carry: Option<f64>,
    pub shapes: BTreeMap<ShotShape, ShapeAggregate>,
    pub families: BTreeMap<ShapeFamily, f64>,
}

impl ClubSummary {
    /// Aggregate for `shape`, or `None` when the club has no such shots.
    pub fn get(&self, shape: ShotShape) -> Option<&ShapeAggregate> {
        self.shapes.get(&shape)
    }

    /// Share of the club's shots labelled `shape`; 0.0 when absent.
    pub fn fraction(&self, shape: ShotShape) -> f64 {
        self.get(shape).map_or(0.0, |a| a.fraction)
    }

    /// Combined share of Good and Soft shots.
    pub fn good_or_soft_fraction(&self) -> f64 {
        self.fraction(ShotShape::Good) + self.fraction(ShotShape::Soft)
    }
}

/// A flat CSV row: one club/shape aggregate of one bag.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub(crate) bag: String,
    pub(crate) club: Club,
    pub(crate) shape: ShotShape,
    pub(crate) count: usize,
    pub(crate) fraction: f64,
    pub(crate) median_carry: f64,
    pub(crate) carry_gap: Option<f64>,
    pub(crate) median_offline: f64,
    pub(crate) mean_offline: f64,
    pub(crate) offline_stddev: f64,
    pub(crate) mean_roll: f64,
}

impl SummaryRow {
    pub fn rows(bag: &str, summary: &ClubSummary) -> Vec<SummaryRow> {
        summary
            .shapes
            .iter()
            .map(|(shape, a)| SummaryRow {
                bag: bag.to_string(),
                club: summary.club,
                shape: *shape,
                count: a.count,
                fraction: a.fraction,
                median_carry: a.median_carry,
                carry_gap: a.carry_gap,
                median_offline: a.median_offline,
                mean_offline: a.mean_offline,
                offline_stddev: a.offline_stddev,
                mean_roll: a.mean_roll,
            })
            .collect()
    }
}

/// All club summaries for one shot log, written as `bags/<bag>.json`.
#[derive(Debug, Serialize)]
pub struct BagReport {
    pub bag: String,
    pub generated_at: DateTime<Utc>,
    pub shot_count: usize,
    pub clubs: Vec<ClubSummary>,
}

impl BagReport {
    pub fn club(&self, club: Club) -> Option<&ClubSummary> {
        self.clubs.iter().find(|s| s.club == club)
    }

    /// Share of every shot in the bag labelled Good or Soft.
    pub fn good_or_soft_fraction(&self) -> f64 {
        if self.shot_count == 0 {
            return 0.0;
        }
        let count: usize = self
            .clubs
            .iter()
            .flat_map(|s| [s.get(ShotShape::Good), s.get(ShotShape::Soft)])
            .flatten()
            .map(|a| a.count)
            .sum();
        count as f64 / self.shot_count as f64
    }
}

/// Summary entry for the bag index listing.
#[derive(Debug, Serialize)]
pub struct BagIndexEntry {
    pub(crate) bag: String,
    pub(crate) shot_count: usize,
    pub(crate) club_count: usize,
    pub(crate) good_or_soft_fraction: f64,
}

/// Top-level index of all analyzed bags, written as `bags.json`.
#[derive(Debug, Serialize)]
pub struct BagIndex {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) bags: Vec<BagIndexEntry>,
}

impl BagIndex {
    pub fn bag_names(&self) -> Vec<&str> {
        self.bags.iter().map(|b| b.bag.as_str()).collect()
    }
}
