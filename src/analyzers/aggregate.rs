use crate::analyzers::classify::ShotShape;
use crate::analyzers::types::{ClassifiedShot, ClubSummary, ShapeAggregate};
use crate::analyzers::utility::{mean, median, stddev};
use crate::club::Club;
use std::collections::BTreeMap;
use tracing::debug;

/// Groups a classified log by club and summarizes each club that has shots,
/// in club order.
pub fn summarize(classified: &[ClassifiedShot]) -> Vec<ClubSummary> {
    let mut by_club: BTreeMap<Club, Vec<ClassifiedShot>> = BTreeMap::new();
    for c in classified {
        by_club.entry(c.shot.club).or_default().push(*c);
    }

    by_club
        .into_iter()
        .filter_map(|(club, shots)| summarize_club(club, &shots))
        .collect()
}

/// Aggregates the shots of one club by label.
///
/// Returns `None` when `shots` is empty. Labels with no shots are left out
/// of the result rather than reported as zero.
pub fn summarize_club(club: Club, shots: &[ClassifiedShot]) -> Option<ClubSummary> {
    let total = shots.len();
    if total == 0 {
        return None;
    }

    let mut groups: BTreeMap<ShotShape, Vec<&ClassifiedShot>> = BTreeMap::new();
    for c in shots {
        groups.entry(c.shape).or_default().push(c);
    }

    let baseline_carry = [ShotShape::Good, ShotShape::Soft]
        .iter()
        .find_map(|shape| groups.get(shape))
        .and_then(|group| median(&carries(group)));

    let mut shapes = BTreeMap::new();
    let mut families = BTreeMap::new();

    for (shape, group) in &groups {
        let count = group.len();
        let fraction = count as f64 / total as f64;

        let carry = carries(group);
        let offline: Vec<f64> = group.iter().map(|c| c.shot.offline).collect();
        let roll: Vec<f64> = group.iter().map(|c| c.shot.roll()).collect();

        let median_carry = median(&carry).unwrap_or(0.0);
        let mean_offline = mean(&offline);

        shapes.insert(
            *shape,
            ShapeAggregate {
                count,
                fraction,
                median_carry,
                carry_gap: baseline_carry.map(|base| median_carry - base),
                median_offline: median(&offline).unwrap_or(0.0),
                mean_offline,
                offline_stddev: stddev(&offline, mean_offline),
                mean_roll: mean(&roll),
            },
        );

        *families.entry(shape.family()).or_insert(0.0) += fraction;
    }

    debug!(
        club = %club,
        total,
        shapes = shapes.len(),
        baseline_carry,
        "Club summarized"
    );

    Some(ClubSummary {
        club,
        total,
        baseline_carry,
        shapes,
        families,
    })
}

fn carries(group: &[&ClassifiedShot]) -> Vec<f64> {
    group.iter().map(|c| c.shot.flat_carry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::classify::ShapeFamily;
    use crate::shot::Shot;

    fn shot(club: Club, shape: ShotShape, flat_carry: f64, offline: f64) -> ClassifiedShot {
        ClassifiedShot {
            shot: Shot {
                club,
                ball_speed: 50.0,
                launch_angle: 18.0,
                height: 25.0,
                curve: 0.0,
                offline,
                total_distance: flat_carry + 5.0,
                flat_carry,
            },
            shape,
        }
    }

    fn seven_iron_session() -> Vec<ClassifiedShot> {
        let mut shots = Vec::new();
        for carry in [140.0, 142.0, 144.0, 146.0, 148.0, 150.0] {
            shots.push(shot(Club::Iron7, ShotShape::Good, carry, 1.0));
        }
        shots.push(shot(Club::Iron7, ShotShape::Soft, 130.0, -2.0));
        shots.push(shot(Club::Iron7, ShotShape::Soft, 134.0, 2.0));
        shots.push(shot(Club::Iron7, ShotShape::MissHit, 90.0, 10.0));
        shots.push(shot(Club::Iron7, ShotShape::MissHit, 70.0, -6.0));
        shots
    }

    #[test]
    fn test_fractions_for_seven_iron() {
        let summary = summarize_club(Club::Iron7, &seven_iron_session()).unwrap();

        assert_eq!(summary.total, 10);
        assert_eq!(summary.shapes.len(), 3);
        assert!((summary.fraction(ShotShape::Good) - 0.6).abs() < 1e-9);
        assert!((summary.fraction(ShotShape::Soft) - 0.2).abs() < 1e-9);
        assert!((summary.fraction(ShotShape::MissHit) - 0.2).abs() < 1e-9);

        let sum: f64 = summary.shapes.values().map(|a| a.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_statistics() {
        let summary = summarize_club(Club::Iron7, &seven_iron_session()).unwrap();

        let good = summary.get(ShotShape::Good).unwrap();
        assert_eq!(good.count, 6);
        assert_eq!(good.median_carry, 145.0);
        assert_eq!(good.median_offline, 1.0);
        assert_eq!(good.offline_stddev, 0.0);
        assert_eq!(good.mean_roll, 5.0);
        assert_eq!(good.carry_gap, Some(0.0));

        let soft = summary.get(ShotShape::Soft).unwrap();
        assert_eq!(soft.median_carry, 132.0);
        assert_eq!(soft.mean_offline, 0.0);
        assert_eq!(soft.offline_stddev, 2.0);
        assert_eq!(soft.carry_gap, Some(-13.0));

        assert_eq!(summary.baseline_carry, Some(145.0));
        assert!((summary.good_or_soft_fraction() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_absent_shape_is_no_data() {
        let summary = summarize_club(Club::Iron7, &seven_iron_session()).unwrap();
        assert!(summary.get(ShotShape::Fade).is_none());
        assert_eq!(summary.fraction(ShotShape::Fade), 0.0);
        assert!(!summary.families.contains_key(&ShapeFamily::Left));
    }

    #[test]
    fn test_families() {
        let summary = summarize_club(Club::Iron7, &seven_iron_session()).unwrap();
        assert!((summary.families[&ShapeFamily::Target] - 0.8).abs() < 1e-9);
        assert!((summary.families[&ShapeFamily::Strike] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_falls_back_to_soft() {
        let shots = vec![
            shot(Club::Iron8, ShotShape::Soft, 118.0, 0.0),
            shot(Club::Iron8, ShotShape::Soft, 122.0, 0.0),
            shot(Club::Iron8, ShotShape::Fade, 125.0, 4.0),
        ];

        let summary = summarize_club(Club::Iron8, &shots).unwrap();

        assert_eq!(summary.baseline_carry, Some(120.0));
        assert_eq!(summary.get(ShotShape::Fade).unwrap().carry_gap, Some(5.0));
    }

    #[test]
    fn test_no_baseline_without_good_or_soft() {
        let shots = vec![
            shot(Club::Driver, ShotShape::Hook, 200.0, -30.0),
            shot(Club::Driver, ShotShape::Slice, 210.0, 25.0),
        ];

        let summary = summarize_club(Club::Driver, &shots).unwrap();

        assert_eq!(summary.baseline_carry, None);
        assert_eq!(summary.get(ShotShape::Hook).unwrap().carry_gap, None);
    }

    #[test]
    fn test_empty_club_has_no_summary() {
        assert!(summarize_club(Club::Iron8, &[]).is_none());
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_summarize_groups_by_club_in_order() {
        let mut shots = seven_iron_session();
        shots.push(shot(Club::PitchingWedge, ShotShape::Good, 100.0, 0.0));
        shots.push(shot(Club::Driver, ShotShape::Good, 210.0, 0.0));
        shots.push(shot(Club::Wedge46, ShotShape::Flat, 80.0, 0.0));

        let summaries = summarize(&shots);
        let clubs: Vec<Club> = summaries.iter().map(|s| s.club).collect();

        assert_eq!(
            clubs,
            vec![Club::Driver, Club::Iron7, Club::PitchingWedge, Club::Wedge46]
        );
        for summary in &summaries {
            let sum: f64 = summary.shapes.values().map(|a| a.fraction).sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
        assert_eq!(summaries[1].total, 10);
    }
}
