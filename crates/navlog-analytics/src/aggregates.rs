//! Derivation of voyage aggregates from an ordered position stream.
//!
//! [`compute_aggregates`] is a pure function: no storage access, no clock,
//! no randomness. Given the same fix sequence it produces bit-identical
//! output, which is what lets the completion path be unit-tested without a
//! live database.

use navlog_types::{PositionFix, VoyageAggregates};

use crate::distance::great_circle_nm;

/// Compute a voyage's aggregate statistics from its position history.
///
/// `fixes` must already be ordered by recorded timestamp, ascending; the
/// position store guarantees this. Fixes sharing a timestamp are processed
/// in the order the slice yields them.
///
/// - **Total distance** is the sum of great-circle legs between each pair
///   of consecutive fixes, in nautical miles.
/// - **Average / maximum speed** are taken over the fixes that recorded a
///   speed. Fixes without one are excluded from both, not counted as zero.
///
/// An empty stream yields all-zero aggregates: a voyage that never logged
/// a position completes with zeros rather than failing. A single fix yields
/// zero distance, and speed aggregates from that fix alone if it has one.
pub fn compute_aggregates(fixes: &[PositionFix]) -> VoyageAggregates {
    let total_distance_nm: f64 = fixes
        .windows(2)
        .map(|leg| match leg {
            [from, to] => great_circle_nm(from.coordinate, to.coordinate),
            _ => 0.0,
        })
        .sum();

    // The count accumulates as f64; no lossy usize cast.
    let (speed_sum, speed_count, speed_max) = fixes
        .iter()
        .filter_map(|fix| fix.speed_knots)
        .fold((0.0_f64, 0.0_f64, f64::NEG_INFINITY), |(sum, count, max), speed| {
            (sum + speed, count + 1.0, max.max(speed))
        });

    let (average_speed_knots, max_speed_knots) = if speed_count > 0.0 {
        (speed_sum / speed_count, speed_max)
    } else {
        (0.0, 0.0)
    };

    VoyageAggregates {
        total_distance_nm,
        average_speed_knots,
        max_speed_knots,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use navlog_types::{Coordinate, PositionFix, PositionFixId, VoyageId};

    use super::*;
    use crate::distance::great_circle_nm;

    const TOLERANCE_NM: f64 = 0.1;

    fn fix_at(
        voyage_id: VoyageId,
        minutes: i64,
        coordinate: Coordinate,
        speed_knots: Option<f64>,
    ) -> PositionFix {
        let departure = Utc.with_ymd_and_hms(2026, 3, 14, 6, 0, 0).single();
        PositionFix {
            id: PositionFixId::new(),
            voyage_id,
            coordinate,
            speed_knots,
            heading_degrees: None,
            recorded_at: departure.map_or_else(Utc::now, |t| t + Duration::minutes(minutes)),
        }
    }

    #[test]
    fn empty_stream_yields_all_zero_aggregates() {
        let aggregates = compute_aggregates(&[]);
        assert!(aggregates.total_distance_nm.abs() < f64::EPSILON);
        assert!(aggregates.average_speed_knots.abs() < f64::EPSILON);
        assert!(aggregates.max_speed_knots.abs() < f64::EPSILON);
    }

    #[test]
    fn single_fix_yields_zero_distance_and_its_own_speed() {
        let voyage = VoyageId::new();
        let only = fix_at(voyage, 0, Coordinate::new(51.9, 4.5), Some(9.5));
        let aggregates = compute_aggregates(&[only]);
        assert!(aggregates.total_distance_nm.abs() < f64::EPSILON);
        assert!((aggregates.average_speed_knots - 9.5).abs() < f64::EPSILON);
        assert!((aggregates.max_speed_knots - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn single_fix_without_speed_yields_zero_speed_aggregates() {
        let voyage = VoyageId::new();
        let only = fix_at(voyage, 0, Coordinate::new(51.9, 4.5), None);
        let aggregates = compute_aggregates(&[only]);
        assert!(aggregates.average_speed_knots.abs() < f64::EPSILON);
        assert!(aggregates.max_speed_knots.abs() < f64::EPSILON);
    }

    #[test]
    fn stationary_fixes_accumulate_no_distance() {
        let voyage = VoyageId::new();
        let anchored = Coordinate::new(51.9, 4.5);
        let fixes = [
            fix_at(voyage, 0, anchored, None),
            fix_at(voyage, 1, anchored, None),
        ];
        let aggregates = compute_aggregates(&fixes);
        assert!(aggregates.total_distance_nm.abs() < f64::EPSILON);
    }

    #[test]
    fn fixes_without_speed_are_excluded_not_zeroed() {
        let voyage = VoyageId::new();
        let fixes = [
            fix_at(voyage, 0, Coordinate::new(0.0, 0.0), None),
            fix_at(voyage, 10, Coordinate::new(0.0, 0.1), Some(10.0)),
            fix_at(voyage, 20, Coordinate::new(0.0, 0.2), None),
        ];
        let aggregates = compute_aggregates(&fixes);
        assert!((aggregates.average_speed_knots - 10.0).abs() < f64::EPSILON);
        assert!((aggregates.max_speed_knots - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equator_degree_validates_the_radius_constant() {
        let voyage = VoyageId::new();
        let fixes = [
            fix_at(voyage, 0, Coordinate::new(0.0, 0.0), None),
            fix_at(voyage, 60, Coordinate::new(0.0, 1.0), None),
        ];
        let aggregates = compute_aggregates(&fixes);
        assert!(
            (aggregates.total_distance_nm - 60.0).abs() < TOLERANCE_NM,
            "expected ~60 NM, got {}",
            aggregates.total_distance_nm
        );
    }

    #[test]
    fn multi_leg_distance_is_the_sum_of_consecutive_legs() {
        let voyage = VoyageId::new();
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.5);
        let c = Coordinate::new(0.5, 0.5);
        let fixes = [
            fix_at(voyage, 0, a, Some(10.0)),
            fix_at(voyage, 10, b, Some(12.0)),
            fix_at(voyage, 20, c, Some(14.0)),
        ];
        let aggregates = compute_aggregates(&fixes);
        let expected = great_circle_nm(a, b) + great_circle_nm(b, c);
        assert!((aggregates.total_distance_nm - expected).abs() < f64::EPSILON);
        assert!((aggregates.average_speed_knots - 12.0).abs() < f64::EPSILON);
        assert!((aggregates.max_speed_knots - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn output_is_deterministic_for_the_same_input() {
        let voyage = VoyageId::new();
        let fixes = [
            fix_at(voyage, 0, Coordinate::new(51.92, 4.48), Some(8.3)),
            fix_at(voyage, 30, Coordinate::new(52.10, 4.26), Some(11.7)),
            fix_at(voyage, 60, Coordinate::new(52.46, 4.57), Some(9.9)),
        ];
        let first = compute_aggregates(&fixes);
        let second = compute_aggregates(&fixes);
        assert!(first.total_distance_nm.to_bits() == second.total_distance_nm.to_bits());
        assert!(first.average_speed_knots.to_bits() == second.average_speed_knots.to_bits());
        assert!(first.max_speed_knots.to_bits() == second.max_speed_knots.to_bits());
    }

    #[test]
    fn identical_timestamps_are_processed_in_stream_order() {
        let voyage = VoyageId::new();
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.2);
        let fixes = [
            fix_at(voyage, 0, a, None),
            fix_at(voyage, 0, b, None),
            fix_at(voyage, 0, a, None),
        ];
        // Two out-and-back legs, no tie-break reordering.
        let aggregates = compute_aggregates(&fixes);
        let expected = 2.0 * great_circle_nm(a, b);
        assert!((aggregates.total_distance_nm - expected).abs() < f64::EPSILON);
    }
}
