//! Great-circle distance between geographic coordinates.
//!
//! Uses the haversine formula with the Earth radius expressed directly in
//! nautical miles, so distances come out in the unit the voyage records
//! store without a conversion step.

use navlog_types::Coordinate;

/// Mean Earth radius in nautical miles.
///
/// Working in this unit means one minute of arc along a great circle is
/// one nautical mile, which is the convention the rest of the system uses.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two coordinates, in nautical miles.
///
/// Haversine formula. Accurate to well under a tenth of a percent for the
/// distances a single voyage covers, and numerically stable for the small
/// deltas between consecutive position fixes.
pub fn great_circle_nm(from: Coordinate, to: Coordinate) -> f64 {
    let lat_from = from.latitude.to_radians();
    let lat_to = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let lat_term = (d_lat / 2.0).sin().powi(2);
    let lon_term = (d_lon / 2.0).sin().powi(2);
    let half_chord = (lat_from.cos() * lat_to.cos()).mul_add(lon_term, lat_term);
    let arc = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_NM * arc
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE_NM: f64 = 0.1;

    #[test]
    fn zero_distance_for_identical_points() {
        let here = Coordinate::new(51.92, 4.48);
        assert!(great_circle_nm(here, here).abs() < f64::EPSILON);
    }

    #[test]
    fn one_degree_of_longitude_on_the_equator_is_sixty_nm() {
        // The classic sanity check for the nautical-mile radius constant.
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        let distance = great_circle_nm(a, b);
        assert!(
            (distance - 60.0).abs() < TOLERANCE_NM,
            "expected ~60 NM, got {distance}"
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let rotterdam = Coordinate::new(51.92, 4.48);
        let hamburg = Coordinate::new(53.55, 9.97);
        let out = great_circle_nm(rotterdam, hamburg);
        let back = great_circle_nm(hamburg, rotterdam);
        assert!((out - back).abs() < f64::EPSILON);
        assert!(out > 0.0);
    }

    #[test]
    fn known_leg_rotterdam_to_hamburg() {
        // Roughly 210 NM great-circle; generous tolerance since the
        // reference value is itself approximate.
        let rotterdam = Coordinate::new(51.92, 4.48);
        let hamburg = Coordinate::new(53.55, 9.97);
        let distance = great_circle_nm(rotterdam, hamburg);
        assert!(
            (distance - 210.0).abs() < 5.0,
            "expected ~210 NM, got {distance}"
        );
    }
}
