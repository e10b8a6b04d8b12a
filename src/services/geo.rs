//! # Great-circle Distance
//!
//! Spherical distance between two addresses, used for service radius checks.

use crate::models::Address;

/// Mean Earth radius in meters, matching the sphere used by `ST_Distance_Sphere`.
pub const EARTH_RADIUS_METERS: f64 = 6_370_986.0;

/// Calculates the haversine distance between two addresses in meters.
///
/// The result is non-negative, symmetric, and zero for identical points.
#[inline]
pub fn distance(a: Address, b: Address) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points
    let c = 2.0 * h.min(1.0).sqrt().asin();

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_apart() {
        let point = Address::new(-26.66119, 40.95858);
        assert_eq!(distance(point, point), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Address::new(-26.66119, 40.95858);
        let b = Address::new(-26.66139, 40.95878);
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, b) > 0.0);
    }

    #[test]
    fn small_latitude_step_is_about_eleven_meters() {
        // 0.0001 degrees of latitude is ~11.12 m on this sphere
        let a = Address::new(-26.66119, 40.95858);
        let b = Address::new(-26.66129, 40.95858);
        let d = distance(a, b);
        assert!((d - 11.12).abs() < 0.01, "got {d}");
    }

    #[test]
    fn longitude_steps_shrink_away_from_the_equator() {
        let at_equator = distance(Address::new(0.0, 10.0), Address::new(0.0, 10.001));
        let at_sixty = distance(Address::new(60.0, 10.0), Address::new(60.0, 10.001));
        assert!((at_sixty / at_equator - 0.5).abs() < 1e-6);
    }

    #[test]
    fn london_to_paris() {
        let london = Address::new(51.5074, -0.1278);
        let paris = Address::new(48.8566, 2.3522);
        let d = distance(london, paris);
        assert!((d - 343_500.0).abs() < 1_500.0, "got {d}");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let d = distance(Address::new(0.0, 0.0), Address::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }
}
