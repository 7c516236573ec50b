//! Bearing and distance between positions on a spherical Earth
//!
//! Bearing uses the forward-azimuth formula, distance either the spherical
//! law of cosines or the equirectangular approximation, which is only
//! trustworthy over short distances.

use crate::core::{GeoPosition, DISTANCE_EARTH_RADIUS, MAX_LATITUDE};

/// Initial compass bearing from `from` to `to` in degrees, in [0, 360)
///
/// Identical positions have no defined bearing; 0.0 is returned for them.
/// Both poles count as one position whatever their longitude.
pub fn bearing(from: &GeoPosition, to: &GeoPosition) -> f64 {
    if is_same_point(from, to) {
        return 0.0;
    }

    let lat1 = from.lat_radians();
    let lat2 = to.lat_radians();
    let d_lon = to.lon_radians() - from.lon_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

fn is_same_point(a: &GeoPosition, b: &GeoPosition) -> bool {
    a == b || (a.lat() == b.lat() && a.lat().abs() == MAX_LATITUDE)
}

/// Great-circle distance in meters on a sphere of radius 6 373 km
pub fn great_circle_distance(from: &GeoPosition, to: &GeoPosition) -> f64 {
    great_circle_distance_with_radius(from, to, DISTANCE_EARTH_RADIUS)
}

/// Great-circle distance in meters using the spherical law of cosines
pub fn great_circle_distance_with_radius(from: &GeoPosition, to: &GeoPosition, radius: f64) -> f64 {
    // Colatitude and longitude as spherical angles
    let phi1 = (90.0 - from.lat()).to_radians();
    let phi2 = (90.0 - to.lat()).to_radians();
    let theta1 = from.lon_radians();
    let theta2 = to.lon_radians();

    let cos_arc = phi1.sin() * phi2.sin() * (theta1 - theta2).cos() + phi1.cos() * phi2.cos();

    // Rounding can push the cosine just past +/-1 for identical or antipodal points
    cos_arc.clamp(-1.0, 1.0).acos() * radius
}

/// Flat-Earth distance approximation in meters on a sphere of radius 6 373 km
pub fn equirectangular_distance(from: &GeoPosition, to: &GeoPosition) -> f64 {
    equirectangular_distance_with_radius(from, to, DISTANCE_EARTH_RADIUS)
}

/// Flat-Earth distance approximation in meters
pub fn equirectangular_distance_with_radius(from: &GeoPosition, to: &GeoPosition, radius: f64) -> f64 {
    let lat1 = from.lat_radians();
    let lat2 = to.lat_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.lon_radians() - from.lon_radians();

    let x = d_lon * ((lat1 + lat2) / 2.0).cos();
    (x * x + d_lat * d_lat).sqrt() * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn pos(lat: f64, lon: f64) -> GeoPosition {
        GeoPosition::new(lat, lon).unwrap()
    }

    #[test]
    fn test_bearing_due_east() {
        assert_abs_diff_eq!(bearing(&pos(0.0, 0.0), &pos(0.0, 90.0)), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_to_north_pole() {
        assert_abs_diff_eq!(bearing(&pos(0.0, 0.0), &pos(90.0, 0.0)), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = pos(35.0, 139.0);
        assert_abs_diff_eq!(bearing(&origin, &pos(34.0, 139.0)), 180.0, epsilon = 1e-9);

        let west = bearing(&origin, &pos(35.0, 138.0));
        assert!(west > 270.0 && west < 271.0, "west bearing was {west}");
    }

    #[test]
    fn test_bearing_same_position_is_zero() {
        let p = pos(30.2241, -92.0198);
        assert_eq!(bearing(&p, &p), 0.0);
    }

    #[test]
    fn test_bearing_between_pole_longitudes_is_zero() {
        assert_eq!(bearing(&pos(90.0, 0.0), &pos(90.0, 45.0)), 0.0);
        assert_eq!(bearing(&pos(-90.0, 120.0), &pos(-90.0, -60.0)), 0.0);
        assert_abs_diff_eq!(bearing(&pos(-90.0, 0.0), &pos(90.0, 0.0)), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_is_in_range() {
        let origin = pos(30.2241, -92.0198);
        for (lat, lon) in [(30.0, -93.0), (29.0, -92.0198), (31.0, -91.0), (-60.0, 100.0)] {
            let b = bearing(&origin, &pos(lat, lon));
            assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
        }
    }

    #[test]
    fn test_distance_same_position_is_zero() {
        assert_eq!(great_circle_distance(&pos(0.0, 0.0), &pos(0.0, 0.0)), 0.0);

        let p = pos(30.2241, -92.0198);
        assert_abs_diff_eq!(great_circle_distance(&p, &p), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_distance_antipodal() {
        let d = great_circle_distance(&pos(0.0, 0.0), &pos(0.0, 180.0));
        assert_relative_eq!(d, PI * DISTANCE_EARTH_RADIUS, max_relative = 1e-9);
    }

    #[test]
    fn test_distance_custom_radius() {
        let d = great_circle_distance_with_radius(&pos(0.0, 0.0), &pos(0.0, 90.0), 1.0);
        assert_relative_eq!(d, PI / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_short_distances_converge() {
        let origin = pos(30.2241, -92.0198);
        for (lat, lon) in [(30.26, -91.99), (30.2241, -92.07), (30.18, -92.05)] {
            let target = pos(lat, lon);
            let exact = great_circle_distance(&origin, &target);
            let approx = equirectangular_distance(&origin, &target);

            assert!(exact < 10_000.0);
            assert!((exact - approx).abs() / exact < 0.01);
        }
    }

    #[test]
    fn test_equirectangular_along_meridian() {
        // One degree of latitude
        let d = equirectangular_distance(&pos(10.0, 20.0), &pos(11.0, 20.0));
        assert_relative_eq!(d, DISTANCE_EARTH_RADIUS * PI / 180.0, max_relative = 1e-12);
    }
}
