//! Vector geometry on a sphere
//!
//! Positions are projected to Cartesian points with [`to_cartesian`]; great
//! circles are then handled through the normals of the planes they span.

use crate::core::{GeoError, GeoPosition, GeoResult};
use nalgebra::Vector3;

/// Compass point labels, clockwise from north
pub const DIRECTION_NAMES: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Angular width of one compass point (degrees)
pub const DIRECTION_STEP: f64 = 360.0 / DIRECTION_NAMES.len() as f64;

/// Plane normals shorter than this fraction of |p1|·|p2| are treated as vanishing
const DEGENERATE_NORMAL_RATIO: f64 = 1e-12;

/// Project a position onto a sphere of the given radius
pub fn to_cartesian(position: &GeoPosition, radius: f64) -> Vector3<f64> {
    let lat = position.lat_radians();
    let lon = position.lon_radians();

    Vector3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
    )
}

/// Vector pointing from `a` to `b`
pub fn vector_between(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    b - a
}

pub fn dot_product(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b)
}

pub fn cross_product(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}

/// `p1 · (p2 × p3)`, the determinant of the three vectors
pub fn scalar_triple_product(p1: &Vector3<f64>, p2: &Vector3<f64>, p3: &Vector3<f64>) -> f64 {
    p1.dot(&p2.cross(p3))
}

/// Reduce an angle in degrees to [0, 360)
pub fn normalize_angle_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);

    // A tiny negative remainder plus 360 rounds up to 360
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Reduce an angle in degrees to (-180, 180]
pub fn wrap_180(angle: f64) -> f64 {
    let normalized = normalize_angle_degrees(angle);
    if normalized > 180.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Angle from `v1` to `v2` in degrees, in [0, 360)
///
/// The sign is taken from the determinant of `v1`, `v2` and `observer`, a
/// vector pointing at whoever looks down on the plane of `v1` and `v2`. With
/// no observer `v1 × v2` is used, which always yields the unsigned angle.
/// Zero-length or non-finite inputs fail with [`GeoError::ZeroLengthVector`].
pub fn signed_angle_between(
    v1: &Vector3<f64>,
    v2: &Vector3<f64>,
    observer: Option<&Vector3<f64>>,
) -> GeoResult<f64> {
    let u1 = unit_direction(v1).ok_or(GeoError::ZeroLengthVector)?;
    let u2 = unit_direction(v2).ok_or(GeoError::ZeroLengthVector)?;

    let cos_angle = u1.dot(&u2).clamp(-1.0, 1.0);
    // Only the sign of the determinant matters, so the observer is rescaled too
    let observer = observer
        .and_then(unit_direction)
        .unwrap_or_else(|| u1.cross(&u2));

    let radians = sign(scalar_triple_product(&u1, &u2, &observer)) * cos_angle.acos();
    Ok(normalize_angle_degrees(radians.to_degrees()))
}

/// Unsigned angle between two vectors in degrees, in [0, 180]
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> GeoResult<f64> {
    signed_angle_between(v1, v2, None)
}

/// Turning angle at `p2` on the path `p1 -> p2 -> p3` along great circles
///
/// Continuing straight gives 180, turning left (counter-clockwise seen from
/// outside the sphere) gives more, turning right gives less.
pub fn great_circle_turn_angle(
    p1: &Vector3<f64>,
    p2: &Vector3<f64>,
    p3: &Vector3<f64>,
) -> GeoResult<f64> {
    let n1 = p1.cross(p2);
    let n2 = p3.cross(p2);

    if is_vanishing(&n1, p1, p2) {
        return Err(GeoError::DegenerateTriple {
            reason: "first and second points do not define a great circle",
        });
    }
    if is_vanishing(&n2, p3, p2) {
        return Err(GeoError::DegenerateTriple {
            reason: "second and third points do not define a great circle",
        });
    }

    signed_angle_between(&n1, &n2, Some(p2))
}

/// Length of the great-circle arc between two points on a sphere
pub fn great_circle_arc_length(p1: &Vector3<f64>, p2: &Vector3<f64>, radius: f64) -> GeoResult<f64> {
    Ok(angle_between(p1, p2)?.to_radians() * radius)
}

/// Name of the compass point closest to `angle` (degrees)
///
/// Halfway angles round clockwise, so 11.25 is "NNE".
pub fn compass_direction_name(angle: f64) -> &'static str {
    let index = (normalize_angle_degrees(angle) / DIRECTION_STEP).round() as usize;
    DIRECTION_NAMES[index % DIRECTION_NAMES.len()]
}

// Zero counts as positive so antiparallel vectors keep their 180 degrees
fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

// Rescale by the largest component first so the norm neither overflows nor underflows
fn unit_direction(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    let scale = v.amax();
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }

    let scaled = v / scale;
    Some(scaled / scaled.norm())
}

fn is_vanishing(normal: &Vector3<f64>, a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    let scale = a.norm() * b.norm();
    scale == 0.0 || normal.norm() <= DEGENERATE_NORMAL_RATIO * scale
}
