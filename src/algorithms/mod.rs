//! Geometry algorithms for GPS positions

pub mod coordinates;
pub mod great_circle;
pub mod spherical;
pub mod poles;

pub use coordinates::{
    convert_latitude, convert_longitude, latitude_to_degrees_minutes, longitude_to_degrees_minutes,
    DegreesMinutes, Hemisphere,
};
pub use great_circle::{
    bearing, equirectangular_distance, equirectangular_distance_with_radius, great_circle_distance,
    great_circle_distance_with_radius,
};
pub use spherical::{
    angle_between, compass_direction_name, cross_product, dot_product, great_circle_arc_length,
    great_circle_turn_angle, normalize_angle_degrees, scalar_triple_product, signed_angle_between,
    to_cartesian, vector_between, wrap_180, DIRECTION_NAMES,
};
pub use poles::{ReferencePoles, REFERENCE_POLES};
