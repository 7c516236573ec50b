//! Geometry error types

use thiserror::Error;

/// Failure conditions of the geometry functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Coordinate outside its valid range or not finite
    #[error("Invalid coordinate: {field} = {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },

    /// Hemisphere token not valid for the requested axis
    #[error("Invalid hemisphere token '{token}' for {axis}")]
    InvalidHemisphereToken { token: char, axis: &'static str },

    /// Three points that do not span two distinct great circles
    #[error("Degenerate point triple: {reason}")]
    DegenerateTriple { reason: &'static str },

    /// Angle requested against a vector of zero length
    #[error("Zero-length vector has no direction")]
    ZeroLengthVector,
}

/// Result type for geometry operations
pub type GeoResult<T> = Result<T, GeoError>;
