//! Core data types for the geometry library

use crate::core::{GeoError, GeoResult, MAX_LATITUDE, MAX_LONGITUDE};
use std::fmt;

/// Position on the Earth's surface in decimal degrees
///
/// Latitude lies in [-90, 90] and longitude in [-180, 180]. The fields are
/// private so every value in circulation has passed that check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    lat: f64,
    lon: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lon: f64) -> GeoResult<Self> {
        if !lat.is_finite() || lat.abs() > MAX_LATITUDE {
            return Err(GeoError::InvalidCoordinate { field: "latitude", value: lat });
        }
        if !lon.is_finite() || lon.abs() > MAX_LONGITUDE {
            return Err(GeoError::InvalidCoordinate { field: "longitude", value: lon });
        }

        Ok(Self { lat, lon })
    }

    /// Constructor for compile-time constants already known to be in range
    pub(crate) const fn from_trusted(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    pub fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl TryFrom<(f64, f64)> for GeoPosition {
    type Error = GeoError;

    fn try_from((lat, lon): (f64, f64)) -> GeoResult<Self> {
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_position() {
        let position = GeoPosition::new(30.2241, -92.0198).unwrap();
        assert_eq!(position.lat(), 30.2241);
        assert_eq!(position.lon(), -92.0198);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(GeoPosition::new(90.0, 180.0).is_ok());
        assert!(GeoPosition::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert_eq!(
            GeoPosition::new(90.5, 0.0),
            Err(GeoError::InvalidCoordinate { field: "latitude", value: 90.5 })
        );
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(matches!(
            GeoPosition::try_from((0.0, -181.0)),
            Err(GeoError::InvalidCoordinate { field: "longitude", .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
        assert!(GeoPosition::new(0.0, f64::INFINITY).is_err());
    }
}
