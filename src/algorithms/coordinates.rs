//! Conversion between degree/minute/hemisphere tuples and decimal degrees
//!
//! GPS receivers report positions as whole degrees, decimal minutes and a
//! hemisphere letter (e.g. `(30, 13.446, 'N')`). The geometry functions work
//! in signed decimal degrees.

use crate::core::{GeoError, GeoPosition, GeoResult, MAX_LATITUDE, MAX_LONGITUDE};
use std::fmt;

/// Hemisphere letter of a degree/minute tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse a latitude token; only `'N'` and `'S'` are accepted
    pub fn latitude(token: char) -> GeoResult<Self> {
        match token {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            _ => Err(GeoError::InvalidHemisphereToken { token, axis: "latitude" }),
        }
    }

    /// Parse a longitude token; only `'E'` and `'W'` are accepted
    pub fn longitude(token: char) -> GeoResult<Self> {
        match token {
            'E' => Ok(Hemisphere::East),
            'W' => Ok(Hemisphere::West),
            _ => Err(GeoError::InvalidHemisphereToken { token, axis: "longitude" }),
        }
    }

    pub fn token(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// Sign applied to the unsigned magnitude
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// Unsigned degrees and decimal minutes with a hemisphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreesMinutes {
    pub degrees: f64,
    pub minutes: f64,
    pub hemisphere: Hemisphere,
}

impl fmt::Display for DegreesMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {:.4}' {}", self.degrees, self.minutes, self.hemisphere.token())
    }
}

/// Convert a degree/minute longitude tuple to decimal degrees
pub fn convert_longitude(degrees: f64, minutes: f64, hemisphere: char) -> GeoResult<f64> {
    let hemisphere = Hemisphere::longitude(hemisphere)?;
    to_decimal(degrees, minutes, hemisphere, "longitude", MAX_LONGITUDE)
}

/// Convert a degree/minute latitude tuple to decimal degrees
pub fn convert_latitude(degrees: f64, minutes: f64, hemisphere: char) -> GeoResult<f64> {
    let hemisphere = Hemisphere::latitude(hemisphere)?;
    to_decimal(degrees, minutes, hemisphere, "latitude", MAX_LATITUDE)
}

/// Split a decimal latitude into degrees, minutes and N/S
pub fn latitude_to_degrees_minutes(latitude: f64) -> GeoResult<DegreesMinutes> {
    if !latitude.is_finite() || latitude.abs() > MAX_LATITUDE {
        return Err(GeoError::InvalidCoordinate { field: "latitude", value: latitude });
    }

    let hemisphere = if latitude < 0.0 { Hemisphere::South } else { Hemisphere::North };
    Ok(split_degrees(latitude, hemisphere))
}

/// Split a decimal longitude into degrees, minutes and E/W
pub fn longitude_to_degrees_minutes(longitude: f64) -> GeoResult<DegreesMinutes> {
    if !longitude.is_finite() || longitude.abs() > MAX_LONGITUDE {
        return Err(GeoError::InvalidCoordinate { field: "longitude", value: longitude });
    }

    let hemisphere = if longitude < 0.0 { Hemisphere::West } else { Hemisphere::East };
    Ok(split_degrees(longitude, hemisphere))
}

impl GeoPosition {
    /// Build a position from receiver-style latitude and longitude tuples
    pub fn from_degrees_minutes(lat: &DegreesMinutes, lon: &DegreesMinutes) -> GeoResult<Self> {
        let lat = convert_latitude(lat.degrees, lat.minutes, lat.hemisphere.token())?;
        let lon = convert_longitude(lon.degrees, lon.minutes, lon.hemisphere.token())?;
        GeoPosition::new(lat, lon)
    }
}

fn to_decimal(
    degrees: f64,
    minutes: f64,
    hemisphere: Hemisphere,
    field: &'static str,
    bound: f64,
) -> GeoResult<f64> {
    if !degrees.is_finite() || degrees < 0.0 {
        return Err(GeoError::InvalidCoordinate { field: "degrees", value: degrees });
    }
    if !minutes.is_finite() || !(0.0..60.0).contains(&minutes) {
        return Err(GeoError::InvalidCoordinate { field: "minutes", value: minutes });
    }

    let value = (degrees + minutes / 60.0) * hemisphere.sign();
    if value.abs() > bound {
        return Err(GeoError::InvalidCoordinate { field, value });
    }

    Ok(value)
}

fn split_degrees(value: f64, hemisphere: Hemisphere) -> DegreesMinutes {
    let magnitude = value.abs();
    let degrees = magnitude.trunc();

    DegreesMinutes {
        degrees,
        minutes: (magnitude - degrees) * 60.0,
        hemisphere,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_convert_latitude() {
        assert_abs_diff_eq!(convert_latitude(30.0, 13.446, 'N').unwrap(), 30.2241, epsilon = 1e-9);
        assert_abs_diff_eq!(convert_latitude(30.0, 13.446, 'S').unwrap(), -30.2241, epsilon = 1e-9);
    }

    #[test]
    fn test_convert_longitude() {
        assert_abs_diff_eq!(convert_longitude(92.0, 1.188, 'W').unwrap(), -92.0198, epsilon = 1e-9);
        assert_abs_diff_eq!(convert_longitude(92.0, 1.188, 'E').unwrap(), 92.0198, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_hemisphere_token_is_rejected() {
        assert_eq!(
            convert_latitude(30.0, 0.0, 'X'),
            Err(GeoError::InvalidHemisphereToken { token: 'X', axis: "latitude" })
        );
        assert_eq!(
            convert_longitude(30.0, 0.0, 'n'),
            Err(GeoError::InvalidHemisphereToken { token: 'n', axis: "longitude" })
        );
    }

    #[test]
    fn test_hemisphere_of_other_axis_is_rejected() {
        assert!(convert_latitude(10.0, 0.0, 'E').is_err());
        assert!(convert_longitude(10.0, 0.0, 'S').is_err());
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(matches!(
            convert_latitude(10.0, 60.0, 'N'),
            Err(GeoError::InvalidCoordinate { field: "minutes", .. })
        ));
        assert!(matches!(
            convert_latitude(-10.0, 0.0, 'N'),
            Err(GeoError::InvalidCoordinate { field: "degrees", .. })
        ));
        assert!(matches!(
            convert_latitude(90.0, 30.0, 'S'),
            Err(GeoError::InvalidCoordinate { field: "latitude", .. })
        ));
        assert!(convert_longitude(180.0, 0.0, 'W').is_ok());
    }

    #[test]
    fn test_latitude_round_trip() {
        for latitude in [30.2241, -30.2241, 0.0, 89.999, -45.5] {
            let dm = latitude_to_degrees_minutes(latitude).unwrap();
            let back = convert_latitude(dm.degrees, dm.minutes, dm.hemisphere.token()).unwrap();
            assert_abs_diff_eq!(back, latitude, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_longitude_round_trip() {
        for longitude in [-92.0198, 92.0198, 179.5, -0.25] {
            let dm = longitude_to_degrees_minutes(longitude).unwrap();
            let back = convert_longitude(dm.degrees, dm.minutes, dm.hemisphere.token()).unwrap();
            assert_abs_diff_eq!(back, longitude, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_split_degrees() {
        let dm = latitude_to_degrees_minutes(-30.5).unwrap();
        assert_eq!(dm.degrees, 30.0);
        assert_abs_diff_eq!(dm.minutes, 30.0, epsilon = 1e-9);
        assert_eq!(dm.hemisphere, Hemisphere::South);
    }

    #[test]
    fn test_position_from_degrees_minutes() {
        let lat = DegreesMinutes { degrees: 30.0, minutes: 13.446, hemisphere: Hemisphere::North };
        let lon = DegreesMinutes { degrees: 92.0, minutes: 1.188, hemisphere: Hemisphere::West };

        let position = GeoPosition::from_degrees_minutes(&lat, &lon).unwrap();
        assert_abs_diff_eq!(position.lat(), 30.2241, epsilon = 1e-9);
        assert_abs_diff_eq!(position.lon(), -92.0198, epsilon = 1e-9);

        // Axes swapped
        assert!(GeoPosition::from_degrees_minutes(&lon, &lat).is_err());
    }
}
