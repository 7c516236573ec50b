//! Earth model and reference constants

use crate::core::GeoPosition;

/// Radius of the sphere used for vector projections (m)
pub const EARTH_RADIUS: f64 = 6_370_000.0;

/// Radius used by the distance formulas (m)
pub const DISTANCE_EARTH_RADIUS: f64 = 6_373_000.0;

/// Magnetic north pole latitude (decimal degrees)
pub const MAGNETIC_POLE_LAT: f64 = 82.7;

/// Magnetic north pole longitude (decimal degrees)
pub const MAGNETIC_POLE_LON: f64 = -114.4;

/// Magnetic north pole position
pub const MAGNETIC_NORTH_POLE: GeoPosition = GeoPosition::from_trusted(MAGNETIC_POLE_LAT, MAGNETIC_POLE_LON);

/// Geographic north pole position
pub const GEOGRAPHIC_NORTH_POLE: GeoPosition = GeoPosition::from_trusted(MAX_LATITUDE, 0.0);

/// Latitude bound in decimal degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Longitude bound in decimal degrees
pub const MAX_LONGITUDE: f64 = 180.0;
