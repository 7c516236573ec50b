//! Geographic and magnetic north poles as points on the sphere

use crate::algorithms::spherical::{great_circle_turn_angle, to_cartesian, wrap_180};
use crate::core::{GeoPosition, GeoResult, EARTH_RADIUS, GEOGRAPHIC_NORTH_POLE, MAGNETIC_NORTH_POLE};
use nalgebra::Vector3;
use once_cell::sync::Lazy;

/// Process-wide poles on the default sphere, computed on first use
pub static REFERENCE_POLES: Lazy<ReferencePoles> = Lazy::new(ReferencePoles::default);

/// North poles projected onto a sphere of fixed radius
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePoles {
    radius: f64,
    magnetic_north: Vector3<f64>,
    geographic_north: Vector3<f64>,
}

impl Default for ReferencePoles {
    fn default() -> Self {
        Self::new(EARTH_RADIUS, &MAGNETIC_NORTH_POLE)
    }
}

impl ReferencePoles {
    pub fn new(radius: f64, magnetic_pole: &GeoPosition) -> Self {
        Self {
            radius,
            magnetic_north: to_cartesian(magnetic_pole, radius),
            geographic_north: to_cartesian(&GEOGRAPHIC_NORTH_POLE, radius),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn magnetic_north(&self) -> &Vector3<f64> {
        &self.magnetic_north
    }

    pub fn geographic_north(&self) -> &Vector3<f64> {
        &self.geographic_north
    }

    /// Angle from true north to magnetic north seen from `position`
    ///
    /// Degrees in (-180, 180], positive when magnetic north lies east of true
    /// north. Undefined at either pole.
    pub fn declination(&self, position: &GeoPosition) -> GeoResult<f64> {
        let here = to_cartesian(position, self.radius);
        let turn = great_circle_turn_angle(&self.geographic_north, &here, &self.magnetic_north)?;

        let declination = -wrap_180(turn);
        Ok(if declination <= -180.0 { declination + 360.0 } else { declination })
    }
}
