//! Accelerometer interface

use crate::hardware::HardwareResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Accelerometer axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Raw, unfiltered 3-axis sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AxisReading {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl Sub for AxisReading {
    type Output = AxisReading;

    fn sub(self, rhs: AxisReading) -> AxisReading {
        AxisReading::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for AxisReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

/// Source of raw tilt samples
///
/// Reads block until a sample is available; there is no timeout.
pub trait Accelerometer {
    fn read_axes(&mut self) -> HardwareResult<AxisReading>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_difference() {
        let current = AxisReading::new(12.0, -3.0, 21.0);
        let baseline = AxisReading::new(2.0, 1.0, 20.0);

        assert_eq!(current - baseline, AxisReading::new(10.0, -4.0, 1.0));
    }

    #[test]
    fn test_axis_lookup() {
        let reading = AxisReading::new(1.0, 2.0, 3.0);
        let values: Vec<f32> = Axis::ALL.iter().map(|&axis| reading.axis(axis)).collect();

        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert_eq!(Axis::Z.index(), 2);
    }
}
