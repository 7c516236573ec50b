//! GPS geometry and quadcopter leveling
//!
//! Great-circle and bearing math for GPS positions, plus a bang-bang
//! leveling loop that turns accelerometer tilt into motor PWM corrections.

pub mod core;
pub mod algorithms;
pub mod hardware;
pub mod control;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{GeoError, GeoPosition, GeoResult, DISTANCE_EARTH_RADIUS, EARTH_RADIUS};
pub use algorithms::{
    bearing, compass_direction_name, convert_latitude, convert_longitude, equirectangular_distance,
    great_circle_distance, great_circle_turn_angle, normalize_angle_degrees, signed_angle_between,
    to_cartesian, DegreesMinutes, Hemisphere, ReferencePoles, REFERENCE_POLES,
};
pub use hardware::{
    Accelerometer, AxisReading, HardwareError, HardwareResult, LoopTimer, MotorCommand, MotorDriver,
};
pub use control::{ControlError, ControlResult, ControllerState, CycleReport, LevelingController};
pub use utils::{ConfigError, LevelingConfig};
