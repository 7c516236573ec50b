//! Accelerometer-driven leveling of a quadcopter

pub mod mixer;
pub mod leveling;

pub use mixer::{correction_direction, mix, CORRECTION_STEP, MIXING_TABLE};
pub use leveling::{
    CalibrationBaseline, ControlError, ControlResult, ControllerState, CycleReport, LevelingController,
    CALIBRATION_SETTLE_MS,
};
