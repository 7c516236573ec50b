//! Per-axis bang-bang correction mixed onto the four motors

use crate::hardware::{Axis, AxisReading, MotorCommand, MOTOR_COUNT};
use crate::utils::LevelingConfig;

/// PWM change applied per axis when its error leaves the dead band
pub const CORRECTION_STEP: f32 = 5.0;

/// Motor weights (M1..M4) for a positive error on each axis
///
/// A negative error applies the same row with the opposite sign.
pub const MIXING_TABLE: [[f32; MOTOR_COUNT]; 3] = [
    // x: M1/M3 against M2/M4
    [1.0, -1.0, 1.0, -1.0],
    // y: front pair against rear pair
    [1.0, 1.0, -1.0, -1.0],
    // z: collective; polarity of the z axis is not confirmed against the sensor
    [1.0, 1.0, 1.0, 1.0],
];

/// -1, 0 or +1 depending on which side of the dead band `error` lies
pub fn correction_direction(error: f32, tolerance: f32) -> f32 {
    if error.abs() > tolerance {
        error.signum()
    } else {
        0.0
    }
}

/// Motor command for one cycle from the per-axis tilt errors
///
/// Every cycle starts again from the hover value; nothing carries over.
pub fn mix(errors: &AxisReading, config: &LevelingConfig) -> MotorCommand {
    let mut command = MotorCommand::uniform(config.hover_pwm);

    for axis in Axis::ALL {
        let direction = correction_direction(errors.axis(axis), tolerance(config, axis));
        if direction == 0.0 {
            continue;
        }

        for (pwm, weight) in command.pwm.iter_mut().zip(MIXING_TABLE[axis.index()]) {
            *pwm += direction * CORRECTION_STEP * weight;
        }
    }

    command
}

fn tolerance(config: &LevelingConfig, axis: Axis) -> f32 {
    match axis {
        Axis::X => config.x_tolerance,
        Axis::Y => config.y_tolerance,
        Axis::Z => config.z_tolerance,
    }
}
