//! Motor command sink
//!
//! Motor layout, seen from above:
//!
//! ```text
//!   M1    M2        +y (front)
//!    \    /          |
//!     \  /           |
//!      \/            +------> +x (right)
//!      /\
//!     /  \
//!   M3    M4
//! ```

use crate::hardware::HardwareResult;
use std::fmt;
use tracing::info;

pub const MOTOR_COUNT: usize = 4;

/// PWM values for M1..M4, in that order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorCommand {
    pub pwm: [f32; MOTOR_COUNT],
}

impl MotorCommand {
    /// Same value on every motor
    pub fn uniform(pwm: f32) -> Self {
        Self { pwm: [pwm; MOTOR_COUNT] }
    }
}

impl fmt::Display for MotorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M1 = {}, M2 = {}, M3 = {}, M4 = {}",
            self.pwm[0], self.pwm[1], self.pwm[2], self.pwm[3]
        )
    }
}

/// Consumer of motor commands
pub trait MotorDriver {
    fn write_command(&mut self, command: &MotorCommand) -> HardwareResult<()>;
}

/// Driver that only reports each command as a log event
#[derive(Debug, Default)]
pub struct LoggingMotorDriver {
    commands_written: u64,
}

impl LoggingMotorDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands_written(&self) -> u64 {
        self.commands_written
    }
}

impl MotorDriver for LoggingMotorDriver {
    fn write_command(&mut self, command: &MotorCommand) -> HardwareResult<()> {
        self.commands_written += 1;
        info!(
            m1 = command.pwm[0],
            m2 = command.pwm[1],
            m3 = command.pwm[2],
            m4 = command.pwm[3],
            "motor command"
        );
        Ok(())
    }
}
