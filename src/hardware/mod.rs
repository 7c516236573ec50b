//! Hardware abstraction for the leveling controller
//!
//! The controller only sees these traits; real drivers plug in behind them.

pub mod accelerometer;
pub mod motors;
pub mod timer;
pub mod mock;
pub mod error;

pub use accelerometer::{Accelerometer, Axis, AxisReading};
pub use motors::{LoggingMotorDriver, MotorCommand, MotorDriver, MOTOR_COUNT};
pub use timer::{LoopTimer, SystemTimer};
pub use mock::{MockAccelerometer, MockMotorDriver, MockTimer, SimulatedAccelerometer};
pub use error::{HardwareError, HardwareResult};
