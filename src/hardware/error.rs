//! Sensor and actuator error types

use thiserror::Error;

/// Failures reported by the accelerometer, motor driver or their mocks
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HardwareError {
    /// Sensor returned an error instead of a sample
    #[error("Sensor read failed on {device}: {details}")]
    ReadFailed { device: String, details: String },
    /// Actuator rejected a command
    #[error("Actuator write failed on {device}: {details}")]
    WriteFailed { device: String, details: String },
    /// Device is no longer reachable
    #[error("Device {device} disconnected")]
    Disconnected { device: String },
    /// Source has no further samples
    #[error("No sample available from {device}")]
    NoData { device: String },
}

/// Result type for hardware operations
pub type HardwareResult<T> = Result<T, HardwareError>;
