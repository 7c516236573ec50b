//! Leveling controller state machine
//!
//! `Calibrating` captures one baseline sample after a settle delay, then the
//! controller stays in `Hovering` for the rest of its life. Each hovering
//! cycle reads the accelerometer, mixes the per-axis error onto the motors,
//! writes the command and sleeps out the rest of the loop period. Any
//! hardware failure ends the loop.

use crate::control::mixer::mix;
use crate::hardware::{Accelerometer, AxisReading, HardwareError, LoopTimer, MotorCommand, MotorDriver};
use crate::utils::{ConfigError, LevelingConfig};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Time given to the operator to set the vehicle down level (ms)
pub const CALIBRATION_SETTLE_MS: u64 = 500;

/// Accelerometer reading taken on a level surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationBaseline(AxisReading);

impl CalibrationBaseline {
    pub fn reading(&self) -> AxisReading {
        self.0
    }

    /// Tilt error of `current` relative to the baseline
    pub fn error_of(&self, current: AxisReading) -> AxisReading {
        current - self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    Calibrating,
    Hovering { baseline: CalibrationBaseline },
}

/// Outcome of a single hovering cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub reading: AxisReading,
    pub errors: AxisReading,
    pub command: MotorCommand,
    /// Time spent reading, mixing and writing (ms)
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error(transparent)]
    Hardware(#[from] HardwareError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Controller has not been calibrated")]
    NotCalibrated,
    #[error("Controller is already calibrated")]
    AlreadyCalibrated,
}

pub type ControlResult<T> = Result<T, ControlError>;

pub struct LevelingController<A, M, T> {
    config: LevelingConfig,
    accelerometer: A,
    motors: M,
    timer: T,
    state: ControllerState,
}

impl<A: Accelerometer, M: MotorDriver, T: LoopTimer> LevelingController<A, M, T> {
    pub fn new(config: LevelingConfig, accelerometer: A, motors: M, timer: T) -> ControlResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            accelerometer,
            motors,
            timer,
            state: ControllerState::Calibrating,
        })
    }

    pub fn config(&self) -> &LevelingConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn accelerometer(&self) -> &A {
        &self.accelerometer
    }

    pub fn motors(&self) -> &M {
        &self.motors
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Wait for the vehicle to settle and capture the baseline
    ///
    /// Only valid once. The surface is trusted to be level.
    pub fn calibrate(&mut self) -> ControlResult<CalibrationBaseline> {
        if let ControllerState::Hovering { .. } = self.state {
            return Err(ControlError::AlreadyCalibrated);
        }

        info!(settle_ms = CALIBRATION_SETTLE_MS, "calibrating, keep the vehicle level");
        self.timer.delay_ms(CALIBRATION_SETTLE_MS);

        let baseline = CalibrationBaseline(self.accelerometer.read_axes()?);
        info!(baseline = %baseline.reading(), "calibration complete");

        self.state = ControllerState::Hovering { baseline };
        Ok(baseline)
    }

    /// Run one hovering cycle, including the end-of-period delay
    pub fn step(&mut self) -> ControlResult<CycleReport> {
        let baseline = match self.state {
            ControllerState::Hovering { baseline } => baseline,
            ControllerState::Calibrating => return Err(ControlError::NotCalibrated),
        };

        let start = self.timer.millis();

        let reading = self.accelerometer.read_axes()?;
        let errors = baseline.error_of(reading);
        debug!(%reading, %errors, "tilt sample");

        let command = mix(&errors, &self.config);
        self.motors.write_command(&command)?;

        let elapsed_ms = self.timer.millis().saturating_sub(start);
        let period_ms = self.config.loop_period_ms;
        if elapsed_ms < period_ms {
            self.timer.delay_ms(period_ms - elapsed_ms);
        } else if elapsed_ms > period_ms {
            warn!(elapsed_ms, period_ms, "control cycle overran its period");
        }

        Ok(CycleReport {
            reading,
            errors,
            command,
            elapsed_ms,
        })
    }

    /// Calibrate if needed, then hover until a hardware failure
    pub fn run(&mut self) -> ControlResult<()> {
        if self.state == ControllerState::Calibrating {
            self.calibrate()?;
        }

        loop {
            self.step()?;
        }
    }

    /// Calibrate if needed, then hover for a fixed number of cycles
    pub fn run_for(&mut self, cycles: u64) -> ControlResult<Vec<CycleReport>> {
        if self.state == ControllerState::Calibrating {
            self.calibrate()?;
        }

        (0..cycles).map(|_| self.step()).collect()
    }
}
