//! Mock and simulated devices for testing and development

use crate::hardware::{
    Accelerometer, AxisReading, HardwareError, HardwareResult, LoopTimer, MotorCommand, MotorDriver,
};
use std::collections::VecDeque;

/// Accelerometer that replays queued samples
pub struct MockAccelerometer {
    name: String,
    readings: VecDeque<AxisReading>,
    reads: u32,
    connected: bool,
}

impl MockAccelerometer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            readings: VecDeque::new(),
            reads: 0,
            connected: true,
        }
    }

    /// Create a mock preloaded with samples, returned in order
    pub fn with_readings<I: IntoIterator<Item = AxisReading>>(name: &str, readings: I) -> Self {
        let mut mock = Self::new(name);
        mock.readings.extend(readings);
        mock
    }

    pub fn push_reading(&mut self, reading: AxisReading) {
        self.readings.push_back(reading);
    }

    /// Simulate connection loss
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Number of successful reads so far
    pub fn reads(&self) -> u32 {
        self.reads
    }

    pub fn queued_readings(&self) -> usize {
        self.readings.len()
    }
}

impl Accelerometer for MockAccelerometer {
    fn read_axes(&mut self) -> HardwareResult<AxisReading> {
        if !self.connected {
            return Err(HardwareError::Disconnected { device: self.name.clone() });
        }

        let reading = self
            .readings
            .pop_front()
            .ok_or_else(|| HardwareError::NoData { device: self.name.clone() })?;
        self.reads += 1;
        Ok(reading)
    }
}

/// Motor driver that records every command it receives
#[derive(Debug, Default)]
pub struct MockMotorDriver {
    commands: Vec<MotorCommand>,
    fail_writes: bool,
}

impl MockMotorDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn commands(&self) -> &[MotorCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&MotorCommand> {
        self.commands.last()
    }
}

impl MotorDriver for MockMotorDriver {
    fn write_command(&mut self, command: &MotorCommand) -> HardwareResult<()> {
        if self.fail_writes {
            return Err(HardwareError::WriteFailed {
                device: "mock motor driver".to_string(),
                details: "write rejected".to_string(),
            });
        }

        self.commands.push(*command);
        Ok(())
    }
}

/// Virtual clock; each `millis()` call advances time by a fixed work cost
#[derive(Debug, Default)]
pub struct MockTimer {
    now_ms: u64,
    work_ms: u64,
    delays: Vec<u64>,
}

impl MockTimer {
    /// `work_ms` is added after every `millis()` call, so a cycle that
    /// samples the clock at start and end appears to take `work_ms`
    pub fn new(work_ms: u64) -> Self {
        Self {
            now_ms: 0,
            work_ms,
            delays: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Every delay requested so far, in order
    pub fn delays(&self) -> &[u64] {
        &self.delays
    }
}

impl LoopTimer for MockTimer {
    fn millis(&mut self) -> u64 {
        let now = self.now_ms;
        self.now_ms += self.work_ms;
        now
    }

    fn delay_ms(&mut self, ms: u64) {
        self.delays.push(ms);
        self.now_ms += ms;
    }
}

/// Accelerometer producing a deterministic wobble around a rest reading
#[derive(Debug, Clone)]
pub struct SimulatedAccelerometer {
    rest: AxisReading,
    amplitude: f32,
    tick: u32,
}

impl SimulatedAccelerometer {
    pub fn new(rest: AxisReading, amplitude: f32) -> Self {
        Self { rest, amplitude, tick: 0 }
    }
}

impl Accelerometer for SimulatedAccelerometer {
    fn read_axes(&mut self) -> HardwareResult<AxisReading> {
        // First sample is the rest reading so calibration sees a level vehicle
        let t = self.tick as f32;
        self.tick = self.tick.wrapping_add(1);

        Ok(AxisReading::new(
            self.rest.x + self.amplitude * (t * 0.7).sin(),
            self.rest.y + self.amplitude * (t * 0.45).sin(),
            self.rest.z + 0.5 * self.amplitude * (t * 0.3).sin(),
        ))
    }
}
