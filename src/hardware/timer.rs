//! Millisecond clock and delay used to pace the control loop

use std::thread;
use std::time::{Duration, Instant};

/// Elapsed-time and blocking-delay facility
pub trait LoopTimer {
    /// Milliseconds since an arbitrary fixed origin
    fn millis(&mut self) -> u64;

    /// Block the caller for `ms` milliseconds
    fn delay_ms(&mut self, ms: u64);
}

/// Wall-clock timer backed by `Instant` and `thread::sleep`
#[derive(Debug)]
pub struct SystemTimer {
    origin: Instant,
}

impl SystemTimer {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopTimer for SystemTimer {
    fn millis(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn delay_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}
