//! Blocking delay on the embassy time driver

use embassy_time::{block_for, Duration};
use thermo8_hal::DelayMs;

/// Busy-waits using the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyDelay;

impl DelayMs for EmbassyDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
