//! GPIO for RP2040
//!
//! The sensor's ALERT output is open-drain, so the input needs a pull-up.

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;
use thermo8_hal::InputPin;

/// Sensor alert line
pub struct AlertInput<'d> {
    pin: Input<'d>,
}

impl<'d> AlertInput<'d> {
    /// Configure `pin` as a pulled-up input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl InputPin for AlertInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
