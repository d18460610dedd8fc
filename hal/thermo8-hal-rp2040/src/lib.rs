//! RP2040-specific HAL for the Thermo8 firmware
//!
//! This crate provides RP2040 implementations of the shared `thermo8-hal`
//! traits on top of embassy-rp:
//!
//! - Blocking I2C master (implements `thermo8_hal::I2cBus`)
//! - Alert input pin (implements `thermo8_hal::InputPin`)
//! - Busy-wait delay on the embassy time driver (implements `thermo8_hal::DelayMs`)

#![no_std]

pub mod delay;
pub mod gpio;
pub mod i2c;

pub use delay::EmbassyDelay;
pub use gpio::AlertInput;
pub use i2c::{BlockingI2c, I2cBusError};

// Re-export shared traits from thermo8-hal for convenience
pub use thermo8_hal::{DelayMs, I2cBus, InputPin};
