//! Thermo8 temperature sensor driver
//!
//! Register-level driver for the MCP9808-class digital temperature sensor on
//! the Thermo 8 board:
//!
//! - Register codec (ambient temperature, limit and status encodings)
//! - Transaction layer (pointer-plus-data I2C framing)
//! - Device operations (temperature, limits, alerts, locks, shutdown)
//!
//! The driver is blocking and holds no global state. Hardware access goes
//! through the traits in `thermo8-hal`.
//!
//! # Example
//!
//! ```ignore
//! use thermo8_driver::{AlertMode, Hysteresis, LimitRegister, Resolution, Thermo8};
//!
//! let mut sensor = Thermo8::new_i2c(i2c, thermo8_driver::DEFAULT_ADDRESS, alert_pin, delay);
//! sensor.set_resolution(Resolution::Quarter)?;
//! sensor.set_limit(LimitRegister::Lower, 27.0)?;
//! sensor.set_limit(LimitRegister::Upper, 28.0)?;
//! sensor.enable_alerts(Hysteresis::Zero, AlertMode::All)?;
//!
//! if sensor.alert_asserted() {
//!     let t = sensor.temperature()?;
//!     let status = sensor.alert_status();
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod device;
pub mod error;
pub mod interface;
pub mod registers;

#[cfg(test)]
mod mock;

pub use codec::{decode_limit, decode_status, decode_temperature, encode_limit, AlertStatus};
pub use config::{ConfigError, Thermo8Config};
pub use device::{Thermo8, SETTLE_DELAY_MS};
pub use error::{Error, Result};
pub use interface::{I2cInterface, RegisterInterface};
pub use registers::{
    address, AlertMode, ConfigWord, Hysteresis, LimitRegister, Register, RegisterWidth,
    Resolution, DEFAULT_ADDRESS,
};
