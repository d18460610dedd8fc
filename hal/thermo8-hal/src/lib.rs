//! Thermo8 Hardware Abstraction Layer
//!
//! This crate defines the narrow set of hardware traits the sensor driver
//! depends on. Chip-specific HALs implement them, and tests implement them
//! with simulated devices.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (thermo8-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermo8-driver (codec + transactions)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermo8-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ thermo8-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master transactions
//! - [`i2c::I2cError`] - Classification of bus failures
//! - [`gpio::InputPin`] - Digital input (sensor alert line)
//! - [`delay::DelayMs`] - Blocking millisecond delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cConfig, I2cError, I2cErrorKind};
