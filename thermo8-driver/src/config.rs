//! Sensor configuration
//!
//! A complete description of how the sensor should be set up, applied in
//! one go by [`Thermo8::configure`](crate::Thermo8::configure).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registers::{AlertMode, Hysteresis, Resolution, DEFAULT_ADDRESS, MAX_ADDRESS};

/// Lowest limit accepted by [`Thermo8Config::validate`] (°C)
pub const MIN_LIMIT_C: f32 = -40.0;

/// Highest limit accepted by [`Thermo8Config::validate`] (°C)
pub const MAX_LIMIT_C: f32 = 125.0;

/// Sensor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thermo8Config {
    /// 7-bit slave address (0x18-0x1F)
    pub address: u8,
    /// Conversion resolution
    pub resolution: Resolution,
    /// T_LOWER in °C
    pub lower_limit_c: f32,
    /// T_UPPER in °C
    pub upper_limit_c: f32,
    /// T_CRIT in °C
    pub critical_limit_c: f32,
    /// Limit hysteresis
    pub hysteresis: Hysteresis,
    /// Which limits drive the alert pin
    pub alert_mode: AlertMode,
    /// Enable the alert output
    pub alerts_enabled: bool,
    /// Lock T_CRIT after programming
    pub lock_critical: bool,
    /// Lock T_UPPER/T_LOWER after programming
    pub lock_window: bool,
}

impl Default for Thermo8Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            resolution: Resolution::Quarter,
            lower_limit_c: 27.0,
            upper_limit_c: 28.0,
            critical_limit_c: 30.0,
            hysteresis: Hysteresis::Zero,
            alert_mode: AlertMode::All,
            alerts_enabled: true,
            lock_critical: false,
            lock_window: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address outside 0x18-0x1F
    AddressOutOfRange(u8),
    /// A limit is outside the operating range or not a number
    LimitOutOfRange,
    /// Limits are not ordered lower < upper <= critical
    LimitOrder,
}

impl Thermo8Config {
    /// Check the configuration for values the sensor cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(DEFAULT_ADDRESS..=MAX_ADDRESS).contains(&self.address) {
            return Err(ConfigError::AddressOutOfRange(self.address));
        }

        let range = MIN_LIMIT_C..=MAX_LIMIT_C;
        for limit in [self.lower_limit_c, self.upper_limit_c, self.critical_limit_c] {
            // NaN fails `contains` as well
            if !range.contains(&limit) {
                return Err(ConfigError::LimitOutOfRange);
            }
        }

        if self.lower_limit_c >= self.upper_limit_c || self.upper_limit_c > self.critical_limit_c {
            return Err(ConfigError::LimitOrder);
        }

        Ok(())
    }
}
