//! Device operations
//!
//! [`Thermo8`] is the public face of the driver. Every method maps to one or
//! more register transactions; nothing is retried and bus failures come back
//! unchanged.
//!
//! # Power modes
//!
//! ```text
//!          sleep()
//!  Active ─────────▶ Sleep
//!    ▲                 │
//!    └─────────────────┘
//!          wakeup()
//! ```
//!
//! Both transitions write CONFIG and then block for [`SETTLE_DELAY_MS`]
//! before returning. No register access is valid in between.

use thermo8_hal::{DelayMs, I2cBus, InputPin};

use crate::codec::{decode_limit, decode_status, decode_temperature, encode_limit, AlertStatus};
use crate::config::Thermo8Config;
use crate::error::{Error, Result};
use crate::interface::{I2cInterface, RegisterInterface};
use crate::registers::{
    AlertMode, ConfigWord, Hysteresis, LimitRegister, Register, Resolution, DEVICE_ID,
    MANUFACTURER_ID,
};

/// Wait after a shutdown/wakeup write before the device may be accessed
pub const SETTLE_DELAY_MS: u32 = 100;

/// CONFIG bits kept by [`Thermo8::enable_alerts_preserving`]
const PRESERVED_BITS: u16 =
    ConfigWord::WINDOW_LOCK | ConfigWord::CRITICAL_LOCK | ConfigWord::SHUTDOWN;

/// Temperature sensor driver
///
/// Owns the register interface, the alert input and a delay provider. The
/// limit flags from the most recent temperature read are cached here.
pub struct Thermo8<IF, PIN, D> {
    iface: IF,
    alert: PIN,
    delay: D,
    status: Option<AlertStatus>,
}

impl<B, PIN, D> Thermo8<I2cInterface<B>, PIN, D>
where
    B: I2cBus,
    PIN: InputPin,
    D: DelayMs,
{
    /// Create a driver for a sensor on an I2C bus at `address`
    pub fn new_i2c(bus: B, address: u8, alert: PIN, delay: D) -> Self {
        Self::new(I2cInterface::new(bus, address), alert, delay)
    }
}

impl<IF, PIN, D> Thermo8<IF, PIN, D>
where
    IF: RegisterInterface,
    PIN: InputPin,
    D: DelayMs,
{
    /// Create a driver over an existing register interface
    ///
    /// No bus traffic happens here.
    pub fn new(iface: IF, alert: PIN, delay: D) -> Self {
        Self {
            iface,
            alert,
            delay,
            status: None,
        }
    }

    /// Give back the interface, alert pin and delay
    pub fn release(self) -> (IF, PIN, D) {
        (self.iface, self.alert, self.delay)
    }

    /// Read the ambient temperature in °C
    ///
    /// The limit flags carried by the same register are cached and can be
    /// fetched afterwards with [`alert_status`](Self::alert_status).
    pub fn temperature(&mut self) -> Result<f32> {
        let raw = self.iface.read_word(Register::AmbientTemperature)?;
        let status = decode_status(raw);
        self.status = Some(status);

        let celsius = decode_temperature(raw);

        #[cfg(feature = "defmt")]
        defmt::trace!("ambient raw={=u16:#x} t={}C status={}", raw, celsius, status);

        Ok(celsius)
    }

    /// Limit flags from the last [`temperature`](Self::temperature) call
    ///
    /// Returns `None` until a temperature has been read. Never touches the
    /// bus.
    pub fn alert_status(&self) -> Option<AlertStatus> {
        self.status
    }

    /// Sample the alert line
    ///
    /// The driver leaves the output active-low, so this is `true` while the
    /// pin is pulled low.
    pub fn alert_asserted(&self) -> bool {
        self.alert.is_low()
    }

    /// Set the conversion resolution
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("resolution -> {}", resolution);

        self.iface.write_byte(Register::Resolution, resolution.code())
    }

    /// Read the conversion resolution
    pub fn resolution(&mut self) -> Result<Resolution> {
        let code = self.iface.read_byte(Register::Resolution)?;
        Ok(Resolution::from_code(code))
    }

    /// Program an alert limit in °C
    ///
    /// Values that do not fall on a quarter degree are biased upward, see
    /// [`encode_limit`].
    pub fn set_limit(&mut self, limit: LimitRegister, celsius: f32) -> Result<()> {
        let raw = encode_limit(celsius);

        #[cfg(feature = "defmt")]
        defmt::debug!("{} limit -> {}C (raw={=u16:#x})", limit, celsius, raw);

        self.iface.write_word(limit.register(), raw)
    }

    /// Read back an alert limit in °C
    pub fn limit(&mut self, limit: LimitRegister) -> Result<f32> {
        let raw = self.iface.read_word(limit.register())?;
        Ok(decode_limit(raw))
    }

    /// Enable the alert output, overwriting the whole CONFIG register
    ///
    /// Writes a freshly built word (see [`ConfigWord::alert_enable`]) without
    /// reading CONFIG first. Any lock or shutdown bit that was set is cleared
    /// by this call. Use
    /// [`enable_alerts_preserving`](Self::enable_alerts_preserving) to keep
    /// them.
    pub fn enable_alerts(&mut self, hysteresis: Hysteresis, mode: AlertMode) -> Result<()> {
        let word = ConfigWord::alert_enable(hysteresis, mode);

        #[cfg(feature = "defmt")]
        defmt::debug!("alerts on: {} {} (config={=u16:#x})", hysteresis, mode, word.bits());

        self.write_config(word)
    }

    /// Enable the alert output, keeping the lock and shutdown bits
    pub fn enable_alerts_preserving(
        &mut self,
        hysteresis: Hysteresis,
        mode: AlertMode,
    ) -> Result<()> {
        let fresh = ConfigWord::alert_enable(hysteresis, mode);
        self.update_config(|current| ConfigWord(fresh.bits() | (current.bits() & PRESERVED_BITS)))
            .map(|_| ())
    }

    /// Disable the alert output
    pub fn disable_alerts(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::ALERT_OUTPUT_ENABLE, false)
    }

    /// Read the CONFIG register
    pub fn config(&mut self) -> Result<ConfigWord> {
        self.iface.read_word(Register::Config).map(ConfigWord)
    }

    /// Lock T_CRIT against writes
    pub fn lock_critical(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::CRITICAL_LOCK, true)
    }

    /// Unlock T_CRIT
    pub fn unlock_critical(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::CRITICAL_LOCK, false)
    }

    /// Lock T_UPPER and T_LOWER against writes
    pub fn lock_window(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::WINDOW_LOCK, true)
    }

    /// Unlock T_UPPER and T_LOWER
    pub fn unlock_window(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::WINDOW_LOCK, false)
    }

    /// Enter low-power shutdown
    ///
    /// Blocks for [`SETTLE_DELAY_MS`] after the write.
    pub fn sleep(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::SHUTDOWN, true)?;
        self.delay.delay_ms(SETTLE_DELAY_MS);
        Ok(())
    }

    /// Leave low-power shutdown
    ///
    /// Blocks for [`SETTLE_DELAY_MS`] after the write.
    pub fn wakeup(&mut self) -> Result<()> {
        self.set_config_bits(ConfigWord::SHUTDOWN, false)?;
        self.delay.delay_ms(SETTLE_DELAY_MS);
        Ok(())
    }

    /// Check whether the device is in shutdown
    pub fn is_sleeping(&mut self) -> Result<bool> {
        Ok(self.config()?.is_shutdown())
    }

    /// Read the DEVICE_ID register (ID in the high byte, revision in the low)
    pub fn device_id(&mut self) -> Result<u16> {
        self.iface.read_word(Register::DeviceId)
    }

    /// Read the MANUFACTURER_ID register
    pub fn manufacturer_id(&mut self) -> Result<u16> {
        self.iface.read_word(Register::ManufacturerId)
    }

    /// Check that the expected part answers, returning its revision
    pub fn probe(&mut self) -> Result<u8> {
        let manufacturer_id = self.manufacturer_id()?;
        let device_id = self.device_id()?;

        if manufacturer_id != MANUFACTURER_ID || (device_id >> 8) as u8 != DEVICE_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "unexpected ids: manufacturer={=u16:#x} device={=u16:#x}",
                manufacturer_id,
                device_id
            );

            return Err(Error::UnknownDevice {
                manufacturer_id,
                device_id,
            });
        }

        Ok(device_id as u8)
    }

    /// Apply a complete configuration
    ///
    /// Order: resolution, lower/upper/critical limits, CONFIG (full write),
    /// then the requested locks. The slave address in `config` is not used
    /// here; it selects the device when the driver is built.
    pub fn configure(&mut self, config: &Thermo8Config) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "applying {} (step {}C, {} ms/conversion, dead-band {}C)",
            config,
            config.resolution.step_celsius(),
            config.resolution.conversion_time_ms(),
            config.hysteresis.celsius()
        );

        self.set_resolution(config.resolution)?;
        self.set_limit(LimitRegister::Lower, config.lower_limit_c)?;
        self.set_limit(LimitRegister::Upper, config.upper_limit_c)?;
        self.set_limit(LimitRegister::Critical, config.critical_limit_c)?;

        let word = ConfigWord::alert_enable(config.hysteresis, config.alert_mode)
            .with(ConfigWord::ALERT_OUTPUT_ENABLE, config.alerts_enabled);
        self.write_config(word)?;

        if config.lock_critical {
            self.lock_critical()?;
        }
        if config.lock_window {
            self.lock_window()?;
        }
        Ok(())
    }

    fn write_config(&mut self, word: ConfigWord) -> Result<()> {
        self.iface.write_word(Register::Config, word.bits())
    }

    /// Read-modify-write CONFIG
    fn update_config<F>(&mut self, f: F) -> Result<ConfigWord>
    where
        F: FnOnce(ConfigWord) -> ConfigWord,
    {
        let current = self.config()?;
        let updated = f(current);

        #[cfg(feature = "defmt")]
        defmt::debug!("config {=u16:#x} -> {=u16:#x}", current.bits(), updated.bits());

        self.write_config(updated)?;
        Ok(updated)
    }

    fn set_config_bits(&mut self, mask: u16, set: bool) -> Result<()> {
        self.update_config(|current| current.with(mask, set))
            .map(|_| ())
    }
}
