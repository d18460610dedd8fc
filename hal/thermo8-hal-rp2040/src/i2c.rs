//! I2C bus driver for RP2040
//!
//! Wraps a blocking embassy-rp I2C master so the sensor driver can use it
//! through `thermo8_hal::I2cBus`. The wrapped peripheral already frames
//! write-then-read with a repeated start.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use thermo8_hal::{I2cBus, I2cConfig, I2cError, I2cErrorKind};

/// Build the embassy-rp I2C configuration for a bus speed
pub fn config(config: I2cConfig) -> embassy_rp::i2c::Config {
    let mut rp = embassy_rp::i2c::Config::default();
    rp.frequency = config.frequency;
    rp
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cBusError(I2cErrorKind);

impl I2cError for I2cBusError {
    fn kind(&self) -> I2cErrorKind {
        self.0
    }
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        Self(match kind {
            ErrorKind::NoAcknowledge(_) => I2cErrorKind::Nack,
            ErrorKind::ArbitrationLoss => I2cErrorKind::ArbitrationLost,
            ErrorKind::Bus => I2cErrorKind::Bus,
            ErrorKind::Overrun => I2cErrorKind::Overrun,
            _ => I2cErrorKind::Other,
        })
    }
}

/// Blocking I2C master
///
/// Typically wraps `embassy_rp::i2c::I2c<'d, I2C0, Blocking>`.
pub struct BlockingI2c<I> {
    inner: I,
}

impl<I: I2c> BlockingI2c<I> {
    /// Wrap an I2C master
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Give the peripheral back
    pub fn release(self) -> I {
        self.inner
    }
}

impl<I: I2c> I2cBus for BlockingI2c<I> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.inner
            .read(address, buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.inner
            .write_read(address, write_data, read_buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}
