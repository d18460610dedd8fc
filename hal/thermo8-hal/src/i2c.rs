//! I2C bus abstractions
//!
//! The bus seam between the sensor driver and a chip HAL, plus the error
//! classification every HAL maps its failures onto.

/// Coarse classification of an I2C failure
///
/// Chip HALs report many different error shapes. Drivers only need to know
/// which of these buckets a failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cErrorKind {
    /// Address or data byte was not acknowledged
    Nack,
    /// Transaction did not complete in time
    Timeout,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Misplaced start/stop or other bus-level fault
    Bus,
    /// Data overrun/underrun
    Overrun,
    /// Anything else
    Other,
}

/// Error type returned by an [`I2cBus`] implementation
pub trait I2cError: core::fmt::Debug {
    /// Classify this error
    fn kind(&self) -> I2cErrorKind;
}

impl I2cError for I2cErrorKind {
    fn kind(&self) -> I2cErrorKind {
        *self
    }
}

/// Blocking I2C master as the sensor driver sees it
///
/// Each call is one complete bus transaction addressed to a 7-bit slave.
/// Register devices are driven by writing a pointer byte first; `write`
/// carries the pointer plus payload, `write_read` loads the pointer and
/// reads back through a repeated start.
pub trait I2cBus {
    /// Transport failure, classified through [`I2cError::kind`]
    type Error: I2cError;

    /// Send `data` to `address`, ending with a stop
    ///
    /// For a register write `data` is the pointer byte followed by the
    /// register contents, most significant byte first.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` from `address` at the device's current pointer
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Send `write_data`, then read `read_buf.len()` bytes without releasing
    /// the bus in between
    ///
    /// No stop is issued between the phases, so the pointer carried in
    /// `write_data` selects the register that `read_buf` receives.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        T::write_read(self, address, write_data, read_buf)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
