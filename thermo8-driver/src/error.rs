//! Driver error type

use thermo8_hal::{I2cError, I2cErrorKind};

use crate::registers::{Register, RegisterWidth};

/// Errors reported by the driver
///
/// Transport failures are surfaced unchanged; the driver never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The device did not acknowledge its address or a data byte
    BusNack,
    /// The transport gave up waiting for the bus
    BusTimeout,
    /// Any other transport failure
    Bus(I2cErrorKind),
    /// Register accessed with the wrong transfer width
    InvalidRegisterWidth {
        /// Register that was addressed
        register: Register,
        /// Width the register actually has
        expected: RegisterWidth,
    },
    /// ID registers do not match the expected part
    UnknownDevice {
        /// MANUFACTURER_ID contents
        manufacturer_id: u16,
        /// DEVICE_ID contents
        device_id: u16,
    },
}

impl Error {
    /// Convert a transport error using its classification
    pub fn from_bus<E: I2cError>(err: E) -> Self {
        Self::from(err.kind())
    }
}

impl From<I2cErrorKind> for Error {
    fn from(kind: I2cErrorKind) -> Self {
        match kind {
            I2cErrorKind::Nack => Error::BusNack,
            I2cErrorKind::Timeout => Error::BusTimeout,
            other => Error::Bus(other),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BusNack => write!(f, "device did not acknowledge"),
            Error::BusTimeout => write!(f, "bus timeout"),
            Error::Bus(kind) => write!(f, "bus error: {:?}", kind),
            Error::InvalidRegisterWidth { register, expected } => {
                write!(f, "{:?} is a {:?} register", register, expected)
            }
            Error::UnknownDevice {
                manufacturer_id,
                device_id,
            } => write!(
                f,
                "unexpected device (manufacturer {:#06x}, device {:#06x})",
                manufacturer_id, device_id
            ),
        }
    }
}

/// Driver result type
pub type Result<T> = core::result::Result<T, Error>;
