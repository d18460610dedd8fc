//! Register map and register-level field encodings
//!
//! The sensor exposes eight registers behind a one-byte pointer. All of them
//! are 16 bits wide and big-endian on the wire, except the resolution
//! register which is a single byte.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default 7-bit slave address (A2..A0 tied low)
pub const DEFAULT_ADDRESS: u8 = 0x18;

/// Highest address reachable through the address pins
pub const MAX_ADDRESS: u8 = DEFAULT_ADDRESS | 0x07;

/// Expected MANUFACTURER_ID register contents
pub const MANUFACTURER_ID: u16 = 0x0054;

/// Expected high byte of the DEVICE_ID register (low byte is the revision)
pub const DEVICE_ID: u8 = 0x04;

/// Slave address for a given A2..A0 pin strapping
///
/// Only the low three bits of `pins` are used.
pub const fn address(pins: u8) -> u8 {
    DEFAULT_ADDRESS | (pins & 0x07)
}

/// Register width on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterWidth {
    /// Single data byte
    Byte,
    /// Two data bytes, most significant first
    Word,
}

/// Register pointer addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Alert, lock, hysteresis and shutdown configuration
    Config = 0x01,
    /// Upper alert limit
    TUpper = 0x02,
    /// Lower alert limit
    TLower = 0x03,
    /// Critical alert limit
    TCrit = 0x04,
    /// Ambient temperature plus latched limit flags
    AmbientTemperature = 0x05,
    /// Manufacturer ID (read-only)
    ManufacturerId = 0x06,
    /// Device ID and revision (read-only)
    DeviceId = 0x07,
    /// Conversion resolution
    Resolution = 0x08,
}

impl Register {
    /// Pointer byte sent on the bus
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Width of the register contents
    pub const fn width(self) -> RegisterWidth {
        match self {
            Register::Resolution => RegisterWidth::Byte,
            _ => RegisterWidth::Word,
        }
    }
}

/// Measurement resolution
///
/// Finer steps take longer per conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Resolution {
    /// 0.5°C, 30 ms
    Half = 0x00,
    /// 0.25°C, 65 ms
    Quarter = 0x01,
    /// 0.125°C, 130 ms
    Eighth = 0x02,
    /// 0.0625°C, 250 ms (power-on default)
    #[default]
    Sixteenth = 0x03,
}

impl Resolution {
    /// Register code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a resolution register value (upper bits are ignored)
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0x00 => Resolution::Half,
            0x01 => Resolution::Quarter,
            0x02 => Resolution::Eighth,
            _ => Resolution::Sixteenth,
        }
    }

    /// Temperature step in °C
    pub const fn step_celsius(self) -> f32 {
        match self {
            Resolution::Half => 0.5,
            Resolution::Quarter => 0.25,
            Resolution::Eighth => 0.125,
            Resolution::Sixteenth => 0.0625,
        }
    }

    /// Typical conversion time in milliseconds
    pub const fn conversion_time_ms(self) -> u32 {
        match self {
            Resolution::Half => 30,
            Resolution::Quarter => 65,
            Resolution::Eighth => 130,
            Resolution::Sixteenth => 250,
        }
    }
}

/// Hysteresis applied to the upper and lower limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Hysteresis {
    /// 0°C
    #[default]
    Zero = 0x00,
    /// 1.5°C
    OneAndHalf = 0x01,
    /// 3°C
    Three = 0x02,
    /// 6°C
    Six = 0x03,
}

impl Hysteresis {
    /// 2-bit selector
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a 2-bit selector (upper bits are ignored)
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0x00 => Hysteresis::Zero,
            0x01 => Hysteresis::OneAndHalf,
            0x02 => Hysteresis::Three,
            _ => Hysteresis::Six,
        }
    }

    /// Dead-band in °C
    pub const fn celsius(self) -> f32 {
        match self {
            Hysteresis::Zero => 0.0,
            Hysteresis::OneAndHalf => 1.5,
            Hysteresis::Three => 3.0,
            Hysteresis::Six => 6.0,
        }
    }
}

/// Which limits drive the alert output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlertMode {
    /// Upper, lower and critical limits
    #[default]
    All,
    /// Critical limit only
    CriticalOnly,
}

/// Limit register selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitRegister {
    /// T_UPPER
    Upper,
    /// T_LOWER
    Lower,
    /// T_CRIT
    Critical,
}

impl LimitRegister {
    /// Backing register
    pub const fn register(self) -> Register {
        match self {
            LimitRegister::Upper => Register::TUpper,
            LimitRegister::Lower => Register::TLower,
            LimitRegister::Critical => Register::TCrit,
        }
    }
}

/// CONFIG register contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigWord(pub u16);

impl ConfigWord {
    /// Alert output in interrupt mode (vs. comparator)
    pub const ALERT_MODE_INTERRUPT: u16 = 1 << 0;
    /// Alert output active-high (vs. active-low)
    pub const ALERT_POLARITY_HIGH: u16 = 1 << 1;
    /// Alert output for critical limit only
    pub const ALERT_CRITICAL_ONLY: u16 = 1 << 2;
    /// Alert output enabled
    pub const ALERT_OUTPUT_ENABLE: u16 = 1 << 3;
    /// Alert output asserted
    pub const ALERT_STATUS: u16 = 1 << 4;
    /// Clear interrupt
    pub const INTERRUPT_CLEAR: u16 = 1 << 5;
    /// T_UPPER/T_LOWER locked
    pub const WINDOW_LOCK: u16 = 1 << 6;
    /// T_CRIT locked
    pub const CRITICAL_LOCK: u16 = 1 << 7;
    /// Shutdown (low-power) mode
    pub const SHUTDOWN: u16 = 1 << 8;

    const HYSTERESIS_SHIFT: u16 = 9;
    const HYSTERESIS_MASK: u16 = 0x03 << Self::HYSTERESIS_SHIFT;

    /// Word written by the alert enable operation
    ///
    /// Interrupt mode, output enable and the status bit are always set, the
    /// critical-only bit follows `mode`, the hysteresis selector goes to bits
    /// 10:9 and every other bit is zero.
    pub const fn alert_enable(hysteresis: Hysteresis, mode: AlertMode) -> Self {
        let mut bits =
            Self::ALERT_MODE_INTERRUPT | Self::ALERT_OUTPUT_ENABLE | Self::ALERT_STATUS;
        if let AlertMode::CriticalOnly = mode {
            bits |= Self::ALERT_CRITICAL_ONLY;
        }
        bits |= (hysteresis.code() as u16) << Self::HYSTERESIS_SHIFT;
        Self(bits)
    }

    /// Raw register value
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check whether every bit in `mask` is set
    pub const fn contains(self, mask: u16) -> bool {
        self.0 & mask == mask
    }

    /// Copy with the bits in `mask` set or cleared
    #[must_use]
    pub const fn with(self, mask: u16, set: bool) -> Self {
        if set {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        }
    }

    /// Hysteresis selector
    pub const fn hysteresis(self) -> Hysteresis {
        Hysteresis::from_code((self.0 >> Self::HYSTERESIS_SHIFT) as u8)
    }

    /// Copy with a different hysteresis selector
    #[must_use]
    pub const fn with_hysteresis(self, hysteresis: Hysteresis) -> Self {
        let selector = (hysteresis.code() as u16) << Self::HYSTERESIS_SHIFT;
        Self((self.0 & !Self::HYSTERESIS_MASK) | selector)
    }

    /// Alert mode selected by the critical-only bit
    pub const fn alert_mode(self) -> AlertMode {
        if self.0 & Self::ALERT_CRITICAL_ONLY != 0 {
            AlertMode::CriticalOnly
        } else {
            AlertMode::All
        }
    }

    /// Device is in shutdown
    pub const fn is_shutdown(self) -> bool {
        self.contains(Self::SHUTDOWN)
    }
}
