//! Fixed-point register encodings
//!
//! # Ambient temperature register
//!
//! ```text
//!  15    14    13    12   11 .. 4   3 .. 0
//! CRIT  UPPER LOWER SIGN  integer  fraction
//! ```
//!
//! The low 12 bits are sixteenths of a degree. The decode below follows the
//! sensor's sign-over-13-bits layout bit for bit; it is not a generic
//! two's-complement conversion.
//!
//! # Limit registers
//!
//! Same 13-bit field, but only quarter degrees are stored (bits 1:0 are
//! unused by the device).

/// Mask of the 13-bit limit field
pub const LIMIT_MASK: u16 = 0x1FFF;

/// Sign bit of the 13-bit limit field
const LIMIT_SIGN: u16 = 0x1000;

/// Limit field range in sixteenths, top end quarter-aligned
const MIN_LIMIT_SIXTEENTHS: i32 = -4096;
const MAX_LIMIT_SIXTEENTHS: i32 = 4092;

const STATUS_LOWER: u16 = 1 << 13;
const STATUS_UPPER: u16 = 1 << 14;
const STATUS_CRITICAL: u16 = 1 << 15;

/// Limit flags latched in the ambient temperature register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertStatus {
    /// Temperature below T_LOWER
    pub lower: bool,
    /// Temperature above T_UPPER
    pub upper: bool,
    /// Temperature at or above T_CRIT
    pub critical: bool,
}

impl AlertStatus {
    /// Parse from a raw ambient temperature register value
    pub const fn from_register(raw: u16) -> Self {
        Self {
            lower: raw & STATUS_LOWER != 0,
            upper: raw & STATUS_UPPER != 0,
            critical: raw & STATUS_CRITICAL != 0,
        }
    }

    /// Check if any limit has been crossed
    pub const fn any(&self) -> bool {
        self.lower || self.upper || self.critical
    }
}

/// Decode the ambient temperature register to °C
///
/// The three flag bits are ignored. When the sign bit is set the result is
/// `256 - magnitude`.
pub fn decode_temperature(raw: u16) -> f32 {
    let mut upper = ((raw >> 8) as u8) & 0x1F;
    let lower = raw as u8;

    if upper & 0x10 != 0 {
        upper &= 0x0F;
        256.0 - magnitude(upper, lower)
    } else {
        magnitude(upper, lower)
    }
}

fn magnitude(upper: u8, lower: u8) -> f32 {
    (upper as f32) * 16.0 + (lower as f32) / 16.0
}

/// Encode a limit in °C into a limit register value
///
/// The value is scaled to sixteenths and truncated; if either of the two
/// lowest bits is then set, it is bumped by one. Inputs that already sit on
/// a quarter degree pass through unchanged, anything else is biased upward.
/// Negative inputs come out in the device's 13-bit two's-complement form.
/// Inputs beyond the field saturate at -256.0 / +255.75 and NaN encodes as
/// zero.
pub fn encode_limit(celsius: f32) -> u16 {
    let mut sixteenths =
        ((celsius * 16.0) as i32).clamp(MIN_LIMIT_SIXTEENTHS, MAX_LIMIT_SIXTEENTHS);
    if sixteenths & 0x03 != 0 {
        sixteenths += 1;
    }
    (sixteenths as u16) & LIMIT_MASK
}

/// Decode a limit register value to °C
pub fn decode_limit(raw: u16) -> f32 {
    let field = raw & LIMIT_MASK;
    let sixteenths = if field & LIMIT_SIGN != 0 {
        field as i16 - 0x2000
    } else {
        field as i16
    };
    sixteenths as f32 / 16.0
}

/// Decode the limit flags of an ambient temperature register value
pub const fn decode_status(raw: u16) -> AlertStatus {
    AlertStatus::from_register(raw)
}
