//! Register transaction layer
//!
//! Frames register accesses for the bus:
//!
//! - Write: `[pointer][data_hi][data_lo]` (or `[pointer][data]`), stop
//! - Read: `[pointer]` followed by a repeated start, then the data bytes
//!   are read and the transfer ends with a stop
//!
//! All accesses go to the one slave address the interface was built with.
//! There is no locking; callers must not interleave transactions.

use thermo8_hal::I2cBus;

use crate::error::{Error, Result};
use crate::registers::{Register, RegisterWidth};

/// Register-level access to the sensor
///
/// One implementation exists per bus kind. The device operations only talk
/// to this trait, so the bus is chosen when the driver is constructed.
pub trait RegisterInterface {
    /// Write a 16-bit register
    fn write_word(&mut self, register: Register, value: u16) -> Result<()>;

    /// Write an 8-bit register
    fn write_byte(&mut self, register: Register, value: u8) -> Result<()>;

    /// Read a 16-bit register
    fn read_word(&mut self, register: Register) -> Result<u16>;

    /// Read an 8-bit register
    fn read_byte(&mut self, register: Register) -> Result<u8>;
}

fn check_width(register: Register, width: RegisterWidth) -> Result<()> {
    if register.width() == width {
        Ok(())
    } else {
        Err(Error::InvalidRegisterWidth {
            register,
            expected: register.width(),
        })
    }
}

/// I2C register interface
pub struct I2cInterface<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> I2cInterface<B> {
    /// Create an interface for the device at `address` (7-bit)
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Slave address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::trace!("i2c {=u8:#x} write {=[u8]:#x}", self.address, frame);

        self.bus
            .write(self.address, frame)
            .map_err(Error::from_bus)
    }

    fn read_frame(&mut self, register: Register, buf: &mut [u8]) -> Result<()> {
        self.bus
            .write_read(self.address, &[register.addr()], buf)
            .map_err(Error::from_bus)?;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "i2c {=u8:#x} read {=u8:#x} -> {=[u8]:#x}",
            self.address,
            register.addr(),
            buf
        );

        Ok(())
    }
}

impl<B: I2cBus> RegisterInterface for I2cInterface<B> {
    fn write_word(&mut self, register: Register, value: u16) -> Result<()> {
        check_width(register, RegisterWidth::Word)?;
        let [hi, lo] = value.to_be_bytes();
        self.write_frame(&[register.addr(), hi, lo])
    }

    fn write_byte(&mut self, register: Register, value: u8) -> Result<()> {
        check_width(register, RegisterWidth::Byte)?;
        self.write_frame(&[register.addr(), value])
    }

    fn read_word(&mut self, register: Register) -> Result<u16> {
        check_width(register, RegisterWidth::Word)?;
        let mut buf = [0u8; 2];
        self.read_frame(register, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn read_byte(&mut self, register: Register) -> Result<u8> {
        check_width(register, RegisterWidth::Byte)?;
        let mut buf = [0u8; 1];
        self.read_frame(register, &mut buf)?;
        Ok(buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDevice, Transaction};
    use thermo8_hal::I2cErrorKind;

    #[test]
    fn test_write_word_frame() {
        let mut iface = I2cInterface::new(MockDevice::new(), 0x18);
        iface.write_word(Register::TUpper, 0x01C0).unwrap();

        let bus = iface.release();
        assert_eq!(
            bus.transactions(),
            &[Transaction::write(0x18, &[0x02, 0x01, 0xC0])]
        );
        assert_eq!(bus.register(Register::TUpper), 0x01C0);
    }

    #[test]
    fn test_write_byte_frame() {
        let mut iface = I2cInterface::new(MockDevice::new(), 0x1A);
        iface.write_byte(Register::Resolution, 0x01).unwrap();

        let bus = iface.release();
        assert_eq!(
            bus.transactions(),
            &[Transaction::write(0x1A, &[0x08, 0x01])]
        );
    }

    #[test]
    fn test_read_word_uses_repeated_start() {
        let mut bus = MockDevice::new();
        bus.set_register(Register::ManufacturerId, 0x0054);
        let mut iface = I2cInterface::new(bus, 0x18);

        assert_eq!(iface.read_word(Register::ManufacturerId).unwrap(), 0x0054);

        let bus = iface.release();
        assert_eq!(
            bus.transactions(),
            &[Transaction::write_read(0x18, 0x06, 2)]
        );
    }

    #[test]
    fn test_read_word_is_big_endian() {
        let mut bus = MockDevice::new();
        bus.set_register(Register::AmbientTemperature, 0xC1A4);
        let mut iface = I2cInterface::new(bus, 0x18);

        assert_eq!(
            iface.read_word(Register::AmbientTemperature).unwrap(),
            0xC1A4
        );
    }

    #[test]
    fn test_read_byte() {
        let mut bus = MockDevice::new();
        bus.set_register(Register::Resolution, 0x02);
        let mut iface = I2cInterface::new(bus, 0x18);

        assert_eq!(iface.read_byte(Register::Resolution).unwrap(), 0x02);
        assert_eq!(
            iface.release().transactions(),
            &[Transaction::write_read(0x18, 0x08, 1)]
        );
    }

    #[test]
    fn test_width_mismatch_never_reaches_bus() {
        let mut iface = I2cInterface::new(MockDevice::new(), 0x18);

        assert_eq!(
            iface.write_byte(Register::Config, 0x00),
            Err(Error::InvalidRegisterWidth {
                register: Register::Config,
                expected: RegisterWidth::Word,
            })
        );
        assert_eq!(
            iface.read_word(Register::Resolution),
            Err(Error::InvalidRegisterWidth {
                register: Register::Resolution,
                expected: RegisterWidth::Byte,
            })
        );
        assert!(iface.release().transactions().is_empty());
    }

    #[test]
    fn test_bus_errors_propagate() {
        let mut bus = MockDevice::new();
        bus.fail_next(I2cErrorKind::Nack);
        let mut iface = I2cInterface::new(bus, 0x18);
        assert_eq!(iface.read_word(Register::DeviceId), Err(Error::BusNack));

        let mut bus = iface.release();
        bus.fail_next(I2cErrorKind::Timeout);
        let mut iface = I2cInterface::new(bus, 0x18);
        assert_eq!(
            iface.write_word(Register::TCrit, 0x01E0),
            Err(Error::BusTimeout)
        );
        // Failed write leaves the register untouched
        assert_eq!(iface.release().register(Register::TCrit), 0);
    }
}
