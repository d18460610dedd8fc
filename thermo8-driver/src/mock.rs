//! Simulated sensor and board for tests
//!
//! `MockDevice` plays the sensor: it keeps a register file, honours the
//! register pointer the way the part does, and logs every bus transaction.

use heapless::Vec;
use thermo8_hal::{DelayMs, I2cBus, I2cErrorKind, InputPin};

use crate::registers::Register;

const MAX_TRANSACTIONS: usize = 64;

/// One bus transaction as seen by the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Plain write, stop-terminated
    Write { address: u8, data: Vec<u8, 4> },
    /// Plain read at the current pointer
    Read { address: u8, len: usize },
    /// Pointer write, repeated start, read, stop
    WriteRead { address: u8, pointer: u8, len: usize },
}

impl Transaction {
    pub fn write(address: u8, data: &[u8]) -> Self {
        Transaction::Write {
            address,
            data: Vec::from_slice(data).unwrap(),
        }
    }

    pub fn write_read(address: u8, pointer: u8, len: usize) -> Self {
        Transaction::WriteRead {
            address,
            pointer,
            len,
        }
    }
}

/// Register-level model of the sensor
pub struct MockDevice {
    registers: [u16; 9],
    pointer: u8,
    transactions: Vec<Transaction, MAX_TRANSACTIONS>,
    fail_next: Option<I2cErrorKind>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            registers: [0; 9],
            pointer: 0,
            transactions: Vec::new(),
            fail_next: None,
        }
    }

    /// Device with power-on IDs and default resolution
    pub fn with_ids() -> Self {
        let mut dev = Self::new();
        dev.set_register(Register::ManufacturerId, 0x0054);
        dev.set_register(Register::DeviceId, 0x0400);
        dev.set_register(Register::Resolution, 0x03);
        dev
    }

    pub fn register(&self, register: Register) -> u16 {
        self.registers[register.addr() as usize]
    }

    pub fn set_register(&mut self, register: Register, value: u16) {
        self.registers[register.addr() as usize] = value;
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Make the next transaction fail with `kind`
    pub fn fail_next(&mut self, kind: I2cErrorKind) {
        self.fail_next = Some(kind);
    }

    fn check_failure(&mut self) -> Result<(), I2cErrorKind> {
        match self.fail_next.take() {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }

    fn log(&mut self, transaction: Transaction) {
        self.transactions.push(transaction).unwrap();
    }

    fn fill(&self, buf: &mut [u8]) {
        let value = self.registers[self.pointer as usize];
        if self.pointer == Register::Resolution.addr() {
            buf.fill(value as u8);
        } else {
            for (byte, data) in buf.iter_mut().zip(value.to_be_bytes()) {
                *byte = data;
            }
        }
    }
}

impl I2cBus for MockDevice {
    type Error = I2cErrorKind;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.log(Transaction::write(address, data));

        let Some((&pointer, payload)) = data.split_first() else {
            return Ok(());
        };
        if pointer as usize >= self.registers.len() {
            return Err(I2cErrorKind::Nack);
        }
        self.pointer = pointer;

        let slot = &mut self.registers[pointer as usize];
        match payload {
            [hi, lo] => *slot = u16::from_be_bytes([*hi, *lo]),
            [byte] => *slot = *byte as u16,
            _ => {}
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.log(Transaction::Read {
            address,
            len: buf.len(),
        });
        self.fill(buf);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.check_failure()?;
        let pointer = write_data.first().copied().unwrap_or(self.pointer);
        self.log(Transaction::write_read(address, pointer, read_buf.len()));

        if pointer as usize >= self.registers.len() {
            return Err(I2cErrorKind::Nack);
        }
        self.pointer = pointer;
        self.fill(read_buf);
        Ok(())
    }
}

/// Alert line with a fixed level
pub struct MockPin(pub bool);

impl InputPin for MockPin {
    fn is_high(&self) -> bool {
        self.0
    }
}

/// Delay that records what it was asked for
#[derive(Default)]
pub struct MockDelay {
    pub calls: Vec<u32, 8>,
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms).unwrap();
    }
}
