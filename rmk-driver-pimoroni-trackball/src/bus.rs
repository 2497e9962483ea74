//! Register transport of the trackball

use embedded_hal::i2c::{Error as _, ErrorKind};
use embedded_hal_async::i2c::I2c;

use crate::registers::DEFAULT_ADDRESS;

/// Byte-wide register access to the trackball.
///
/// The driver only needs single register reads, so any transport which can read one byte
/// from a register address can drive the trackball.
pub trait RegisterBus {
    /// Read one byte from register `addr`
    async fn read_register(&mut self, addr: u8) -> Result<u8, ErrorKind>;

    /// Check whether the transport can reach the device
    async fn is_ready(&mut self) -> bool;
}

/// [`RegisterBus`] over an async I2C bus
pub struct I2cRegisterBus<I2C: I2c> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cRegisterBus<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create the bus with the factory default address
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cRegisterBus<I2C> {
    async fn read_register(&mut self, addr: u8) -> Result<u8, ErrorKind> {
        let mut value = [0u8];
        self.i2c
            .write_read(self.address, &[addr], &mut value)
            .await
            .map_err(|e| e.kind())?;
        Ok(value[0])
    }

    async fn is_ready(&mut self) -> bool {
        // Empty write, only the address is acked
        self.i2c.write(self.address, &[]).await.is_ok()
    }
}
