//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::OpenLogInterface;

/// I2C-based interface implementation for the Qwiic OpenLog driver.
///
/// The bus must already be clocked and pinned out by the caller. Pass `&mut I2C`
/// to keep ownership, or an `embedded-hal-bus` device to share the bus.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus abstraction.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> OpenLogInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    fn write_read(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> core::result::Result<(), Self::Error> {
        self.i2c
            .write_read(address, core::slice::from_ref(&register), buf)
    }
}
