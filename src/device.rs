//! High-level Qwiic OpenLog device driver implementation.

use core::fmt;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::OpenLogInterface;
use crate::interface::i2c::I2cInterface;
use crate::params::DeviceAddress;
use crate::registers::READ_FAILED;
use embedded_hal::i2c::I2c;

/// High-level synchronous driver for the Qwiic OpenLog.
///
/// Every operation is one or more blocking bus transactions. The plain
/// operations report failure through their return value (`0`, `false` or
/// [`READ_FAILED`]); the `try_` variants return the bus error instead.
pub struct QwiicOpenLog<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> QwiicOpenLog<IFACE> {
    // ==================================================================
    // == Driver Ownership ==============================================
    // ==================================================================
    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the address subsequent operations target.
    pub fn address(&self) -> DeviceAddress {
        self.config.address
    }

    /// Changes the address subsequent operations target.
    pub fn set_address(&mut self, address: DeviceAddress) {
        self.config.address = address;
    }

    /// Turns per-transaction trace diagnostics on or off.
    pub fn set_debug(&mut self, enabled: bool) {
        self.config.debug = enabled;
    }
}

impl<I2C> QwiicOpenLog<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, config: Config) -> Result<Self, I2C::Error> {
        Self::new(I2cInterface::new(i2c), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> QwiicOpenLog<IFACE>
where
    IFACE: OpenLogInterface<Error = CommE>,
{
    // ==================================================================
    // == Construction & Configuration ==================================
    // ==================================================================
    /// Creates a driver bound to an already initialized interface.
    ///
    /// No bus traffic is generated; the device is not probed.
    pub fn new(interface: IFACE, config: Config) -> Result<Self, CommE> {
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(Self { interface, config })
    }

    /// Replaces the active configuration.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        config.validate().map_err(Error::InvalidConfig)?;
        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Raw Byte Stream ===============================================
    // ==================================================================
    /// Sends one byte. Returns `1` if the device acknowledged, `0` otherwise.
    pub fn write_byte(&mut self, value: u8) -> usize {
        match self.transmit(core::slice::from_ref(&value)) {
            Ok(()) => 1,
            Err(_) => {
                warn!("openlog: device did not ack");
                0
            }
        }
    }

    /// Sends `buffer` in transfer-limit sized transactions.
    ///
    /// Returns `buffer.len()` when every chunk was acknowledged. Stops at the
    /// first chunk that was not and returns `0`; chunks already sent stay sent.
    pub fn write_buffer(&mut self, buffer: &[u8]) -> usize {
        self.try_write_buffer(buffer).unwrap_or(0)
    }

    /// Like [`write_buffer`](Self::write_buffer) but returns the bus error of
    /// the failing chunk.
    pub fn try_write_buffer(&mut self, buffer: &[u8]) -> Result<usize, CommE> {
        let limit = self.config.transfer_limit;
        for (index, chunk) in buffer.chunks(limit).enumerate() {
            if self.config.debug {
                debug!(
                    "openlog: chunk {} at offset {} ({} bytes)",
                    index,
                    index * limit,
                    chunk.len()
                );
            }
            self.transmit(chunk)?;
        }

        Ok(buffer.len())
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Reads one register, or returns [`READ_FAILED`] if the transaction failed.
    ///
    /// A register that genuinely holds `0xFF` is indistinguishable from a
    /// failure here; use [`try_read_register`](Self::try_read_register) when
    /// that matters.
    pub fn read_register(&mut self, register: u8) -> u8 {
        self.try_read_register(register).unwrap_or(READ_FAILED)
    }

    /// Reads one register using a repeated start between address and data.
    pub fn try_read_register(&mut self, register: u8) -> Result<u8, CommE> {
        let mut value = [0u8; 1];
        self.interface
            .write_read(self.config.address.get(), register, &mut value)
            .map_err(Error::from)?;

        if self.config.debug {
            debug!("openlog: read reg {=u8:#x} -> {=u8:#x}", register, value[0]);
        }
        Ok(value[0])
    }

    /// Writes `value` to `register`. Returns whether the device acknowledged.
    pub fn write_register(&mut self, register: u8, value: u8) -> bool {
        self.try_write_register(register, value).is_ok()
    }

    /// Writes `value` to `register` in a single transaction.
    pub fn try_write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        if self.config.debug {
            debug!("openlog: write reg {=u8:#x} <- {=u8:#x}", register, value);
        }
        self.transmit(&[register, value])
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), CommE> {
        self.interface
            .write(self.config.address.get(), bytes)
            .map_err(Error::from)
    }
}

impl<IFACE, CommE> fmt::Write for QwiicOpenLog<IFACE>
where
    IFACE: OpenLogInterface<Error = CommE>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.write_buffer(bytes) == bytes.len() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}
