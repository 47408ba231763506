//! Bus interface abstraction for the Qwiic OpenLog driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// Every method is one bus transaction. `Ok` means the target acknowledged.
pub trait OpenLogInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Sends `bytes` to `address` in a single transaction.
    fn write(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Writes `register` then reads `buf.len()` bytes after a repeated start,
    /// without releasing the bus in between.
    fn write_read(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> core::result::Result<(), Self::Error>;
}
