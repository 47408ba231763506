//! Strongly typed parameters for the Qwiic OpenLog driver.
//!
//! Prefer these types over raw integers so that out-of-range values are
//! rejected once, at construction, instead of on every bus access.
//!
//! # Examples
//!
//! ```rust
//! use qwiic_openlog::params::DeviceAddress;
//!
//! let addr = DeviceAddress::new(0x29).unwrap();
//! assert_eq!(addr, DeviceAddress::ALTERNATE);
//! assert!(DeviceAddress::new(0x80).is_err());
//! ```

use crate::config::ConfigError;

/// Highest address representable in 7-bit I2C addressing.
const MAX_7BIT_ADDRESS: u8 = 0x7F;

/// A 7-bit I2C target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// Factory default address of the Qwiic OpenLog (42).
    pub const DEFAULT: Self = Self(0x2A);
    /// Alternate address selectable on the board.
    pub const ALTERNATE: Self = Self(0x29);

    /// Validates `raw` as a 7-bit address.
    pub const fn new(raw: u8) -> core::result::Result<Self, ConfigError> {
        if raw > MAX_7BIT_ADDRESS {
            return Err(ConfigError::AddressOutOfRange);
        }
        Ok(Self(raw))
    }

    /// Returns the raw 7-bit value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for DeviceAddress {
    type Error = ConfigError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        value.0
    }
}
