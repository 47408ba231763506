//! Configuration primitives for the Qwiic OpenLog driver.

use crate::params::DeviceAddress;
use crate::registers::DEFAULT_TRANSFER_LIMIT;

/// User-facing configuration for a Qwiic OpenLog handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Target address on the bus.
    pub address: DeviceAddress,
    /// Largest number of bytes the transport moves in one transaction.
    pub transfer_limit: usize,
    /// Emits per-transaction trace diagnostics when set.
    pub debug: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration can drive a transport.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.transfer_limit == 0 {
            return Err(ConfigError::ZeroTransferLimit);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the target address.
    pub fn address(mut self, address: DeviceAddress) -> Self {
        self.config.address = address;
        self
    }

    /// Overrides the per-transaction byte limit.
    pub fn transfer_limit(mut self, limit: usize) -> Self {
        self.config.transfer_limit = limit;
        self
    }

    /// Enables or disables trace diagnostics.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DeviceAddress::DEFAULT,
            transfer_limit: DEFAULT_TRANSFER_LIMIT,
            debug: false,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address does not fit in 7 bits.
    AddressOutOfRange,
    /// A transfer limit of zero would never make progress.
    ZeroTransferLimit,
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};
    use crate::params::DeviceAddress;
    use crate::registers::SAMD21_TRANSFER_LIMIT;

    #[test]
    fn default_targets_factory_address_with_32_byte_chunks() {
        let config = Config::default();
        assert_eq!(config.address, DeviceAddress::DEFAULT);
        assert_eq!(config.transfer_limit, 32);
        assert!(!config.debug);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = Config::new()
            .address(DeviceAddress::ALTERNATE)
            .transfer_limit(SAMD21_TRANSFER_LIMIT)
            .debug(true)
            .build();

        assert_eq!(config.address.get(), 0x29);
        assert_eq!(config.transfer_limit, 64);
        assert!(config.debug);
    }

    #[test]
    fn zero_transfer_limit_is_rejected() {
        let config = Config::new().transfer_limit(0).build();
        assert_eq!(config.validate(), Err(ConfigError::ZeroTransferLimit));
    }
}
