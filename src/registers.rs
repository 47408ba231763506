//! Register map and bus constants for the Qwiic OpenLog.

/// Placeholder register address (`0x0F`).
pub const REG_PLACEHOLDER: u8 = 0x0F;

/// Value returned by register reads that did not complete.
pub const READ_FAILED: u8 = 0xFF;

/// Per-transaction byte limit of the AVR `Wire` buffer and the usual fallback.
pub const DEFAULT_TRANSFER_LIMIT: usize = 32;
/// Per-transaction byte limit on SAMD21 targets.
pub const SAMD21_TRANSFER_LIMIT: usize = 64;
