#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::config::{Config, ConfigError};
pub use crate::device::QwiicOpenLog;
pub use crate::error::{Error, Result};
pub use crate::params::DeviceAddress;
