#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
mod constants;
mod driver;
mod error;
pub mod fault;
pub mod gpio;
pub mod registers;

pub use config::{ConfigurationSet, PinDescriptor};
pub use constants::{
    PORT_AR_RELEASE_VERSION, PORT_INSTANCE_ID, PORT_MODULE_ID, PORT_NUMBER_OF_PORT_PINS,
    PORT_SW_VERSION, PORT_VENDOR_ID,
};
pub use driver::{Port, PortStatus};
pub use error::Error;
