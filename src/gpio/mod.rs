//! Vocabulary for describing GPIO pins: ports, pin numbers, directions, levels,
//! internal resistors and pin modes.

mod common;
mod mode;
mod pins;

pub use common::{InternalResistor, LogicLevel, PinDirection};
pub use mode::PinMode;
pub use pins::{PinNumber, PortId};

pub(crate) use pins::{is_debug_reserved, is_lock_protected};
