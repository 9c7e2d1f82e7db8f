use crate::fault::FaultCode;
use crate::gpio::{PinNumber, PortId};

/// Problems configuring or changing the GPIO pins.
///
/// Runtime precondition failures (the first group of variants) are also reported to
/// the [`FaultReporter`] before being returned, unless the `dev-error-detect`
/// feature is disabled. The remaining variants come from building a configuration.
///
/// [`FaultReporter`]: crate::fault::FaultReporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// [`Port::init`] was called without a configuration set.
    ///
    /// [`Port::init`]: crate::Port::init
    #[error("no configuration set supplied to init")]
    ConfigInvalid,
    /// A runtime operation was called before [`Port::init`].
    ///
    /// [`Port::init`]: crate::Port::init
    #[error("port driver used before initialization")]
    Uninitialized,
    /// The pin index is not below the bound checked by the operation.
    #[error("pin index {pin} out of range (limit {limit})")]
    InvalidPin {
        /// Index that was passed in.
        pin: usize,
        /// Exclusive upper bound on valid indices.
        limit: usize,
    },
    /// The pin's direction is fixed by its configuration.
    #[error("direction of pin {pin} is not changeable")]
    DirectionUnchangeable {
        /// Index of the pin in the configuration set.
        pin: usize,
    },
    /// The pin's mode is fixed by its configuration.
    #[error("mode of pin {pin} is not changeable")]
    ModeUnchangeable {
        /// Index of the pin in the configuration set.
        pin: usize,
    },
    /// A mode code above 10 (DIO).
    #[error("invalid pin mode code {0}")]
    InvalidMode(u8),
    /// A pin number above 7.
    #[error("invalid pin number {0}, ports have pins 0 to 7")]
    InvalidPinNumber(u8),
    /// Two descriptors in a configuration set name the same port pin.
    #[error("more than one descriptor for pin {pin} of port {port}")]
    DuplicatePin {
        /// Port of the repeated pin.
        port: PortId,
        /// The repeated pin.
        pin: PinNumber,
    },
    /// A configuration set larger than the number of pins on the device.
    #[error("{0} pin descriptors given, the device has 43 pins")]
    TooManyPins(usize),
}

impl Error {
    /// The code reported to the fault service for this error.
    ///
    /// Returns `None` for errors that can only occur while building a configuration,
    /// which are never reported.
    pub fn fault_code(&self) -> Option<FaultCode> {
        match self {
            Error::ConfigInvalid => Some(FaultCode::ParamConfig),
            Error::Uninitialized => Some(FaultCode::Uninit),
            Error::InvalidPin { .. } => Some(FaultCode::ParamPin),
            Error::DirectionUnchangeable { .. } => Some(FaultCode::DirectionUnchangeable),
            Error::ModeUnchangeable { .. } => Some(FaultCode::ModeUnchangeable),
            Error::InvalidMode(_) => Some(FaultCode::ParamInvalidMode),
            Error::InvalidPinNumber(_) | Error::DuplicatePin { .. } | Error::TooManyPins(_) => None,
        }
    }
}
