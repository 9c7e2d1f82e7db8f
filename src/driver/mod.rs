use crate::Error;
use crate::config::ConfigurationSet;
use crate::fault::{ApiId, FaultReporter, LogReporter};
use crate::gpio::{InternalResistor, PinMode, PinNumber, PortId};
use crate::registers::{PortBlock, Register, RegisterAccess};

mod direction;
mod init;
mod mode;

/// Lifecycle state of the port driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortStatus {
    /// [`Port::init`] has not completed yet.
    NotInitialized,
    /// [`Port::init`] has applied a configuration set.
    Initialized,
}

/// Driver for the GPIO ports.
///
/// # Quick start
///
/// Build a [`ConfigurationSet`] describing the board's pins, create the driver over
/// a register backend, and call [`Port::init`] once at boot. Afterwards the runtime
/// operations address pins by their position in the configuration set:
///
/// ```
/// use tm4c_port::gpio::{LogicLevel, PinDirection, PinNumber, PortId};
/// use tm4c_port::registers::{Register, SimulatedRegisters};
/// use tm4c_port::{ConfigurationSet, PinDescriptor, Port};
///
/// let config = ConfigurationSet::new([
///     PinDescriptor::new(PortId::F, PinNumber::P2)
///         .output(LogicLevel::High)
///         .with_changeable_direction(),
/// ])
/// .unwrap();
///
/// let registers = SimulatedRegisters::new();
/// let mut port = Port::new(&registers);
/// port.init(Some(&config)).unwrap();
/// assert!(registers.bit(PortId::F, Register::Direction, PinNumber::P2));
///
/// port.set_pin_direction(0, PinDirection::Input).unwrap();
/// assert!(!registers.bit(PortId::F, Register::Direction, PinNumber::P2));
/// ```
///
/// On hardware, use [`Mmio`](crate::registers::Mmio) as the backend.
///
/// # Overview
///
/// - [`Port::init`] programs every configured pin: port clock, unlock of PD7 and
///   PF0, mode, direction, and output level or internal resistor.
/// - [`Port::set_pin_direction`] and [`Port::set_pin_mode`] change a pin whose
///   descriptor allows it.
/// - [`Port::refresh_port_direction`] rewrites the direction of every pin whose
///   direction is fixed.
///
/// The runtime operations never touch the JTAG/SWD pins PC0 to PC3.
///
/// Every precondition failure is passed to the [`FaultReporter`] (when the
/// `dev-error-detect` feature is enabled) and returned as an [`Error`], in which
/// case no register has been written.
#[derive(Debug)]
pub struct Port<'a, R, F = LogReporter> {
    registers: R,
    reporter: F,
    /// Set by a successful `init`. `Some` exactly when the status is `Initialized`.
    config: Option<&'a ConfigurationSet>,
}

impl<'a, R: RegisterAccess> Port<'a, R> {
    /// Create an uninitialized driver that logs faults with [`LogReporter`].
    pub fn new(registers: R) -> Self {
        Self::with_reporter(registers, LogReporter)
    }
}

impl<'a, R: RegisterAccess, F: FaultReporter> Port<'a, R, F> {
    /// Create an uninitialized driver that sends faults to `reporter`.
    pub fn with_reporter(registers: R, reporter: F) -> Self {
        Self {
            registers,
            reporter,
            config: None,
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> PortStatus {
        if self.config.is_some() {
            PortStatus::Initialized
        } else {
            PortStatus::NotInitialized
        }
    }

    /// Returns `true` once [`Port::init`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.status() == PortStatus::Initialized
    }

    /// The configuration set applied by the last successful [`Port::init`].
    pub fn configuration(&self) -> Option<&'a ConfigurationSet> {
        self.config
    }

    /// The register backend.
    pub fn registers(&self) -> &R {
        &self.registers
    }

    /// The fault reporter.
    pub fn reporter(&self) -> &F {
        &self.reporter
    }

    fn block(&self, port: PortId) -> PortBlock<'_, R> {
        PortBlock::new(&self.registers, port)
    }

    /// Report `error` for `api_id` and hand it back for returning.
    fn reject(&self, api_id: ApiId, error: Error) -> Error {
        #[cfg(feature = "dev-error-detect")]
        if let Some(code) = error.fault_code() {
            crate::fault::report(&self.reporter, api_id, code);
        }
        #[cfg(not(feature = "dev-error-detect"))]
        let _ = api_id;
        error
    }

    #[cfg(any(feature = "set-pin-direction-api", feature = "set-pin-mode-api"))]
    fn checks(&self, api_id: ApiId) -> Preconditions<'_, 'a, R, F> {
        Preconditions {
            port: self,
            api_id,
            first: None,
        }
    }
}

/// Collects the precondition failures of one operation.
///
/// Every failure is reported as it is found, and the first one is returned by
/// [`Preconditions::finish`].
#[cfg(any(feature = "set-pin-direction-api", feature = "set-pin-mode-api"))]
struct Preconditions<'p, 'a, R, F> {
    port: &'p Port<'a, R, F>,
    api_id: ApiId,
    first: Option<Error>,
}

#[cfg(any(feature = "set-pin-direction-api", feature = "set-pin-mode-api"))]
impl<R: RegisterAccess, F: FaultReporter> Preconditions<'_, '_, R, F> {
    /// Keep the value of `result`, or record its error.
    fn check<T>(&mut self, result: Result<T, Error>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.fail(error);
                None
            }
        }
    }

    fn fail(&mut self, error: Error) {
        let error = self.port.reject(self.api_id, error);
        self.first.get_or_insert(error);
    }

    fn finish(self) -> Result<(), Error> {
        match self.first {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Program `pin` for `mode`.
///
/// The analog, alternate function and digital enable bits are written so that the
/// pin is never digital and analog at once.
fn apply_mode<R: RegisterAccess + ?Sized>(block: &PortBlock<'_, R>, pin: PinNumber, mode: PinMode) {
    match mode {
        PinMode::Dio => {
            block.clear_pin(Register::AnalogModeSelect, pin);
            block.clear_pin(Register::AltFunctionSelect, pin);
            block.clear_mux_slot(pin);
            block.set_pin(Register::DigitalEnable, pin);
        }
        PinMode::Adc => {
            block.clear_pin(Register::DigitalEnable, pin);
            block.clear_pin(Register::AltFunctionSelect, pin);
            block.clear_mux_slot(pin);
            block.set_pin(Register::AnalogModeSelect, pin);
        }
        alternate => {
            block.clear_pin(Register::AnalogModeSelect, pin);
            block.set_pin(Register::AltFunctionSelect, pin);
            block.write_mux_slot(pin, u8::from(alternate));
            block.set_pin(Register::DigitalEnable, pin);
        }
    }
}

fn apply_resistor<R: RegisterAccess + ?Sized>(
    block: &PortBlock<'_, R>,
    pin: PinNumber,
    resistor: InternalResistor,
) {
    let (pull_up, pull_down) = match resistor {
        InternalResistor::Off => (false, false),
        InternalResistor::PullUp => (true, false),
        InternalResistor::PullDown => (false, true),
    };
    block.write_pin(Register::PullUp, pin, pull_up);
    block.write_pin(Register::PullDown, pin, pull_down);
}
