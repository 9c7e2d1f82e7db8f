//! The board's pin configuration table.
//!
//! A board describes each pin it uses with a [`PinDescriptor`], and collects them in
//! a [`ConfigurationSet`]. The set is handed to [`Port::init`] once at boot and then
//! read by the runtime operations, which address pins by their position in the set.
//!
//! Descriptors have `const` builders so tables can be written as constants:
//!
//! ```
//! use tm4c_port::gpio::{InternalResistor, LogicLevel, PinMode, PinNumber, PortId};
//! use tm4c_port::{ConfigurationSet, PinDescriptor};
//!
//! const RED_LED: PinDescriptor = PinDescriptor::new(PortId::F, PinNumber::P1)
//!     .output(LogicLevel::Low);
//! const SW2: PinDescriptor = PinDescriptor::new(PortId::F, PinNumber::P0)
//!     .input(InternalResistor::PullUp)
//!     .with_changeable_direction();
//! const UART0_RX: PinDescriptor = PinDescriptor::new(PortId::A, PinNumber::P0)
//!     .with_mode(PinMode::Alt1);
//!
//! let config = ConfigurationSet::new([RED_LED, SW2, UART0_RX]).unwrap();
//! assert_eq!(config.position(PortId::F, PinNumber::P0), Some(1));
//! ```
//!
//! [`Port::init`]: crate::Port::init

use crate::Error;
use crate::constants::PORT_NUMBER_OF_PORT_PINS;
use crate::gpio::{self, InternalResistor, LogicLevel, PinDirection, PinMode, PinNumber, PortId};

/// Static configuration of one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDescriptor {
    /// Port the pin belongs to.
    pub port: PortId,
    /// Pin within the port.
    pub pin: PinNumber,
    /// Direction applied at init and restored by direction refresh.
    pub direction: PinDirection,
    /// Internal resistor applied at init. Only used for inputs.
    pub resistor: InternalResistor,
    /// Level driven at init. Only used for outputs.
    pub initial_level: LogicLevel,
    /// Mode applied at init.
    pub initial_mode: PinMode,
    /// Whether [`Port::set_pin_direction`](crate::Port::set_pin_direction) may
    /// change the pin's direction.
    pub direction_changeable: bool,
    /// Whether [`Port::set_pin_mode`](crate::Port::set_pin_mode) may change the
    /// pin's mode.
    pub mode_changeable: bool,
}

impl PinDescriptor {
    /// A digital input with no internal resistor, not changeable at runtime.
    pub const fn new(port: PortId, pin: PinNumber) -> Self {
        Self {
            port,
            pin,
            direction: PinDirection::Input,
            resistor: InternalResistor::Off,
            initial_level: LogicLevel::Low,
            initial_mode: PinMode::Dio,
            direction_changeable: false,
            mode_changeable: false,
        }
    }

    /// Make the pin an output driving `level` after init.
    #[must_use]
    pub const fn output(mut self, level: LogicLevel) -> Self {
        self.direction = PinDirection::Output;
        self.initial_level = level;
        self
    }

    /// Make the pin an input with the given internal resistor.
    #[must_use]
    pub const fn input(mut self, resistor: InternalResistor) -> Self {
        self.direction = PinDirection::Input;
        self.resistor = resistor;
        self
    }

    /// Set the mode applied at init.
    #[must_use]
    pub const fn with_mode(mut self, mode: PinMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Allow the direction to be changed at runtime.
    #[must_use]
    pub const fn with_changeable_direction(mut self) -> Self {
        self.direction_changeable = true;
        self
    }

    /// Allow the mode to be changed at runtime.
    #[must_use]
    pub const fn with_changeable_mode(mut self) -> Self {
        self.mode_changeable = true;
        self
    }

    /// Returns `true` for PD7 and PF0, which must be unlocked before configuring.
    pub fn is_lock_protected(&self) -> bool {
        gpio::is_lock_protected(self.port, self.pin)
    }

    /// Returns `true` for PC0 to PC3, the JTAG/SWD pins.
    pub fn is_debug_reserved(&self) -> bool {
        gpio::is_debug_reserved(self.port, self.pin)
    }
}

/// An ordered table of pin descriptors, at most one per port pin.
///
/// The index of a descriptor in the set is the pin index used by the runtime
/// operations on [`Port`](crate::Port).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSet {
    pins: Vec<PinDescriptor>,
}

impl ConfigurationSet {
    /// Build a configuration set.
    ///
    /// Fails if two descriptors name the same port pin, or if there are more
    /// descriptors than [`PORT_NUMBER_OF_PORT_PINS`].
    pub fn new(pins: impl Into<Vec<PinDescriptor>>) -> Result<Self, Error> {
        let pins = pins.into();
        if pins.len() > PORT_NUMBER_OF_PORT_PINS {
            return Err(Error::TooManyPins(pins.len()));
        }
        for (idx, descriptor) in pins.iter().enumerate() {
            let repeated = pins[..idx]
                .iter()
                .any(|earlier| earlier.port == descriptor.port && earlier.pin == descriptor.pin);
            if repeated {
                return Err(Error::DuplicatePin {
                    port: descriptor.port,
                    pin: descriptor.pin,
                });
            }
        }
        Ok(Self { pins })
    }

    /// Number of configured pins.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns `true` if no pins are configured.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Descriptor at position `pin`, if there is one.
    pub fn get(&self, pin: usize) -> Option<&PinDescriptor> {
        self.pins.get(pin)
    }

    /// Iterate over the descriptors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PinDescriptor> {
        self.pins.iter()
    }

    /// Position of the descriptor for a port pin.
    pub fn position(&self, port: PortId, pin: PinNumber) -> Option<usize> {
        self.pins
            .iter()
            .position(|descriptor| descriptor.port == port && descriptor.pin == pin)
    }
}

impl<'a> IntoIterator for &'a ConfigurationSet {
    type Item = &'a PinDescriptor;
    type IntoIter = std::slice::Iter<'a, PinDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
