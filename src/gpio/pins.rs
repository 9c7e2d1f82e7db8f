use std::fmt;

use crate::Error;

/// One of the six GPIO ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortId {
    /// Port A.
    A,
    /// Port B.
    B,
    /// Port C. PC0 to PC3 carry the JTAG/SWD debug signals.
    C,
    /// Port D. PD7 is lock-protected.
    D,
    /// Port E.
    E,
    /// Port F. PF0 is lock-protected.
    F,
}

impl PortId {
    /// All ports, in clock-gate bit order.
    pub const ALL: [PortId; 6] = [
        PortId::A,
        PortId::B,
        PortId::C,
        PortId::D,
        PortId::E,
        PortId::F,
    ];

    /// Zero-based port number, which is also the port's bit in the clock gating register.
    pub fn index(self) -> usize {
        match self {
            PortId::A => 0,
            PortId::B => 1,
            PortId::C => 2,
            PortId::D => 3,
            PortId::E => 4,
            PortId::F => 5,
        }
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            PortId::A => 'A',
            PortId::B => 'B',
            PortId::C => 'C',
            PortId::D => 'D',
            PortId::E => 'E',
            PortId::F => 'F',
        };
        write!(f, "{letter}")
    }
}

/// Pin number within a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinNumber {
    /// Pin 0
    P0,
    /// Pin 1
    P1,
    /// Pin 2
    P2,
    /// Pin 3
    P3,
    /// Pin 4
    P4,
    /// Pin 5
    P5,
    /// Pin 6
    P6,
    /// Pin 7
    P7,
}

impl PinNumber {
    /// Bit position of the pin in the port's one-bit-per-pin registers.
    pub fn bit(self) -> usize {
        u8::from(self) as usize
    }

    /// Bit range of the pin's 4-bit slot in the port control register.
    pub(crate) fn mux_slot(self) -> std::ops::Range<usize> {
        let start = self.bit() * 4;
        start..start + 4
    }
}

impl TryFrom<u8> for PinNumber {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Ok(match value {
            0 => Self::P0,
            1 => Self::P1,
            2 => Self::P2,
            3 => Self::P3,
            4 => Self::P4,
            5 => Self::P5,
            6 => Self::P6,
            7 => Self::P7,
            _ => return Err(Error::InvalidPinNumber(value)),
        })
    }
}

impl From<PinNumber> for u8 {
    fn from(value: PinNumber) -> Self {
        match value {
            PinNumber::P0 => 0,
            PinNumber::P1 => 1,
            PinNumber::P2 => 2,
            PinNumber::P3 => 3,
            PinNumber::P4 => 4,
            PinNumber::P5 => 5,
            PinNumber::P6 => 6,
            PinNumber::P7 => 7,
        }
    }
}

impl fmt::Display for PinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Pins whose configuration is protected by the lock/commit mechanism: PD7 and PF0.
///
/// Writes to their alternate function, pull-up/pull-down, digital enable and analog
/// select bits only take effect after the port has been unlocked and the pin's bit
/// set in the commit register.
pub(crate) fn is_lock_protected(port: PortId, pin: PinNumber) -> bool {
    matches!((port, pin), (PortId::D, PinNumber::P7) | (PortId::F, PinNumber::P0))
}

/// Pins reserved for the JTAG/SWD debug interface: PC0 to PC3.
///
/// Reconfiguring these at runtime can cut off the debugger, so the runtime
/// operations leave them alone.
pub(crate) fn is_debug_reserved(port: PortId, pin: PinNumber) -> bool {
    port == PortId::C && u8::from(pin) <= 3
}
