//! Access to the GPIO port registers.
//!
//! The driver never touches memory directly. Every access goes through a
//! [`RegisterAccess`] implementation, which names registers by port and [`Register`]
//! rather than by address. Two implementations are provided:
//!
//! - [`Mmio`] performs volatile accesses at the TM4C123's fixed register addresses.
//! - [`SimulatedRegisters`] keeps the register words in memory, models the lock and
//!   commit protection, and records every access so that write ordering can be
//!   checked.
//!
//! Inside the crate, [`PortBlock`] wraps an implementation with the per-pin
//! operations the driver is built from: setting, clearing and testing a pin's bit,
//! clearing and writing its 4-bit mux slot, enabling the port clock, and the
//! unlock/commit sequence.

use bit_field::BitField;

use crate::constants::GPIO_LOCK_KEY;
use crate::gpio::{PinNumber, PortId};

mod mmio;
mod sim;

pub use mmio::Mmio;
pub use sim::{Access, AccessKind, AccessTarget, PortSnapshot, SimulatedRegisters};

/// The registers of one GPIO port that the driver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// GPIODATA, accessed through the all-bits address mask.
    Data,
    /// GPIODIR. A set bit makes the pin an output.
    Direction,
    /// GPIOAFSEL. A set bit hands the pin to a peripheral.
    AltFunctionSelect,
    /// GPIOPUR. Weak pull-up enable.
    PullUp,
    /// GPIOPDR. Weak pull-down enable.
    PullDown,
    /// GPIODEN. Digital function enable.
    DigitalEnable,
    /// GPIOLOCK. Writing the lock key enables writes to the commit register.
    Lock,
    /// GPIOCR. A set bit allows changes to the pin's protected configuration bits.
    Commit,
    /// GPIOAMSEL. A set bit disables the analog isolation circuit.
    AnalogModeSelect,
    /// GPIOPCTL. One 4-bit peripheral mux slot per pin.
    PortControl,
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Register; 10] = [
        Register::Data,
        Register::Direction,
        Register::AltFunctionSelect,
        Register::PullUp,
        Register::PullDown,
        Register::DigitalEnable,
        Register::Lock,
        Register::Commit,
        Register::AnalogModeSelect,
        Register::PortControl,
    ];

    /// Byte offset of the register from the port's base address.
    pub fn offset(self) -> usize {
        match self {
            Register::Data => 0x3FC,
            Register::Direction => 0x400,
            Register::AltFunctionSelect => 0x420,
            Register::PullUp => 0x510,
            Register::PullDown => 0x514,
            Register::DigitalEnable => 0x51C,
            Register::Lock => 0x520,
            Register::Commit => 0x524,
            Register::AnalogModeSelect => 0x528,
            Register::PortControl => 0x52C,
        }
    }

    /// Position of the register in [`Register::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Register::Data => 0,
            Register::Direction => 1,
            Register::AltFunctionSelect => 2,
            Register::PullUp => 3,
            Register::PullDown => 4,
            Register::DigitalEnable => 5,
            Register::Lock => 6,
            Register::Commit => 7,
            Register::AnalogModeSelect => 8,
            Register::PortControl => 9,
        }
    }
}

/// Word access to the GPIO port registers and the clock gating register.
///
/// Methods take `&self`: the registers are shared hardware, and the runtime pin
/// operations are callable from more than one context. Implementations must perform
/// each call as a single access.
pub trait RegisterAccess {
    /// Read a port register.
    fn read(&self, port: PortId, register: Register) -> u32;
    /// Write a port register.
    fn write(&self, port: PortId, register: Register, value: u32);
    /// Read the run-mode clock gating register (one enable bit per port).
    fn read_clock_gate(&self) -> u32;
    /// Write the run-mode clock gating register.
    fn write_clock_gate(&self, value: u32);
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    fn read(&self, port: PortId, register: Register) -> u32 {
        (**self).read(port, register)
    }

    fn write(&self, port: PortId, register: Register, value: u32) {
        (**self).write(port, register, value)
    }

    fn read_clock_gate(&self) -> u32 {
        (**self).read_clock_gate()
    }

    fn write_clock_gate(&self, value: u32) {
        (**self).write_clock_gate(value)
    }
}

/// The registers of one port, with per-pin operations.
pub(crate) struct PortBlock<'r, R: ?Sized> {
    registers: &'r R,
    port: PortId,
}

impl<'r, R: RegisterAccess + ?Sized> PortBlock<'r, R> {
    pub(crate) fn new(registers: &'r R, port: PortId) -> Self {
        Self { registers, port }
    }

    /// Read-modify-write of one register.
    fn modify(&self, register: Register, f: impl FnOnce(&mut u32)) {
        let mut value = self.registers.read(self.port, register);
        f(&mut value);
        self.registers.write(self.port, register, value);
    }

    /// Set or clear the pin's bit in a one-bit-per-pin register.
    pub(crate) fn write_pin(&self, register: Register, pin: PinNumber, value: bool) {
        self.modify(register, |word| {
            word.set_bit(pin.bit(), value);
        });
    }

    pub(crate) fn set_pin(&self, register: Register, pin: PinNumber) {
        self.write_pin(register, pin, true);
    }

    pub(crate) fn clear_pin(&self, register: Register, pin: PinNumber) {
        self.write_pin(register, pin, false);
    }

    #[cfg(test)]
    pub(crate) fn test_pin(&self, register: Register, pin: PinNumber) -> bool {
        self.registers.read(self.port, register).get_bit(pin.bit())
    }

    /// Zero the pin's 4-bit slot in the port control register.
    pub(crate) fn clear_mux_slot(&self, pin: PinNumber) {
        self.modify(Register::PortControl, |word| {
            word.set_bits(pin.mux_slot(), 0);
        });
    }

    /// Write `code` into the pin's 4-bit slot in the port control register.
    ///
    /// The slot is cleared by a separate write first, so the register never holds
    /// the old and new codes merged.
    pub(crate) fn write_mux_slot(&self, pin: PinNumber, code: u8) {
        self.clear_mux_slot(pin);
        self.modify(Register::PortControl, |word| {
            word.set_bits(pin.mux_slot(), u32::from(code) & 0xF);
        });
    }

    /// Turn on the port's clock and wait one access for it to settle.
    ///
    /// The port's registers must not be touched until this returns.
    pub(crate) fn enable_clock(&self) {
        let mut gate = self.registers.read_clock_gate();
        gate.set_bit(self.port.index(), true);
        self.registers.write_clock_gate(gate);
        // Readback gives the clock time to start.
        let _ = self.registers.read_clock_gate();
    }

    /// Unlock the port and commit `pin` so its protected bits accept writes.
    pub(crate) fn unlock_and_commit(&self, pin: PinNumber) {
        self.registers.write(self.port, Register::Lock, GPIO_LOCK_KEY);
        self.set_pin(Register::Commit, pin);
    }
}
