use std::cell::{Cell, RefCell};
use std::fmt;

use bit_field::BitField;

use super::{Register, RegisterAccess};
use crate::constants::GPIO_LOCK_KEY;
use crate::gpio::{PinNumber, PortId};

/// Whether an access read or wrote the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Register read.
    Read,
    /// Register write.
    Write,
}

/// The register an access went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTarget {
    /// The run-mode clock gating register.
    ClockGate,
    /// A port register.
    Port(PortId, Register),
}

/// One recorded register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Read or write.
    pub kind: AccessKind,
    /// Register accessed.
    pub target: AccessTarget,
    /// Value returned by a read, or value passed to a write.
    ///
    /// For writes to commit-protected registers this is the requested value, which
    /// may differ from what the register ends up holding.
    pub value: u32,
}

/// In-memory GPIO register file.
///
/// Registers start at their documented reset values, including the JTAG defaults on
/// PC0 to PC3. The lock/commit protection is modelled: bits of GPIOAFSEL, GPIOPUR,
/// GPIOPDR and GPIODEN whose GPIOCR bit is clear ignore writes, and GPIOCR itself
/// only accepts writes while the port is unlocked.
///
/// Every access made through [`RegisterAccess`] is appended to a log, see
/// [`SimulatedRegisters::accesses`]. Inspection methods such as
/// [`SimulatedRegisters::word`] and [`SimulatedRegisters::poke`] bypass both the
/// log and the protection.
///
/// The log is never trimmed. Callers that keep a register file around for many
/// operations should call [`SimulatedRegisters::clear_accesses`] periodically.
#[derive(Debug)]
pub struct SimulatedRegisters {
    ports: [[Cell<u32>; 10]; 6],
    unlocked: [Cell<bool>; 6],
    clock_gate: Cell<u32>,
    accesses: RefCell<Vec<Access>>,
}

impl Default for SimulatedRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedRegisters {
    /// Create a register file in its reset state.
    pub fn new() -> Self {
        let sim = Self {
            ports: std::array::from_fn(|_| std::array::from_fn(|_| Cell::new(0))),
            unlocked: std::array::from_fn(|_| Cell::new(false)),
            clock_gate: Cell::new(0),
            accesses: RefCell::new(Vec::new()),
        };
        for port in PortId::ALL {
            sim.poke(port, Register::Lock, 1);
            sim.poke(port, Register::Commit, 0xFF);
        }
        // PC0 to PC3 come out of reset as JTAG/SWD, and are commit-protected along
        // with PD7 and PF0.
        sim.poke(PortId::C, Register::AltFunctionSelect, 0x0F);
        sim.poke(PortId::C, Register::PullUp, 0x0F);
        sim.poke(PortId::C, Register::DigitalEnable, 0x0F);
        sim.poke(PortId::C, Register::PortControl, 0x0000_1111);
        sim.poke(PortId::C, Register::Commit, 0xF0);
        sim.poke(PortId::D, Register::Commit, 0x7F);
        sim.poke(PortId::F, Register::Commit, 0xFE);
        sim
    }

    fn cell(&self, port: PortId, register: Register) -> &Cell<u32> {
        &self.ports[port.index()][register.index()]
    }

    fn record(&self, kind: AccessKind, target: AccessTarget, value: u32) {
        self.accesses.borrow_mut().push(Access {
            kind,
            target,
            value,
        });
    }

    /// Current value of a port register.
    pub fn word(&self, port: PortId, register: Register) -> u32 {
        self.cell(port, register).get()
    }

    /// Current value of a pin's bit in a one-bit-per-pin register.
    pub fn bit(&self, port: PortId, register: Register, pin: PinNumber) -> bool {
        self.word(port, register).get_bit(pin.bit())
    }

    /// Current value of a pin's 4-bit slot in the port control register.
    pub fn mux_slot(&self, port: PortId, pin: PinNumber) -> u8 {
        self.word(port, Register::PortControl).get_bits(pin.mux_slot()) as u8
    }

    /// Overwrite a port register, ignoring lock/commit protection.
    ///
    /// Useful for putting the register file into a particular state, or for
    /// simulating a stray write that the driver should later correct.
    pub fn poke(&self, port: PortId, register: Register, value: u32) {
        self.cell(port, register).set(value);
    }

    /// Current value of the clock gating register.
    pub fn clock_gate(&self) -> u32 {
        self.clock_gate.get()
    }

    /// Whether the lock key has been written to the port's lock register.
    pub fn is_unlocked(&self, port: PortId) -> bool {
        self.unlocked[port.index()].get()
    }

    /// All accesses made through [`RegisterAccess`] so far, oldest first.
    pub fn accesses(&self) -> Vec<Access> {
        self.accesses.borrow().clone()
    }

    /// Forget the recorded accesses.
    pub fn clear_accesses(&self) {
        self.accesses.borrow_mut().clear();
    }

    /// Values of all registers of one port.
    pub fn snapshot(&self, port: PortId) -> PortSnapshot {
        let word = |register| self.word(port, register);
        PortSnapshot {
            port,
            data: word(Register::Data),
            direction: word(Register::Direction),
            alt_function_select: word(Register::AltFunctionSelect),
            pull_up: word(Register::PullUp),
            pull_down: word(Register::PullDown),
            digital_enable: word(Register::DigitalEnable),
            lock: word(Register::Lock),
            commit: word(Register::Commit),
            analog_mode_select: word(Register::AnalogModeSelect),
            port_control: word(Register::PortControl),
        }
    }
}

impl RegisterAccess for SimulatedRegisters {
    fn read(&self, port: PortId, register: Register) -> u32 {
        let value = self.word(port, register);
        self.record(AccessKind::Read, AccessTarget::Port(port, register), value);
        value
    }

    fn write(&self, port: PortId, register: Register, value: u32) {
        self.record(AccessKind::Write, AccessTarget::Port(port, register), value);
        let cell = self.cell(port, register);
        match register {
            Register::Lock => {
                let unlocked = value == GPIO_LOCK_KEY;
                self.unlocked[port.index()].set(unlocked);
                cell.set(if unlocked { 0 } else { 1 });
            }
            Register::Commit => {
                if self.is_unlocked(port) {
                    cell.set(value & 0xFF);
                }
            }
            Register::AltFunctionSelect
            | Register::PullUp
            | Register::PullDown
            | Register::DigitalEnable => {
                let committed = self.word(port, Register::Commit);
                cell.set((cell.get() & !committed) | (value & committed));
            }
            _ => cell.set(value),
        }
    }

    fn read_clock_gate(&self) -> u32 {
        let value = self.clock_gate.get();
        self.record(AccessKind::Read, AccessTarget::ClockGate, value);
        value
    }

    fn write_clock_gate(&self, value: u32) {
        self.record(AccessKind::Write, AccessTarget::ClockGate, value);
        self.clock_gate.set(value);
    }
}

/// The register values of one port at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSnapshot {
    /// Port the values were read from.
    pub port: PortId,
    /// GPIODATA
    pub data: u32,
    /// GPIODIR
    pub direction: u32,
    /// GPIOAFSEL
    pub alt_function_select: u32,
    /// GPIOPUR
    pub pull_up: u32,
    /// GPIOPDR
    pub pull_down: u32,
    /// GPIODEN
    pub digital_enable: u32,
    /// GPIOLOCK (1 while locked)
    pub lock: u32,
    /// GPIOCR
    pub commit: u32,
    /// GPIOAMSEL
    pub analog_mode_select: u32,
    /// GPIOPCTL
    pub port_control: u32,
}

impl fmt::Display for PortSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Port {}", self.port)?;
        for (name, value) in [
            ("DATA", self.data),
            ("DIR", self.direction),
            ("AFSEL", self.alt_function_select),
            ("PUR", self.pull_up),
            ("PDR", self.pull_down),
            ("DEN", self.digital_enable),
            ("CR", self.commit),
            ("AMSEL", self.analog_mode_select),
        ] {
            writeln!(f, "  {name:<6} {:08b}", value & 0xFF)?;
        }
        writeln!(f, "  {:<6} {}", "LOCK", if self.lock == 0 { "unlocked" } else { "locked" })?;
        write!(f, "  {:<6} 0x{:08X}", "PCTL", self.port_control)
    }
}
