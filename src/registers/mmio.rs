#![allow(unsafe_code)]

use super::{Register, RegisterAccess};
use crate::constants::SYSCTL_RCGC2_ADDRESS;
use crate::gpio::PortId;

/// Base addresses of the GPIO ports on the APB aperture, indexed by [`PortId::index`].
const PORT_BASE_ADDRESSES: [usize; 6] = [
    0x4000_4000, // A
    0x4000_5000, // B
    0x4000_6000, // C
    0x4000_7000, // D
    0x4002_4000, // E
    0x4002_5000, // F
];

/// Memory-mapped access to the TM4C123 GPIO and system control registers.
///
/// Every method is a single volatile load or store.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create the register accessor.
    ///
    /// # Safety
    ///
    /// The program must be running on a TM4C123 device, where the GPIO port
    /// registers and RCGC2 are mapped at their documented addresses. The caller must
    /// also ensure nothing else in the program writes the GPIO port registers while
    /// the driver is using them.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }

    fn port_register(port: PortId, register: Register) -> *mut u32 {
        (PORT_BASE_ADDRESSES[port.index()] + register.offset()) as *mut u32
    }
}

impl RegisterAccess for Mmio {
    fn read(&self, port: PortId, register: Register) -> u32 {
        // SAFETY: the address is a GPIO register, see `Mmio::new`.
        unsafe { core::ptr::read_volatile(Self::port_register(port, register)) }
    }

    fn write(&self, port: PortId, register: Register, value: u32) {
        // SAFETY: the address is a GPIO register, see `Mmio::new`.
        unsafe { core::ptr::write_volatile(Self::port_register(port, register), value) }
    }

    fn read_clock_gate(&self) -> u32 {
        // SAFETY: RCGC2 is a system control register, see `Mmio::new`.
        unsafe { core::ptr::read_volatile(SYSCTL_RCGC2_ADDRESS as *const u32) }
    }

    fn write_clock_gate(&self, value: u32) {
        // SAFETY: RCGC2 is a system control register, see `Mmio::new`.
        unsafe { core::ptr::write_volatile(SYSCTL_RCGC2_ADDRESS as *mut u32, value) }
    }
}
