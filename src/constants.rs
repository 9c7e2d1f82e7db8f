//! Fixed identifiers and hardware constants for the port driver.

/// Module identifier used when reporting faults.
pub const PORT_MODULE_ID: u16 = 124;

/// Instance identifier used when reporting faults. There is only one port driver.
pub const PORT_INSTANCE_ID: u8 = 0;

/// Vendor identifier. 1010 is a placeholder, not an assigned vendor ID.
pub const PORT_VENDOR_ID: u16 = 1010;

/// Software version of the driver (major, minor, patch).
pub const PORT_SW_VERSION: (u8, u8, u8) = (1, 0, 0);

/// Release version of the port driver interface this crate follows (major, minor, patch).
pub const PORT_AR_RELEASE_VERSION: (u8, u8, u8) = (4, 0, 3);

/// Number of GPIO pins across all ports of the TM4C123GH6PM.
///
/// This is the upper bound on the size of a configuration set, and the bound used
/// when validating the pin argument of [`Port::set_pin_mode`].
///
/// [`Port::set_pin_mode`]: crate::Port::set_pin_mode
pub const PORT_NUMBER_OF_PORT_PINS: usize = 43;

/// Value that unlocks the commit register of a port when written to its lock register.
///
/// The bytes spell "LOCK" in ASCII.
pub(crate) const GPIO_LOCK_KEY: u32 = 0x4C4F_434B;

/// Address of the legacy run-mode clock gating register (RCGC2).
pub(crate) const SYSCTL_RCGC2_ADDRESS: usize = 0x400F_E108;
