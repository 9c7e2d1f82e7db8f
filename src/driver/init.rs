use tracing::{debug, info, trace};

use super::{Port, apply_mode, apply_resistor};
use crate::Error;
use crate::config::{ConfigurationSet, PinDescriptor};
use crate::fault::{ApiId, FaultReporter};
use crate::gpio::PinDirection;
use crate::registers::{Register, RegisterAccess};

impl<'a, R: RegisterAccess, F: FaultReporter> Port<'a, R, F> {
    /// Apply a configuration set to the hardware.
    ///
    /// Each pin is programmed in table order: the port's clock is enabled, PD7 and
    /// PF0 are unlocked and committed, then the pin's mode, direction, and output
    /// level (outputs) or internal resistor (inputs) are written. Pins not in the
    /// set are left as they are.
    ///
    /// The JTAG/SWD pins PC0 to PC3 are configured like any other pin if they
    /// appear in the set, but they are never unlocked, so the hardware keeps their
    /// protected bits (alternate function, pull resistors, digital enable) at
    /// their debug settings.
    ///
    /// Calling `init` again reapplies the new set in full.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if `config` is `None`. Nothing is written
    /// and the driver's status is unchanged.
    pub fn init(&mut self, config: Option<&'a ConfigurationSet>) -> Result<(), Error> {
        let Some(config) = config else {
            return Err(self.reject(ApiId::Init, Error::ConfigInvalid));
        };

        debug!(pins = config.len(), "configuring port pins");
        for descriptor in config {
            self.configure_pin(descriptor);
        }
        self.config = Some(config);
        info!(pins = config.len(), "port driver initialized");
        Ok(())
    }

    fn configure_pin(&self, descriptor: &PinDescriptor) {
        let PinDescriptor { port, pin, .. } = *descriptor;
        trace!(%port, %pin, ?descriptor, "configuring pin");

        let block = self.block(port);
        block.enable_clock();
        if descriptor.is_lock_protected() {
            block.unlock_and_commit(pin);
        }

        apply_mode(&block, pin, descriptor.initial_mode);

        match descriptor.direction {
            PinDirection::Output => {
                block.set_pin(Register::Direction, pin);
                block.write_pin(Register::Data, pin, descriptor.initial_level.is_high());
            }
            PinDirection::Input => {
                block.clear_pin(Register::Direction, pin);
                apply_resistor(&block, pin, descriptor.resistor);
            }
        }
    }
}
