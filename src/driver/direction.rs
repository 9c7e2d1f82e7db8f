use tracing::trace;

use super::Port;
use crate::Error;
use crate::fault::{ApiId, FaultReporter};
#[cfg(feature = "set-pin-direction-api")]
use crate::gpio::PinDirection;
use crate::registers::{Register, RegisterAccess};

impl<R: RegisterAccess, F: FaultReporter> Port<'_, R, F> {
    /// Change the direction of the pin at position `pin` in the configuration set.
    ///
    /// Only the pin's direction bit is written. The output level, internal resistor
    /// and mode stay as they are. Calls for PC0 to PC3 succeed without writing
    /// anything.
    ///
    /// # Errors
    ///
    /// - [`Error::Uninitialized`] before [`Port::init`].
    /// - [`Error::InvalidPin`] if `pin` is not a position in the configuration set.
    /// - [`Error::DirectionUnchangeable`] if the pin's descriptor does not allow
    ///   direction changes. Not checked without the `dev-error-detect` feature.
    ///
    /// Every failed check is reported; the first one is returned.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn set_pin_direction(&self, pin: usize, direction: PinDirection) -> Result<(), Error> {
        let mut checks = self.checks(ApiId::SetPinDirection);
        let descriptor = match self.config {
            None => {
                checks.fail(Error::Uninitialized);
                None
            }
            Some(config) => checks.check(config.get(pin).ok_or(Error::InvalidPin {
                pin,
                limit: config.len(),
            })),
        };
        #[cfg(feature = "dev-error-detect")]
        if let Some(descriptor) = descriptor {
            if !descriptor.direction_changeable {
                checks.fail(Error::DirectionUnchangeable { pin });
            }
        }
        checks.finish()?;

        let Some(descriptor) = descriptor else {
            return Ok(());
        };
        if descriptor.is_debug_reserved() {
            tracing::debug!(port = %descriptor.port, pin = %descriptor.pin, "skipping debug pin");
            return Ok(());
        }
        trace!(port = %descriptor.port, pin = %descriptor.pin, ?direction, "set pin direction");
        self.block(descriptor.port)
            .write_pin(Register::Direction, descriptor.pin, direction.is_output());
        Ok(())
    }

    /// Restore the configured direction of every pin whose direction is fixed.
    ///
    /// Pins whose direction may be changed at runtime, and PC0 to PC3, are skipped.
    /// Only direction bits are written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Uninitialized`] before [`Port::init`].
    pub fn refresh_port_direction(&self) -> Result<(), Error> {
        let Some(config) = self.config else {
            return Err(self.reject(ApiId::RefreshPortDirection, Error::Uninitialized));
        };

        for descriptor in config {
            if descriptor.direction_changeable || descriptor.is_debug_reserved() {
                continue;
            }
            self.block(descriptor.port).write_pin(
                Register::Direction,
                descriptor.pin,
                descriptor.direction.is_output(),
            );
        }
        trace!("port directions refreshed");
        Ok(())
    }
}
