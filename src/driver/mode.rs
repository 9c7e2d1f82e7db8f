#![cfg(feature = "set-pin-mode-api")]

use tracing::{debug, trace};

use super::{Port, apply_mode};
use crate::Error;
use crate::constants::PORT_NUMBER_OF_PORT_PINS;
use crate::fault::{ApiId, FaultReporter};
use crate::gpio::PinMode;
use crate::registers::RegisterAccess;

impl<R: RegisterAccess, F: FaultReporter> Port<'_, R, F> {
    /// Change the mode of the pin at position `pin` in the configuration set.
    ///
    /// `mode` is a mode code as accepted by [`PinMode::try_from`]: 0 for analog
    /// input, 1 to 9 for an alternate function, 10 for digital I/O. The pin's mode
    /// bits and mux slot are rewritten as at init; its direction, output level and
    /// internal resistor are untouched. Calls for PC0 to PC3 succeed without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// - [`Error::Uninitialized`] before [`Port::init`].
    /// - [`Error::InvalidPin`] if `pin` is not below [`PORT_NUMBER_OF_PORT_PINS`], or
    ///   is not a position in the configuration set.
    /// - [`Error::InvalidMode`] if `mode` is above 10.
    /// - [`Error::ModeUnchangeable`] if the pin's descriptor does not allow mode
    ///   changes. Not checked without the `dev-error-detect` feature.
    ///
    /// Every failed check is reported; the first one is returned.
    pub fn set_pin_mode(&self, pin: usize, mode: u8) -> Result<(), Error> {
        let mut checks = self.checks(ApiId::SetPinMode);
        if self.config.is_none() {
            checks.fail(Error::Uninitialized);
        }
        let in_range = checks
            .check(if pin < PORT_NUMBER_OF_PORT_PINS {
                Ok(())
            } else {
                Err(Error::InvalidPin {
                    pin,
                    limit: PORT_NUMBER_OF_PORT_PINS,
                })
            })
            .is_some();
        let descriptor = match self.config {
            Some(config) if in_range => checks.check(config.get(pin).ok_or(Error::InvalidPin {
                pin,
                limit: config.len(),
            })),
            _ => None,
        };
        let mode = checks.check(PinMode::try_from(mode));
        #[cfg(feature = "dev-error-detect")]
        if let Some(descriptor) = descriptor {
            if !descriptor.mode_changeable {
                checks.fail(Error::ModeUnchangeable { pin });
            }
        }
        checks.finish()?;

        let (Some(descriptor), Some(mode)) = (descriptor, mode) else {
            return Ok(());
        };
        if descriptor.is_debug_reserved() {
            debug!(port = %descriptor.port, pin = %descriptor.pin, "skipping debug pin");
            return Ok(());
        }
        trace!(port = %descriptor.port, pin = %descriptor.pin, ?mode, "set pin mode");
        apply_mode(&self.block(descriptor.port), descriptor.pin, mode);
        Ok(())
    }
}
