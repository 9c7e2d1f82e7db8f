//! Reporting of development faults.
//!
//! Every precondition the port driver checks at runtime is reported through a
//! [`FaultReporter`] before the operation returns its error. The reporter is an
//! external collaborator: this module defines the interface, the service and error
//! codes, and [`LogReporter`], which turns each report into a `tracing` event.
//!
//! With the `dev-error-detect` feature disabled the driver never calls the reporter.

/// Identifier of the driver service that detected a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiId {
    /// [`Port::init`](crate::Port::init)
    Init,
    /// [`Port::set_pin_direction`](crate::Port::set_pin_direction)
    SetPinDirection,
    /// [`Port::refresh_port_direction`](crate::Port::refresh_port_direction)
    RefreshPortDirection,
    /// Version information query. Reserved; this crate exposes versions as constants.
    GetVersionInfo,
    /// [`Port::set_pin_mode`](crate::Port::set_pin_mode)
    SetPinMode,
}

impl From<ApiId> for u8 {
    fn from(value: ApiId) -> Self {
        match value {
            ApiId::Init => 0x00,
            ApiId::SetPinDirection => 0x01,
            ApiId::RefreshPortDirection => 0x02,
            ApiId::GetVersionInfo => 0x03,
            ApiId::SetPinMode => 0x04,
        }
    }
}

/// Development error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// Invalid pin index requested.
    ParamPin,
    /// Pin direction change requested on a pin configured as not changeable.
    DirectionUnchangeable,
    /// Init called without a valid configuration.
    ParamConfig,
    /// Pin mode code out of range.
    ParamInvalidMode,
    /// Pin mode change requested on a pin configured as not changeable.
    ModeUnchangeable,
    /// Service called before init.
    Uninit,
    /// Service called with a missing output parameter.
    ///
    /// No service in this crate takes an output parameter, so this code is never
    /// raised. It is kept so the code table is complete for fault services that
    /// decode it.
    ParamPointer,
}

impl From<FaultCode> for u8 {
    fn from(value: FaultCode) -> Self {
        match value {
            FaultCode::ParamPin => 0x0A,
            FaultCode::DirectionUnchangeable => 0x0B,
            FaultCode::ParamConfig => 0x0C,
            FaultCode::ParamInvalidMode => 0x0D,
            FaultCode::ModeUnchangeable => 0x0E,
            FaultCode::Uninit => 0x0F,
            FaultCode::ParamPointer => 0x10,
        }
    }
}

/// Receiver of development fault reports.
///
/// Called synchronously from inside the driver's operations; the driver does not
/// look at any outcome of the report.
pub trait FaultReporter {
    /// Record a fault detected by `api_id` in module `module_id`, instance `instance_id`.
    fn report_fault(&self, module_id: u16, instance_id: u8, api_id: ApiId, code: FaultCode);
}

impl<T: FaultReporter + ?Sized> FaultReporter for &T {
    fn report_fault(&self, module_id: u16, instance_id: u8, api_id: ApiId, code: FaultCode) {
        (**self).report_fault(module_id, instance_id, api_id, code)
    }
}

/// A [`FaultReporter`] that emits a `tracing` warning for every fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl FaultReporter for LogReporter {
    fn report_fault(&self, module_id: u16, instance_id: u8, api_id: ApiId, code: FaultCode) {
        tracing::warn!(
            module_id,
            instance_id,
            api_id = u8::from(api_id),
            error_id = u8::from(code),
            "port fault {code:?} in {api_id:?}"
        );
    }
}

/// Report `code` for `api_id` with this driver's module and instance identifiers.
#[cfg(feature = "dev-error-detect")]
pub(crate) fn report(reporter: &impl FaultReporter, api_id: ApiId, code: FaultCode) {
    use crate::constants::{PORT_INSTANCE_ID, PORT_MODULE_ID};
    reporter.report_fault(PORT_MODULE_ID, PORT_INSTANCE_ID, api_id, code);
}
