//! Safe views over the host registrars, used from inside entry points.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::abi::{
    InterfaceRegistrar, LegacyAminoRegistrar, STATUS_INVALID_ARGUMENT, STATUS_OK, STATUS_PANICKED,
    Status, StrRef,
};
use crate::error::RegistrationError;

/// Legacy amino registration surface handed to an extension.
pub struct LegacyAmino<'a> {
    raw: &'a LegacyAminoRegistrar,
}

impl<'a> LegacyAmino<'a> {
    pub fn new(raw: &'a LegacyAminoRegistrar) -> Self {
        Self { raw }
    }

    /// Bind `type_url` to its amino JSON name (e.g. `cosmos-sdk/MsgSend`).
    pub fn register_concrete(
        &mut self,
        type_url: &str,
        amino_name: &str,
    ) -> Result<(), RegistrationError> {
        let status = unsafe {
            (self.raw.register_concrete)(
                self.raw.ctx,
                StrRef::new(type_url),
                StrRef::new(amino_name),
            )
        };
        RegistrationError::check(status, type_url)
    }
}

/// Interface registry handed to an extension.
pub struct Interfaces<'a> {
    raw: &'a InterfaceRegistrar,
}

impl<'a> Interfaces<'a> {
    pub fn new(raw: &'a InterfaceRegistrar) -> Self {
        Self { raw }
    }

    /// Declare an interface (e.g. `cosmos.base.v1beta1.Msg`).
    pub fn register_interface(&mut self, interface: &str) -> Result<(), RegistrationError> {
        let status = unsafe { (self.raw.register_interface)(self.raw.ctx, StrRef::new(interface)) };
        RegistrationError::check(status, interface)
    }

    /// Declare `type_url` as an implementation of `interface`.
    pub fn register_implementation(
        &mut self,
        interface: &str,
        type_url: &str,
    ) -> Result<(), RegistrationError> {
        let status = unsafe {
            (self.raw.register_implementation)(
                self.raw.ctx,
                StrRef::new(interface),
                StrRef::new(type_url),
            )
        };
        RegistrationError::check(status, type_url)
    }

    /// Register several implementations of one interface.
    pub fn register_implementations(
        &mut self,
        interface: &str,
        type_urls: &[&str],
    ) -> Result<(), RegistrationError> {
        self.register_interface(interface)?;
        for type_url in type_urls {
            self.register_implementation(interface, type_url)?;
        }
        Ok(())
    }
}

fn to_status(outcome: std::thread::Result<Result<(), RegistrationError>>) -> Status {
    match outcome {
        Ok(Ok(())) => STATUS_OK,
        Ok(Err(e)) => e.status(),
        Err(_) => STATUS_PANICKED,
    }
}

/// Run a legacy registration function behind an exported entry point.
///
/// # Safety
///
/// `raw` must be null or point to a registrar that is valid for the call.
#[doc(hidden)]
pub unsafe fn invoke_legacy_amino<F>(raw: *const LegacyAminoRegistrar, f: F) -> Status
where
    F: FnOnce(&mut LegacyAmino<'_>) -> Result<(), RegistrationError>,
{
    let Some(raw) = (unsafe { raw.as_ref() }) else {
        return STATUS_INVALID_ARGUMENT;
    };
    let mut amino = LegacyAmino::new(raw);
    to_status(catch_unwind(AssertUnwindSafe(|| f(&mut amino))))
}

/// Run an interface registration function behind an exported entry point.
///
/// # Safety
///
/// `raw` must be null or point to a registrar that is valid for the call.
#[doc(hidden)]
pub unsafe fn invoke_interfaces<F>(raw: *const InterfaceRegistrar, f: F) -> Status
where
    F: FnOnce(&mut Interfaces<'_>) -> Result<(), RegistrationError>,
{
    let Some(raw) = (unsafe { raw.as_ref() }) else {
        return STATUS_INVALID_ARGUMENT;
    };
    let mut interfaces = Interfaces::new(raw);
    to_status(catch_unwind(AssertUnwindSafe(|| f(&mut interfaces))))
}
