//! Host side of the registrar ABI: C callbacks backed by the codec.

use std::ffi::c_void;

use txsigner_extension_sdk::abi::{
    InterfaceRegistrar, LegacyAminoRegistrar, RegisterInterfacesFn, RegisterLegacyAminoCodecFn,
    STATUS_CONFLICT, STATUS_FAILED, STATUS_INVALID_ARGUMENT, STATUS_OK, Status, StrRef,
};

use crate::codec::{CodecError, InterfaceRegistry, LegacyAmino};
use crate::error::{Error, Result};

struct AminoContext<'a> {
    amino: &'a mut LegacyAmino,
    error: Option<CodecError>,
}

struct InterfacesContext<'a> {
    registry: &'a mut InterfaceRegistry,
    error: Option<CodecError>,
}

fn status_of(error: &CodecError) -> Status {
    match error {
        CodecError::Conflict(_) => STATUS_CONFLICT,
        CodecError::InvalidTypeUrl(_) | CodecError::InvalidArgument(_) => STATUS_INVALID_ARGUMENT,
        _ => STATUS_FAILED,
    }
}

fn record(slot: &mut Option<CodecError>, result: std::result::Result<(), CodecError>) -> Status {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => {
            let status = status_of(&e);
            // Keep the first failure; later ones are usually fallout.
            slot.get_or_insert(e);
            status
        }
    }
}

fn utf8(s: StrRef, what: &str) -> std::result::Result<String, CodecError> {
    unsafe { s.as_str() }
        .map(str::to_string)
        .ok_or_else(|| CodecError::InvalidArgument(format!("{} is not valid UTF-8", what)))
}

unsafe extern "C" fn register_concrete(
    ctx: *mut c_void,
    type_url: StrRef,
    amino_name: StrRef,
) -> Status {
    let ctx = unsafe { &mut *(ctx as *mut AminoContext<'_>) };
    let result = utf8(type_url, "type URL").and_then(|type_url| {
        let amino_name = utf8(amino_name, "amino name")?;
        ctx.amino.register_concrete(&type_url, &amino_name)
    });
    record(&mut ctx.error, result)
}

unsafe extern "C" fn register_interface(ctx: *mut c_void, interface: StrRef) -> Status {
    let ctx = unsafe { &mut *(ctx as *mut InterfacesContext<'_>) };
    let result = utf8(interface, "interface name")
        .and_then(|interface| ctx.registry.register_interface(&interface));
    record(&mut ctx.error, result)
}

unsafe extern "C" fn register_implementation(
    ctx: *mut c_void,
    interface: StrRef,
    type_url: StrRef,
) -> Status {
    let ctx = unsafe { &mut *(ctx as *mut InterfacesContext<'_>) };
    let result = utf8(interface, "interface name").and_then(|interface| {
        let type_url = utf8(type_url, "type URL")?;
        ctx.registry.register_implementation(&interface, &type_url)
    });
    record(&mut ctx.error, result)
}

fn finish(symbol: &str, status: Status, error: Option<CodecError>) -> Result<()> {
    // A recorded callback failure wins even if the extension ignored it.
    match (status, error) {
        (_, Some(source)) => Err(Error::Registration {
            symbol: symbol.to_string(),
            source,
        }),
        (STATUS_OK, None) => Ok(()),
        (status, None) => Err(Error::ExtensionStatus {
            symbol: symbol.to_string(),
            status,
        }),
    }
}

/// Invoke a legacy registration entry point against `amino`.
pub(crate) fn call_legacy_amino(
    entry: RegisterLegacyAminoCodecFn,
    amino: &mut LegacyAmino,
    symbol: &str,
) -> Result<()> {
    let mut ctx = AminoContext { amino, error: None };
    let registrar = LegacyAminoRegistrar {
        ctx: &mut ctx as *mut AminoContext<'_> as *mut c_void,
        register_concrete,
    };
    let status = unsafe { entry(&registrar) };
    finish(symbol, status, ctx.error)
}

/// Invoke an interface registration entry point against `registry`.
pub(crate) fn call_interfaces(
    entry: RegisterInterfacesFn,
    registry: &mut InterfaceRegistry,
    symbol: &str,
) -> Result<()> {
    let mut ctx = InterfacesContext {
        registry,
        error: None,
    };
    let registrar = InterfaceRegistrar {
        ctx: &mut ctx as *mut InterfacesContext<'_> as *mut c_void,
        register_interface,
        register_implementation,
    };
    let status = unsafe { entry(&registrar) };
    finish(symbol, status, ctx.error)
}
