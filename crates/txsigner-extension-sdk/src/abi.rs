//! C ABI shared between the host and extension modules.
//!
//! Everything here is `#[repr(C)]` and must stay layout-compatible across
//! releases with the same [`ABI_VERSION`].

use std::ffi::c_void;

/// Extension ABI version (must match the txsigner host)
pub const ABI_VERSION: u32 = 1;

/// Name of the optional export reporting the ABI an extension was built against.
pub const ABI_VERSION_SYMBOL: &str = "txsigner_extension_abi_version";

/// Suffix of the legacy (amino JSON) registration entry point.
pub const LEGACY_AMINO_SUFFIX: &str = "_RegisterLegacyAminoCodec";

/// Suffix of the interface registry entry point.
pub const INTERFACES_SUFFIX: &str = "_RegisterInterfaces";

/// Status code returned across the boundary.
pub type Status = i32;

pub const STATUS_OK: Status = 0;
pub const STATUS_CONFLICT: Status = 1;
pub const STATUS_INVALID_ARGUMENT: Status = 2;
pub const STATUS_FAILED: Status = 3;
pub const STATUS_PANICKED: Status = 4;

/// Borrowed UTF-8 string passed by pointer and length.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct StrRef {
    pub ptr: *const u8,
    pub len: usize,
}

impl StrRef {
    pub fn new(s: &str) -> Self {
        Self {
            ptr: s.as_ptr(),
            len: s.len(),
        }
    }

    /// View the referenced bytes as a string.
    ///
    /// Returns `None` for a null pointer with a non-zero length or for
    /// invalid UTF-8.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `len` readable bytes that outlive `'a`.
    pub unsafe fn as_str<'a>(&self) -> Option<&'a str> {
        if self.ptr.is_null() {
            return (self.len == 0).then_some("");
        }
        let bytes = unsafe { std::slice::from_raw_parts(self.ptr, self.len) };
        std::str::from_utf8(bytes).ok()
    }
}

/// Host table for the legacy amino registration surface.
#[repr(C)]
pub struct LegacyAminoRegistrar {
    pub ctx: *mut c_void,
    pub register_concrete:
        unsafe extern "C" fn(ctx: *mut c_void, type_url: StrRef, amino_name: StrRef) -> Status,
}

/// Host table for the interface registry.
#[repr(C)]
pub struct InterfaceRegistrar {
    pub ctx: *mut c_void,
    pub register_interface: unsafe extern "C" fn(ctx: *mut c_void, interface: StrRef) -> Status,
    pub register_implementation:
        unsafe extern "C" fn(ctx: *mut c_void, interface: StrRef, type_url: StrRef) -> Status,
}

/// `<Symbol>_RegisterLegacyAminoCodec`
pub type RegisterLegacyAminoCodecFn =
    unsafe extern "C" fn(registrar: *const LegacyAminoRegistrar) -> Status;

/// `<Symbol>_RegisterInterfaces`
pub type RegisterInterfacesFn = unsafe extern "C" fn(registrar: *const InterfaceRegistrar) -> Status;

/// `txsigner_extension_abi_version`
pub type AbiVersionFn = extern "C" fn() -> u32;

/// Entry point name for legacy registration of the package symbol `base`.
pub fn legacy_amino_symbol(base: &str) -> String {
    format!("{}{}", base, LEGACY_AMINO_SUFFIX)
}

/// Entry point name for interface registration of the package symbol `base`.
pub fn interfaces_symbol(base: &str) -> String {
    format!("{}{}", base, INTERFACES_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_names() {
        assert_eq!(
            legacy_amino_symbol("Cosmos_bank_v1beta1"),
            "Cosmos_bank_v1beta1_RegisterLegacyAminoCodec"
        );
        assert_eq!(
            interfaces_symbol("Cosmos_bank_v1beta1"),
            "Cosmos_bank_v1beta1_RegisterInterfaces"
        );
    }

    #[test]
    fn test_str_ref_round_trip() {
        let owned = String::from("/cosmos.bank.v1beta1.MsgSend");
        let r = StrRef::new(&owned);
        assert_eq!(unsafe { r.as_str() }, Some("/cosmos.bank.v1beta1.MsgSend"));
    }

    #[test]
    fn test_str_ref_null() {
        let empty = StrRef {
            ptr: std::ptr::null(),
            len: 0,
        };
        assert_eq!(unsafe { empty.as_str() }, Some(""));

        let dangling = StrRef {
            ptr: std::ptr::null(),
            len: 4,
        };
        assert_eq!(unsafe { dangling.as_str() }, None);
    }
}
