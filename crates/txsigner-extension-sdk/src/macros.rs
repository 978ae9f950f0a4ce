//! Macros for extension authors.

/// Export the two registration entry points for one package.
///
/// `symbol` is the sanitized package symbol: the package path without its
/// leading `/`, dots replaced by `_`, first letter upper-cased
/// (`/cosmos.bank.v1beta1` -> `Cosmos_bank_v1beta1`).
///
/// # Example
///
/// ```rust,ignore
/// use txsigner_extension_sdk::prelude::*;
///
/// fn amino(amino: &mut LegacyAmino<'_>) -> Result<(), RegistrationError> {
///     amino.register_concrete("/cosmos.bank.v1beta1.MsgBurn", "cosmos-sdk/MsgBurn")
/// }
///
/// fn interfaces(registry: &mut Interfaces<'_>) -> Result<(), RegistrationError> {
///     registry.register_implementations("cosmos.base.v1beta1.Msg", &["/cosmos.bank.v1beta1.MsgBurn"])
/// }
///
/// export_registrations! {
///     symbol: Cosmos_bank_v1beta1,
///     legacy_amino: amino,
///     interfaces: interfaces,
/// }
/// ```
#[macro_export]
macro_rules! export_registrations {
    (
        symbol: $symbol:ident,
        legacy_amino: $legacy:path,
        interfaces: $interfaces:path $(,)?
    ) => {
        $crate::__paste::paste! {
            #[allow(non_snake_case)]
            #[no_mangle]
            pub unsafe extern "C" fn [<$symbol _RegisterLegacyAminoCodec>](
                registrar: *const $crate::abi::LegacyAminoRegistrar,
            ) -> $crate::abi::Status {
                unsafe { $crate::registrar::invoke_legacy_amino(registrar, $legacy) }
            }

            #[allow(non_snake_case)]
            #[no_mangle]
            pub unsafe extern "C" fn [<$symbol _RegisterInterfaces>](
                registrar: *const $crate::abi::InterfaceRegistrar,
            ) -> $crate::abi::Status {
                unsafe { $crate::registrar::invoke_interfaces(registrar, $interfaces) }
            }
        }
    };
}

/// Export `txsigner_extension_abi_version`. Use once per extension library.
#[macro_export]
macro_rules! export_abi_version {
    () => {
        #[no_mangle]
        pub extern "C" fn txsigner_extension_abi_version() -> u32 {
            $crate::abi::ABI_VERSION
        }
    };
}
