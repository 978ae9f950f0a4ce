//! txsigner Extension SDK
//!
//! Extensions teach the txsigner codec about message types it was not
//! compiled with. For every protobuf package an extension supports it exports
//! two C entry points, named after the package's sanitized symbol:
//!
//! - `<Symbol>_RegisterLegacyAminoCodec(*const LegacyAminoRegistrar) -> i32`
//! - `<Symbol>_RegisterInterfaces(*const InterfaceRegistrar) -> i32`
//!
//! where `/cosmos.bank.v1beta1` becomes `Cosmos_bank_v1beta1`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use txsigner_extension_sdk::prelude::*;
//!
//! fn register_amino(amino: &mut LegacyAmino<'_>) -> Result<(), RegistrationError> {
//!     amino.register_concrete("/cosmos.bank.v1beta1.MsgBurn", "cosmos-sdk/MsgBurn")
//! }
//!
//! fn register_interfaces(registry: &mut Interfaces<'_>) -> Result<(), RegistrationError> {
//!     registry.register_implementation("cosmos.base.v1beta1.Msg", "/cosmos.bank.v1beta1.MsgBurn")
//! }
//!
//! export_abi_version!();
//! export_registrations! {
//!     symbol: Cosmos_bank_v1beta1,
//!     legacy_amino: register_amino,
//!     interfaces: register_interfaces,
//! }
//! ```

pub mod abi;
pub mod error;
#[macro_use]
pub mod macros;
pub mod registrar;

pub use abi::{
    ABI_VERSION, INTERFACES_SUFFIX, InterfaceRegistrar, LEGACY_AMINO_SUFFIX,
    LegacyAminoRegistrar, RegisterInterfacesFn, RegisterLegacyAminoCodecFn, Status, StrRef,
};
pub use error::RegistrationError;
pub use registrar::{Interfaces, LegacyAmino};

#[doc(hidden)]
pub use paste as __paste;

/// Prelude module with common imports
pub mod prelude {
    pub use crate::error::RegistrationError;
    pub use crate::registrar::{Interfaces, LegacyAmino};
    pub use crate::{export_abi_version, export_registrations};
}
