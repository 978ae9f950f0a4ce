//! txsigner core
//!
//! Dynamic type registration for an offline transaction client. Before a
//! transaction is signed, every `@type` in its messages must resolve in the
//! codec. Types the client was not built with are registered at run time by
//! extension modules found in a plugins directory.
//!
//! ## Pipeline
//!
//! 1. [`find_unregistered_types`] walks the message documents and collects
//!    type URLs the codec cannot resolve.
//! 2. [`ExtensionLoader::register_types`] maps them to package paths, finds
//!    the module exporting each package's entry points and runs them.
//! 3. The command runs against the enlarged codec.
//! 4. [`NullKeyFilter`] drops null `tip` entries from the output document.
//!
//! [`PluginAwareCommand`] wires the steps together.

pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod extension;
pub mod filter;
pub mod scan;
pub mod tx;
pub mod type_url;

pub use codec::{
    Codec, CodecError, InterfaceRegistry, LegacyAmino, MessageDescriptor, SharedCodec,
    TypeResolver,
};
pub use command::{PluginAwareCommand, TxCommand, TxCommandArgs};
pub use config::{DEFAULT_NULL_KEYS, PluginsConfig, TYPE_URL_KEY};
pub use error::{Error, Result};
pub use extension::{
    ExtensionLoader, ExtensionModule, LoadedExtension, ModuleSource, NativeModule,
    NativeModuleSource, StaticModule, StaticModuleSource,
};
pub use filter::{FilterNullKeysWriter, NullKeyFilter, filter_null_keys_file};
pub use scan::{UnresolvedSet, find_unregistered_in, find_unregistered_types};
pub use tx::{RawTx, read_messages};
pub use type_url::{lookup_packages, sanitize_symbol_name};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::codec::{Codec, SharedCodec, TypeResolver};
    pub use crate::command::{PluginAwareCommand, TxCommand, TxCommandArgs};
    pub use crate::error::{Error, Result};
    pub use crate::extension::ExtensionLoader;
    pub use crate::filter::NullKeyFilter;
    pub use crate::scan::find_unregistered_types;
}
