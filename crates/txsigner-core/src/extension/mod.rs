//! Extension system: loading modules that register extra message types.
//!
//! Extensions are shared libraries (.so/.dylib/.dll) dropped into a plugins
//! directory. They are never matched by file name; the loader asks every
//! candidate for the entry points derived from a package path.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               ExtensionLoader                │
//! │  - caches opened modules by path             │
//! │  - resolves package -> entry point names     │
//! │  - invokes legacy, then interface hooks      │
//! └──────────────────────────────────────────────┘
//!                       │ ModuleSource
//!           ┌───────────┴───────────┐
//!           ▼                       ▼
//!   ┌───────────────┐       ┌───────────────┐
//!   │ NativeModule  │       │ StaticModule  │
//!   │ (libloading)  │       │ (fn table)    │
//!   └───────────────┘       └───────────────┘
//! ```
//!
//! # FFI Exports
//!
//! For a package `/cosmos.bank.v1beta1` an extension exports:
//! - `Cosmos_bank_v1beta1_RegisterLegacyAminoCodec(*const LegacyAminoRegistrar) -> i32`
//! - `Cosmos_bank_v1beta1_RegisterInterfaces(*const InterfaceRegistrar) -> i32`
//! - optionally `txsigner_extension_abi_version() -> u32`
//!
//! # Usage
//!
//! ```rust,ignore
//! use txsigner_core::{Codec, ExtensionLoader, find_unregistered_types};
//!
//! let mut codec = Codec::with_builtin_types();
//! let unresolved = find_unregistered_types(&codec, &messages);
//! let mut loader = ExtensionLoader::new();
//! loader.register_types(&mut codec, plugins_dir, &unresolved)?;
//! ```

mod host;
pub mod loader;
pub mod module;
pub mod source;

pub use loader::{ExtensionLoader, LoadedExtension};
pub use module::{ExtensionModule, NativeModule, StaticModule};
pub use source::{ModuleSource, NativeModuleSource, StaticModuleSource};
