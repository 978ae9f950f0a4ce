//! Loaded extension modules.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use libloading::Library;
use txsigner_extension_sdk::abi::{
    ABI_VERSION, ABI_VERSION_SYMBOL, AbiVersionFn, RegisterInterfacesFn,
    RegisterLegacyAminoCodecFn, interfaces_symbol, legacy_amino_symbol,
};

use crate::error::{Error, Result};

/// A loaded unit of code exposing registration entry points by name.
pub trait ExtensionModule: Send + Sync {
    /// Where the module was loaded from; also its identity in caches.
    fn path(&self) -> &Path;

    /// Look up a `<Symbol>_RegisterLegacyAminoCodec` entry point.
    fn lookup_legacy_amino(&self, symbol: &str) -> Option<RegisterLegacyAminoCodecFn>;

    /// Look up a `<Symbol>_RegisterInterfaces` entry point.
    fn lookup_interfaces(&self, symbol: &str) -> Option<RegisterInterfacesFn>;
}

/// Shared library opened with `libloading`.
///
/// The library handle is leaked: entry points handed out by this module must
/// stay valid for the rest of the process.
pub struct NativeModule {
    path: PathBuf,
    library: &'static Library,
}

impl NativeModule {
    /// Open a native extension.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::LoadFailed {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        // Runs the library's initializers; extensions are trusted code.
        let library = unsafe { Library::new(path) }.map_err(|e| Error::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let version = unsafe { library.get::<AbiVersionFn>(ABI_VERSION_SYMBOL.as_bytes()) }
            .ok()
            .map(|version_fn| version_fn());
        if let Some(got) = version {
            if got != ABI_VERSION {
                return Err(Error::IncompatibleAbi {
                    path: path.to_path_buf(),
                    expected: ABI_VERSION,
                    got,
                });
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            library: Box::leak(Box::new(library)),
        })
    }

    fn symbol<T: Copy>(&self, name: &str) -> Option<T> {
        match unsafe { self.library.get::<T>(name.as_bytes()) } {
            Ok(symbol) => Some(*symbol),
            Err(e) => {
                tracing::trace!("{} not exported by {}: {}", name, self.path.display(), e);
                None
            }
        }
    }
}

impl ExtensionModule for NativeModule {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lookup_legacy_amino(&self, symbol: &str) -> Option<RegisterLegacyAminoCodecFn> {
        self.symbol(symbol)
    }

    fn lookup_interfaces(&self, symbol: &str) -> Option<RegisterInterfacesFn> {
        self.symbol(symbol)
    }
}

impl std::fmt::Debug for NativeModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeModule").field("path", &self.path).finish()
    }
}

/// Entry points compiled into the host, keyed by the same symbol names a
/// shared library would export.
#[derive(Debug, Clone)]
pub struct StaticModule {
    path: PathBuf,
    legacy_amino: HashMap<String, RegisterLegacyAminoCodecFn>,
    interfaces: HashMap<String, RegisterInterfacesFn>,
}

impl StaticModule {
    /// `path` only identifies the module; nothing is read from disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            legacy_amino: HashMap::new(),
            interfaces: HashMap::new(),
        }
    }

    /// Add both entry points for the package symbol `base`
    /// (e.g. `Cosmos_bank_v1beta1`).
    pub fn with_package(
        self,
        base: &str,
        legacy_amino: RegisterLegacyAminoCodecFn,
        interfaces: RegisterInterfacesFn,
    ) -> Self {
        self.with_legacy_amino(&legacy_amino_symbol(base), legacy_amino)
            .with_interfaces(&interfaces_symbol(base), interfaces)
    }

    /// Add a single legacy entry point under its full exported name.
    pub fn with_legacy_amino(mut self, symbol: &str, f: RegisterLegacyAminoCodecFn) -> Self {
        self.legacy_amino.insert(symbol.to_string(), f);
        self
    }

    /// Add a single interface entry point under its full exported name.
    pub fn with_interfaces(mut self, symbol: &str, f: RegisterInterfacesFn) -> Self {
        self.interfaces.insert(symbol.to_string(), f);
        self
    }
}

impl ExtensionModule for StaticModule {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lookup_legacy_amino(&self, symbol: &str) -> Option<RegisterLegacyAminoCodecFn> {
        self.legacy_amino.get(symbol).copied()
    }

    fn lookup_interfaces(&self, symbol: &str) -> Option<RegisterInterfacesFn> {
        self.interfaces.get(symbol).copied()
    }
}
