//! Resolving unregistered types through extension modules.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use txsigner_extension_sdk::abi::{
    self, RegisterInterfacesFn, RegisterLegacyAminoCodecFn,
};

use super::host;
use super::module::ExtensionModule;
use super::source::{ModuleSource, NativeModuleSource};
use crate::codec::{Codec, SharedCodec, TypeResolver};
use crate::error::{Error, Result};
use crate::scan::{UnresolvedSet, find_unregistered_types};
use crate::type_url::{lookup_packages, sanitize_symbol_name};

/// Information about a module the loader has opened.
#[derive(Debug, Clone)]
pub struct LoadedExtension {
    /// Path to the module file
    pub path: PathBuf,
    /// When the module was opened
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    /// Package paths registered from this module
    pub packages: BTreeSet<String>,
}

struct EntryPoints<'m> {
    module: &'m Arc<dyn ExtensionModule>,
    legacy_amino: RegisterLegacyAminoCodecFn,
    interfaces: RegisterInterfacesFn,
}

/// Loads extension modules and runs their registration hooks.
///
/// Modules are cached by path for the lifetime of the loader, so loading the
/// same directory again does not reopen anything.
pub struct ExtensionLoader<S = NativeModuleSource> {
    source: S,
    modules: HashMap<PathBuf, Arc<dyn ExtensionModule>>,
    loaded: BTreeMap<PathBuf, LoadedExtension>,
}

impl ExtensionLoader<NativeModuleSource> {
    /// Loader for shared libraries on disk.
    pub fn new() -> Self {
        Self::with_source(NativeModuleSource)
    }
}

impl Default for ExtensionLoader<NativeModuleSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ModuleSource> ExtensionLoader<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            modules: HashMap::new(),
            loaded: BTreeMap::new(),
        }
    }

    /// Candidate module files in `dir`.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.source.discover(dir)
    }

    /// Modules opened so far.
    pub fn loaded(&self) -> impl Iterator<Item = &LoadedExtension> {
        self.loaded.values()
    }

    /// Open every candidate in `dir`, reusing cached modules.
    ///
    /// A candidate that fails to open is skipped: from the caller's point of
    /// view it is the same as not having a matching extension.
    fn open_all(&mut self, dir: &Path) -> Result<Vec<Arc<dyn ExtensionModule>>> {
        let mut modules = Vec::new();

        for path in self.source.discover(dir)? {
            if let Some(module) = self.modules.get(&path) {
                modules.push(module.clone());
                continue;
            }

            match self.source.open(&path) {
                Ok(module) => {
                    tracing::debug!("Opened extension module: {}", path.display());
                    self.modules.insert(path.clone(), module.clone());
                    self.loaded.insert(
                        path.clone(),
                        LoadedExtension {
                            path,
                            loaded_at: chrono::Utc::now(),
                            packages: BTreeSet::new(),
                        },
                    );
                    modules.push(module);
                }
                Err(e) => {
                    tracing::warn!("Failed to load extension {}: {}", path.display(), e);
                }
            }
        }

        Ok(modules)
    }

    /// Make every type URL in `unresolved` resolvable by `codec`.
    ///
    /// For each distinct package the first module exporting both entry
    /// points wins; its legacy hook runs before its interface hook. Types
    /// that already resolve are skipped, which makes repeated calls cheap.
    pub fn register_types(
        &mut self,
        codec: &mut Codec,
        dir: &Path,
        unresolved: &UnresolvedSet,
    ) -> Result<()> {
        let pending: Vec<&String> = unresolved
            .iter()
            .filter(|type_url| codec.resolve(type_url).is_err())
            .collect();
        if pending.is_empty() {
            tracing::debug!("All requested types already registered");
            return Ok(());
        }

        let packages = lookup_packages(&pending);
        let modules = self.open_all(dir)?;

        for package in &packages {
            let base = sanitize_symbol_name(package);
            let legacy_symbol = abi::legacy_amino_symbol(&base);
            let interfaces_symbol = abi::interfaces_symbol(&base);

            let entry = find_entry_points(&modules, package, &legacy_symbol, &interfaces_symbol)?;

            host::call_legacy_amino(entry.legacy_amino, &mut codec.amino, &legacy_symbol)?;
            host::call_interfaces(entry.interfaces, &mut codec.registry, &interfaces_symbol)?;

            let module_path = entry.module.path();
            tracing::info!(
                "Registered package {} from {}",
                package,
                module_path.display()
            );
            if let Some(loaded) = self.loaded.get_mut(module_path) {
                loaded.packages.insert(package.clone());
            }
        }

        let still: Vec<String> = pending
            .into_iter()
            .filter(|type_url| codec.resolve(type_url).is_err())
            .cloned()
            .collect();
        if !still.is_empty() {
            return Err(Error::StillUnregistered(still));
        }

        Ok(())
    }

    /// Scan `messages`, load whatever is missing and verify the result.
    ///
    /// Returns the type URLs that had to be registered.
    pub fn ensure_registered(
        &mut self,
        codec: &mut Codec,
        dir: &Path,
        messages: &[Value],
    ) -> Result<UnresolvedSet> {
        let unresolved = find_unregistered_types(&*codec, messages);
        if unresolved.is_empty() {
            return Ok(unresolved);
        }

        tracing::info!(
            "Found {} unregistered type(s), searching {}",
            unresolved.len(),
            dir.display()
        );
        self.register_types(codec, dir, &unresolved)?;
        Ok(unresolved)
    }

    /// [`ExtensionLoader::ensure_registered`] on a shared codec, holding its
    /// lock across scan and registration.
    pub fn ensure_registered_shared(
        &mut self,
        codec: &SharedCodec,
        dir: &Path,
        messages: &[Value],
    ) -> Result<UnresolvedSet> {
        let mut guard = codec.lock();
        self.ensure_registered(&mut guard, dir, messages)
    }
}

fn find_entry_points<'m>(
    modules: &'m [Arc<dyn ExtensionModule>],
    package: &str,
    legacy_symbol: &str,
    interfaces_symbol: &str,
) -> Result<EntryPoints<'m>> {
    let mut partial: Option<(PathBuf, &str)> = None;

    for module in modules {
        match (
            module.lookup_legacy_amino(legacy_symbol),
            module.lookup_interfaces(interfaces_symbol),
        ) {
            (Some(legacy_amino), Some(interfaces)) => {
                return Ok(EntryPoints {
                    module,
                    legacy_amino,
                    interfaces,
                });
            }
            (Some(_), None) => {
                partial.get_or_insert((module.path().to_path_buf(), interfaces_symbol));
            }
            (None, Some(_)) => {
                partial.get_or_insert((module.path().to_path_buf(), legacy_symbol));
            }
            (None, None) => {}
        }
    }

    Err(match partial {
        Some((module, symbol)) => Error::MissingSymbol {
            package: package.to_string(),
            symbol: symbol.to_string(),
            module,
        },
        None => Error::ExtensionNotFound {
            package: package.to_string(),
            symbol: legacy_symbol.to_string(),
        },
    })
}
