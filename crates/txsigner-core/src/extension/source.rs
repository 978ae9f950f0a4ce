//! Where extension modules come from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::module::{ExtensionModule, NativeModule, StaticModule};
use crate::config::is_native_extension;
use crate::error::{Error, Result};

/// Enumerates and opens candidate modules.
pub trait ModuleSource {
    /// Candidate module paths in `dir`.
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Open one candidate.
    fn open(&self, path: &Path) -> Result<Arc<dyn ExtensionModule>>;
}

/// Shared libraries on the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeModuleSource;

impl ModuleSource for NativeModuleSource {
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|source| Error::PluginsDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut extensions: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_native_extension(path))
            .collect();
        extensions.sort();
        Ok(extensions)
    }

    fn open(&self, path: &Path) -> Result<Arc<dyn ExtensionModule>> {
        Ok(Arc::new(NativeModule::open(path)?))
    }
}

/// Modules compiled into the host.
///
/// Every module is a candidate regardless of the directory searched.
#[derive(Debug, Default, Clone)]
pub struct StaticModuleSource {
    modules: Vec<Arc<StaticModule>>,
}

impl StaticModuleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: StaticModule) -> Self {
        self.modules.push(Arc::new(module));
        self
    }
}

impl ModuleSource for StaticModuleSource {
    fn discover(&self, _dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .modules
            .iter()
            .map(|m| m.path().to_path_buf())
            .collect())
    }

    fn open(&self, path: &Path) -> Result<Arc<dyn ExtensionModule>> {
        self.modules
            .iter()
            .find(|m| m.path() == path)
            .map(|m| m.clone() as Arc<dyn ExtensionModule>)
            .ok_or_else(|| Error::LoadFailed {
                path: path.to_path_buf(),
                reason: "no static module with this path".to_string(),
            })
    }
}
