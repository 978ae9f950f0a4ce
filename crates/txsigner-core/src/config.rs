//! Shared defaults, environment variable names and plugin directory lookup.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Discriminator key carrying a message's type URL.
pub const TYPE_URL_KEY: &str = "@type";

/// Keys dropped from output documents when their value is null.
pub const DEFAULT_NULL_KEYS: &[&str] = &["tip"];

/// Environment variable names
pub mod env_vars {
    pub const PLUGINS_DIR: &str = "TXSIGNER_PLUGINS_DIR";
    pub const LOG_JSON: &str = "TXSIGNER_LOG_JSON";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// File extension of loadable extension modules on this platform.
pub fn native_library_extension() -> &'static str {
    match std::env::consts::OS {
        "macos" | "ios" => "dylib",
        "windows" => "dll",
        _ => "so",
    }
}

/// Check if a file looks like a native extension module for this platform.
pub fn is_native_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext == native_library_extension())
        .unwrap_or(false)
}

/// Where extension modules are searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginsConfig {
    pub plugins_dir: PathBuf,
}

impl PluginsConfig {
    pub fn new(plugins_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugins_dir: plugins_dir.into(),
        }
    }

    /// Resolve from an explicit flag, falling back to `TXSIGNER_PLUGINS_DIR`.
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(flag, |key| std::env::var(key).ok())
    }

    /// Like [`PluginsConfig::resolve`] with a custom environment lookup.
    pub fn resolve_with<F>(flag: Option<PathBuf>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        flag.filter(|p| !p.as_os_str().is_empty())
            .or_else(|| {
                env(env_vars::PLUGINS_DIR)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .map(Self::new)
            .ok_or(Error::MissingArgument("plugins-dir"))
    }
}
