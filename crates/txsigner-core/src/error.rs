//! Error types for the registration pipeline.

use std::path::PathBuf;

use crate::codec::CodecError;

/// Errors surfaced by scanning, loading and registration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON decode {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read plugins directory {path}: {source}")]
    PluginsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lookup symbol {symbol} for package {package}: no extension exports it")]
    ExtensionNotFound { package: String, symbol: String },

    #[error("Extension {module} exports only half of package {package}: missing symbol {symbol}")]
    MissingSymbol {
        package: String,
        symbol: String,
        module: PathBuf,
    },

    #[error("Load failed: {path}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    #[error("Incompatible extension ABI in {path}: expected {expected}, got {got}")]
    IncompatibleAbi {
        path: PathBuf,
        expected: u32,
        got: u32,
    },

    #[error("{symbol}: {source}")]
    Registration {
        symbol: String,
        #[source]
        source: CodecError,
    },

    #[error("{symbol} returned status {status}")]
    ExtensionStatus { symbol: String, status: i32 },

    #[error("Types still unregistered after loading extensions: {}", .0.join(", "))]
    StillUnregistered(Vec<String>),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("{command} failed: {reason}")]
    Command { command: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for registration operations
pub type Result<T> = std::result::Result<T, Error>;
