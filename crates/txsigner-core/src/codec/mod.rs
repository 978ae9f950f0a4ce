//! In-process codec: the interface registry and the legacy amino surface.
//!
//! The registries only ever grow. Registering an identical entry twice is a
//! no-op so extensions can be invoked more than once safely.

pub mod amino;
pub mod builtin;
pub mod registry;

use std::sync::Arc;

use parking_lot::Mutex;

pub use amino::LegacyAmino;
pub use registry::{InterfaceRegistry, MessageDescriptor};

/// Codec errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unable to resolve type URL {0}")]
    NotRegistered(String),

    #[error("invalid type URL: {0}")]
    InvalidTypeUrl(String),

    #[error("interface {0} is not registered")]
    UnknownInterface(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Anything a type URL can be resolved against.
pub trait TypeResolver {
    /// Succeeds when `type_url` maps to a known message.
    fn resolve(&self, type_url: &str) -> Result<(), CodecError>;
}

/// Caller-owned codec handed to the registration pipeline.
#[derive(Debug, Default)]
pub struct Codec {
    pub registry: InterfaceRegistry,
    pub amino: LegacyAmino,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec preloaded with the types the client is compiled with.
    pub fn with_builtin_types() -> Self {
        let mut codec = Self::new();
        builtin::register(&mut codec);
        codec
    }

    pub fn interface_registry(&self) -> &InterfaceRegistry {
        &self.registry
    }

    pub fn legacy_amino(&self) -> &LegacyAmino {
        &self.amino
    }
}

impl TypeResolver for Codec {
    fn resolve(&self, type_url: &str) -> Result<(), CodecError> {
        self.registry.resolve(type_url).map(|_| ())
    }
}

/// Codec shared between concurrent document pipelines.
///
/// Hold the lock across scan and extension loading.
pub type SharedCodec = Arc<Mutex<Codec>>;
