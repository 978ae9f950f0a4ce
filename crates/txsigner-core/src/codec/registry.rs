//! Interface registry: type URL -> message descriptor.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{CodecError, TypeResolver};
use crate::type_url;

/// What the registry knows about a message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// `/cosmos.bank.v1beta1.MsgSend`
    pub type_url: String,
    /// `cosmos.bank.v1beta1.MsgSend`
    pub full_name: String,
    /// Interfaces this message implements
    pub interfaces: BTreeSet<String>,
}

impl MessageDescriptor {
    fn new(type_url: &str) -> Self {
        Self {
            type_url: type_url.to_string(),
            full_name: type_url
                .trim_start_matches(type_url::PATH_SEPARATOR)
                .to_string(),
            interfaces: BTreeSet::new(),
        }
    }

    pub fn package(&self) -> &str {
        type_url::package_path(&self.type_url)
    }
}

/// Registry of interfaces and the message types implementing them.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    interfaces: BTreeMap<String, BTreeSet<String>>,
    types: HashMap<String, MessageDescriptor>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an interface. Declaring it again is a no-op.
    pub fn register_interface(&mut self, interface: &str) -> Result<(), CodecError> {
        if interface.is_empty() || interface.starts_with(type_url::PATH_SEPARATOR) {
            return Err(CodecError::InvalidArgument(format!(
                "bad interface name {:?}",
                interface
            )));
        }
        self.interfaces.entry(interface.to_string()).or_default();
        Ok(())
    }

    /// Register `type_url` as an implementation of `interface`.
    ///
    /// The interface is declared on the fly if needed.
    pub fn register_implementation(
        &mut self,
        interface: &str,
        type_url: &str,
    ) -> Result<(), CodecError> {
        type_url::validate(type_url)?;
        self.register_interface(interface)?;

        let added = self
            .interfaces
            .get_mut(interface)
            .map(|impls| impls.insert(type_url.to_string()))
            .unwrap_or(false);

        self.types
            .entry(type_url.to_string())
            .or_insert_with(|| MessageDescriptor::new(type_url))
            .interfaces
            .insert(interface.to_string());

        if added {
            tracing::trace!(interface, type_url, "Registered implementation");
        }
        Ok(())
    }

    /// Look up a message descriptor.
    pub fn resolve(&self, type_url: &str) -> Result<&MessageDescriptor, CodecError> {
        type_url::validate(type_url)?;
        self.types
            .get(type_url)
            .ok_or_else(|| CodecError::NotRegistered(type_url.to_string()))
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.types.contains_key(type_url)
    }

    pub fn list_interfaces(&self) -> Vec<&str> {
        self.interfaces.keys().map(String::as_str).collect()
    }

    pub fn list_implementations(&self, interface: &str) -> Result<Vec<&str>, CodecError> {
        self.interfaces
            .get(interface)
            .map(|impls| impls.iter().map(String::as_str).collect())
            .ok_or_else(|| CodecError::UnknownInterface(interface.to_string()))
    }

    /// Number of registered message types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for InterfaceRegistry {
    fn resolve(&self, type_url: &str) -> Result<(), CodecError> {
        InterfaceRegistry::resolve(self, type_url).map(|_| ())
    }
}
