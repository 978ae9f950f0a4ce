//! Legacy amino JSON names.

use std::collections::HashMap;

use super::CodecError;
use crate::type_url;

/// Bidirectional map between type URLs and amino names.
#[derive(Debug, Default)]
pub struct LegacyAmino {
    by_type_url: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl LegacyAmino {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a concrete type to its amino name.
    ///
    /// Registering the same pair twice is a no-op; reusing either side with
    /// a different partner is a conflict.
    pub fn register_concrete(&mut self, type_url: &str, amino_name: &str) -> Result<(), CodecError> {
        type_url::validate(type_url)?;
        if amino_name.is_empty() {
            return Err(CodecError::InvalidArgument(format!(
                "empty amino name for {}",
                type_url
            )));
        }

        match (self.by_type_url.get(type_url), self.by_name.get(amino_name)) {
            (Some(existing), _) if existing == amino_name => Ok(()),
            (Some(existing), _) => Err(CodecError::Conflict(format!(
                "{} already registered as {}",
                type_url, existing
            ))),
            (None, Some(owner)) => Err(CodecError::Conflict(format!(
                "amino name {} already used by {}",
                amino_name, owner
            ))),
            (None, None) => {
                self.by_type_url
                    .insert(type_url.to_string(), amino_name.to_string());
                self.by_name
                    .insert(amino_name.to_string(), type_url.to_string());
                Ok(())
            }
        }
    }

    pub fn amino_name(&self, type_url: &str) -> Option<&str> {
        self.by_type_url.get(type_url).map(String::as_str)
    }

    pub fn type_url(&self, amino_name: &str) -> Option<&str> {
        self.by_name.get(amino_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_type_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type_url.is_empty()
    }
}
