//! Dropping null-valued optional keys from output documents.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use crate::config::DEFAULT_NULL_KEYS;
use crate::error::Result;

/// Removes designated keys whose value is null, and null array elements.
///
/// Other keys are left alone, including maps that end up empty.
#[derive(Debug, Clone)]
pub struct NullKeyFilter {
    keys: HashSet<String>,
}

impl Default for NullKeyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NULL_KEYS.iter().copied())
    }
}

impl NullKeyFilter {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn filter_value(&self, mut value: Value) -> Value {
        self.filter_in_place(&mut value);
        value
    }

    pub fn filter_in_place(&self, value: &mut Value) {
        match value {
            Value::Object(map) => {
                for child in map.values_mut() {
                    self.filter_in_place(child);
                }
                map.retain(|key, child| !(child.is_null() && self.keys.contains(key)));
            }
            Value::Array(items) => {
                for item in items.iter_mut() {
                    self.filter_in_place(item);
                }
                items.retain(|item| !item.is_null());
            }
            _ => {}
        }
    }

    /// Filter a serialized document.
    ///
    /// Bytes that are not valid JSON are returned unchanged. A trailing
    /// newline on the input is kept.
    pub fn filter_bytes(&self, bytes: &[u8]) -> Vec<u8> {
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(_) => return bytes.to_vec(),
        };
        let mut out = match serde_json::to_vec(&self.filter_value(value)) {
            Ok(out) => out,
            Err(_) => return bytes.to_vec(),
        };
        if bytes.ends_with(b"\n") {
            out.push(b'\n');
        }
        out
    }

    /// Rewrite a JSON file in place. An empty path is a no-op.
    pub fn filter_file(&self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        let content = std::fs::read(path)?;
        let value: Value = serde_json::from_slice(&content)?;
        let filtered = serde_json::to_vec(&self.filter_value(value))?;
        std::fs::write(path, filtered)?;
        tracing::debug!("Filtered null keys in {}", path.display());
        Ok(())
    }
}

/// Filter an output document file with the default key set.
pub fn filter_null_keys_file(path: &Path) -> Result<()> {
    NullKeyFilter::default().filter_file(path)
}

/// Writer that filters every chunk written through it.
///
/// Each `write` call is treated as one complete document; chunks that do
/// not parse are forwarded untouched.
pub struct FilterNullKeysWriter<W> {
    output: W,
    filter: NullKeyFilter,
}

impl<W: Write> FilterNullKeysWriter<W> {
    pub fn new(output: W) -> Self {
        Self::with_filter(output, NullKeyFilter::default())
    }

    pub fn with_filter(output: W, filter: NullKeyFilter) -> Self {
        Self { output, filter }
    }

    pub fn get_ref(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Write for FilterNullKeysWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let filtered = self.filter.filter_bytes(buf);
        self.output.write_all(&filtered)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
