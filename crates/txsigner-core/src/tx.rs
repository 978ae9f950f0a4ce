//! Reading the messages out of an unsigned transaction document.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// The part of a transaction JSON document the scanner needs.
#[derive(Debug, Default, Deserialize)]
pub struct RawTx {
    #[serde(default)]
    pub body: RawTxBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTxBody {
    #[serde(default)]
    pub messages: Vec<Value>,
}

impl RawTx {
    /// Read the first transaction in `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::MalformedDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read every transaction in `path` (one JSON document after another,
    /// as batch files are written).
    pub fn read_all(path: &Path) -> Result<Vec<Self>> {
        let file = File::open(path)?;
        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<RawTx>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|source| Error::MalformedDocument {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn messages(&self) -> &[Value] {
        &self.body.messages
    }
}

/// All messages of every transaction in `path`.
pub fn read_messages(path: &Path) -> Result<Vec<Value>> {
    Ok(RawTx::read_all(path)?
        .into_iter()
        .flat_map(|tx| tx.body.messages)
        .collect())
}
