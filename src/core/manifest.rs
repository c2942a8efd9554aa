//! core::manifest
//!
//! Loading the project manifest and extracting its script table.
//!
//! Only the `"scripts"` object of the manifest is interpreted; everything
//! else in the descriptor is opaque to Runlet. Entry order is preserved
//! (serde_json's `preserve_order` feature) so help output and error listings
//! match the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::naming::is_valid_name;
use super::scripts::ScriptTable;

/// Errors from manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The subset of the project manifest that Runlet reads.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Manifest {
    /// Project name, used in debug output only.
    #[serde(default)]
    pub name: Option<String>,

    /// Raw script entries, in file order. Values may be any JSON type;
    /// non-strings are classified as malformed by [`Manifest::script_table`].
    #[serde(default)]
    scripts: serde_json::Map<String, Value>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the script table, separating well-formed entries from
    /// malformed ones.
    ///
    /// An entry is malformed when its name fails the naming rule or its
    /// body is not a string; either way it cannot be run.
    pub fn script_table(&self) -> ScriptTable {
        let mut entries = Vec::new();
        let mut malformed = Vec::new();

        for (name, value) in &self.scripts {
            match value.as_str() {
                Some(body) if is_valid_name(name) => {
                    entries.push((name.clone(), body.to_string()));
                }
                _ => malformed.push(name.clone()),
            }
        }

        ScriptTable::new(entries, malformed)
    }
}
