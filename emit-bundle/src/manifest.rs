use jsemit_output::SourceFile;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Description of every file in a [`Bundle`](crate::Bundle), in bundle order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleManifest {
    pub files: Vec<ManifestEntry>,
}

/// One packed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Path inside the bundle.
    pub path: String,
    /// Identifier the output was registered under.
    pub output: String,
    /// Content length in bytes.
    pub size: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceFile>,
}

impl BundleManifest {
    /// Total size of all packed files in bytes.
    pub fn total_size(&self) -> usize {
        self.files.iter().map(|entry| entry.size).sum()
    }

    /// Render the manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| Error::Manifest { source })
    }
}
