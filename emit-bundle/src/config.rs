use serde::Deserialize;

use crate::{Error, Result};

/// Order of files in a packed bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// The order the outputs were registered in.
    #[default]
    Insertion,
    /// Sorted by output identifier.
    Path,
}

/// Options controlling how outputs are packed.
///
/// Read from the `[bundle]` table of a TOML document:
///
/// ```toml
/// [bundle]
/// prefix = "dist"
/// order = "path"
/// include_sources = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleConfig {
    /// Directory prepended to every output path.
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub order: EntryOrder,
    /// List source files on each manifest entry.
    #[serde(default = "default_true")]
    pub include_sources: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            order: EntryOrder::default(),
            include_sources: true,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    bundle: BundleConfig,
}

impl BundleConfig {
    /// Parse the `[bundle]` table; a missing table yields the defaults.
    pub fn from_toml(src: &str) -> Result<Self> {
        Self::from_toml_named(src, "bundle.toml")
    }

    /// Like [`BundleConfig::from_toml`], naming `filename` in diagnostics.
    pub fn from_toml_named(src: &str, filename: &str) -> Result<Self> {
        toml::from_str::<ConfigFile>(src)
            .map(|file| file.bundle)
            .map_err(|source| Error::config(src, filename, source))
    }

    /// Path an output is stored under in the bundle.
    ///
    /// Only trailing slashes of the prefix are trimmed; `id` is used as is.
    pub fn bundled_path(&self, id: &str) -> String {
        match self.prefix.as_deref().map(|p| p.trim_end_matches('/')) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}/{id}"),
            _ => id.to_string(),
        }
    }
}
