//! Write-once registry of generated output files.
//!
//! The code generator registers each file as it emits it; consumers read the
//! files back by identifier once generation is done.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = OutputRegistry::with_sources(["main.kt"]);
//!
//! registry.add_output("main.js", main_js)?;
//! registry.add_output("main.js.map", source_map)?;
//!
//! // Parallel producers fill their own shard and merge it afterwards
//! registry.merge(shard)?;
//!
//! let outputs = registry.seal();
//! ```

use indexmap::{IndexMap, map::Entry};
use tracing::debug;

use crate::{Error, OutputFileCollection, Result, SealedOutputs, SourceFile};

/// Registry for collecting the output files of one compilation unit.
///
/// Identifiers are unique for the lifetime of the registry and are
/// enumerated in insertion order. Source files are fixed at construction and
/// shared by every output.
#[derive(Debug, Default, Clone)]
pub struct OutputRegistry {
    sources: Vec<SourceFile>,
    entries: IndexMap<String, String>,
}

impl OutputRegistry {
    /// Create an empty registry with no source files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry bound to the given source files.
    pub fn with_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SourceFile>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            entries: IndexMap::new(),
        }
    }

    /// Register an output file.
    ///
    /// Fails with [`Error::DuplicateOutput`] if `id` was already registered;
    /// the existing content is left untouched.
    pub fn add_output(&mut self, id: impl Into<String>, content: impl Into<String>) -> Result<()> {
        match self.entries.entry(id.into()) {
            Entry::Occupied(entry) => Err(Error::duplicate(entry.key().as_str())),
            Entry::Vacant(entry) => {
                let content = content.into();
                debug!(output = %entry.key(), bytes = content.len(), "registered output");
                entry.insert(content);
                Ok(())
            }
        }
    }

    /// Move every output of `shard` into this registry.
    ///
    /// Shard entries are appended in their own insertion order. If any
    /// identifier is already registered here, nothing is moved and
    /// [`Error::DuplicateOutput`] names the first clash. The shard's source
    /// list is dropped; this registry keeps its own.
    pub fn merge(&mut self, shard: OutputRegistry) -> Result<()> {
        if let Some(id) = shard.entries.keys().find(|id| self.entries.contains_key(*id)) {
            return Err(Error::duplicate(id.as_str()));
        }

        let merged = shard.entries.len();
        self.entries.extend(shard.entries);
        debug!(merged, total = self.entries.len(), "merged output shard");
        Ok(())
    }

    /// Stop accepting outputs and hand out a read-only view.
    pub fn seal(self) -> SealedOutputs {
        debug!(outputs = self.entries.len(), "sealed output registry");
        SealedOutputs::new(self.sources, self.entries)
    }

    /// Source files this registry was created with.
    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    /// Check if an output has been registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate over `(id, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, content)| (id.as_str(), content.as_str()))
    }

    /// Get the number of registered outputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OutputFileCollection for OutputRegistry {
    fn output_files(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn source_files(&self, _id: &str) -> &[SourceFile] {
        &self.sources
    }

    fn as_text(&self, id: &str) -> Result<&str> {
        self.entries
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| Error::unknown(id))
    }
}
