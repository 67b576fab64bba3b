use indexmap::IndexMap;

use crate::{Error, OutputFileCollection, Result, SourceFile};

/// Read-only outputs of a compilation unit whose generation phase is over.
///
/// Produced by [`OutputRegistry::seal`](crate::OutputRegistry::seal).
#[derive(Debug, Clone)]
pub struct SealedOutputs {
    sources: Vec<SourceFile>,
    entries: IndexMap<String, String>,
}

impl SealedOutputs {
    pub(crate) fn new(sources: Vec<SourceFile>, entries: IndexMap<String, String>) -> Self {
        Self { sources, entries }
    }

    /// Source files the registry was created with.
    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    /// Iterate over `(id, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, content)| (id.as_str(), content.as_str()))
    }

    /// Get the number of outputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no outputs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OutputFileCollection for SealedOutputs {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputRegistry;

    fn registry() -> OutputRegistry {
        let mut registry = OutputRegistry::with_sources(["a.kt"]);
        registry.add_output("b.js", "b").unwrap();
        registry.add_output("a.js", "a").unwrap();
        registry
    }

    #[test]
    fn test_sealed_reads_match_registry() {
        let open = registry();
        let sealed = open.clone().seal();

        assert_eq!(sealed.output_files(), open.output_files());
        assert_eq!(sealed.sources(), open.sources());
        assert_eq!(sealed.len(), 2);
        for id in open.output_files() {
            assert_eq!(sealed.as_text(id).unwrap(), open.as_text(id).unwrap());
            assert_eq!(sealed.as_bytes(id).unwrap(), open.as_bytes(id).unwrap());
        }
    }

    #[test]
    fn test_sealed_unknown_output() {
        let sealed = registry().seal();

        assert_eq!(sealed.as_text("c.js").unwrap_err().id(), "c.js");
        assert!(sealed.as_bytes("c.js").is_err());
        assert_eq!(sealed.source_files("c.js"), [SourceFile::from("a.kt")]);
    }

    #[test]
    fn test_sealed_empty_registry() {
        let sealed = OutputRegistry::new().seal();

        assert!(sealed.is_empty());
        assert_eq!(sealed.iter().count(), 0);
        assert!(sealed.output_files().is_empty());
    }
}
