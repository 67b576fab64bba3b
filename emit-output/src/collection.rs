use crate::{Result, SourceFile};

/// Read access to the outputs of one compilation unit.
///
/// This is what packaging and writing stages consume. It is object safe so
/// consumers can take `&dyn OutputFileCollection` and stay independent of
/// whether the registry has been sealed.
pub trait OutputFileCollection {
    /// Identifiers of every registered output, in insertion order.
    fn output_files(&self) -> Vec<&str>;

    /// Source files that produced the outputs.
    ///
    /// Sources are tracked per collection, not per output: the same list is
    /// returned for every `id`, registered or not.
    fn source_files(&self, id: &str) -> &[SourceFile];

    /// Content of an output, verbatim.
    fn as_text(&self, id: &str) -> Result<&str>;

    /// UTF-8 bytes of an output's content.
    fn as_bytes(&self, id: &str) -> Result<&[u8]> {
        self.as_text(id).map(str::as_bytes)
    }
}
