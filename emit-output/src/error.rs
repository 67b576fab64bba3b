use miette::Diagnostic;
use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations raised by the output registry.
///
/// Neither variant is transient: both mean the producer or the consumer of a
/// registry has a bug, and the output phase should stop.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("output file '{id}' already added")]
    #[diagnostic(
        code(jsemit::duplicate_output),
        help("each output file may be emitted only once per compilation unit")
    )]
    DuplicateOutput { id: String },

    #[error("requested content for non-existent output file '{id}'")]
    #[diagnostic(
        code(jsemit::unknown_output),
        help("list the registered outputs with `output_files` before reading them")
    )]
    UnknownOutput { id: String },
}

impl Error {
    pub(crate) fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateOutput { id: id.into() }
    }

    pub(crate) fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownOutput { id: id.into() }
    }

    /// The output identifier the error refers to.
    pub fn id(&self) -> &str {
        match self {
            Self::DuplicateOutput { id } | Self::UnknownOutput { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_output() {
        assert_eq!(
            Error::duplicate("x.js").to_string(),
            "output file 'x.js' already added"
        );
        assert_eq!(
            Error::unknown("missing.js").to_string(),
            "requested content for non-existent output file 'missing.js'"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let code = Error::duplicate("a.js").code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("jsemit::duplicate_output"));

        let code = Error::unknown("a.js").code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("jsemit::unknown_output"));
    }

    #[test]
    fn test_id_accessor() {
        assert_eq!(Error::duplicate("a.js").id(), "a.js");
        assert_eq!(Error::unknown("b.js").id(), "b.js");
    }
}
