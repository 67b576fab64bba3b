use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for bundle operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Output(#[from] jsemit_output::Error),

    #[error("invalid bundle configuration")]
    #[diagnostic(
        code(jsemit::bundle_config),
        help("the [bundle] table accepts `prefix`, `order` and `include_sources`")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid setting here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize bundle manifest")]
    #[diagnostic(code(jsemit::bundle_manifest))]
    Manifest {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a configuration error pointing at the offending TOML.
    pub(crate) fn config(src: &str, filename: &str, source: toml::de::Error) -> Self {
        let span = source.span().map(SourceSpan::from);
        Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        }
    }
}
