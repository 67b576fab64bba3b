//! Output artifact registry for the jsemit translator backend.
//!
//! A compilation unit owns one [`OutputRegistry`]. The code generator adds
//! each file it emits exactly once, then hands the registry (or its
//! [`SealedOutputs`] view) to whatever packages the result.
//!
//! # Example
//!
//! ```
//! use jsemit_output::{OutputFileCollection, OutputRegistry};
//!
//! let mut registry = OutputRegistry::with_sources(["a.kt"]);
//! registry.add_output("out.js", "console.log(1)")?;
//!
//! let outputs = registry.seal();
//! assert_eq!(outputs.output_files(), vec!["out.js"]);
//! assert_eq!(outputs.as_text("out.js")?, "console.log(1)");
//! # Ok::<(), jsemit_output::Error>(())
//! ```

mod collection;
mod error;
mod registry;
mod sealed;
mod source;

pub use collection::OutputFileCollection;
pub use error::{Error, Result};
pub use registry::OutputRegistry;
pub use sealed::SealedOutputs;
pub use source::SourceFile;
