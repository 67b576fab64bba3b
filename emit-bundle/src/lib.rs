//! In-memory packaging of jsemit outputs.
//!
//! This crate is a consumer of [`jsemit_output::OutputFileCollection`]: it
//! reads every output of a compilation unit and packs the bytes together
//! with a manifest describing where each file came from.
//!
//! # Module Organization
//!
//! - [`Bundle`] - Packed output bytes keyed by bundled path
//! - [`BundleConfig`] - `[bundle]` options read from TOML
//! - [`BundleManifest`] - Serializable description of a bundle
//! - [`testing`] - Test utilities (feature-gated)

mod bundle;
mod config;
mod error;
mod manifest;

pub use bundle::Bundle;
pub use config::{BundleConfig, EntryOrder};
pub use error::{Error, Result};
pub use manifest::{BundleManifest, ManifestEntry};

#[cfg(any(test, feature = "testing"))]
pub mod testing;
