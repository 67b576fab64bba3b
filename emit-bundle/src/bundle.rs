use indexmap::{IndexMap, map::Entry};
use jsemit_output::OutputFileCollection;
use tracing::debug;

use crate::{BundleConfig, BundleManifest, EntryOrder, ManifestEntry, Result};

/// Outputs of one compilation unit packed into memory.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    files: IndexMap<String, Vec<u8>>,
    manifest: BundleManifest,
}

impl Bundle {
    /// Read every output of `outputs` and pack it according to `config`.
    ///
    /// Errors from the collection are propagated as is; nothing is skipped.
    /// A collection that lists the same output twice fails with
    /// [`jsemit_output::Error::DuplicateOutput`].
    pub fn pack(outputs: &dyn OutputFileCollection, config: &BundleConfig) -> Result<Self> {
        let mut ids = outputs.output_files();
        if config.order == EntryOrder::Path {
            ids.sort_unstable();
        }

        let mut bundle = Bundle {
            files: IndexMap::with_capacity(ids.len()),
            manifest: BundleManifest {
                files: Vec::with_capacity(ids.len()),
            },
        };

        for id in ids {
            let bytes = outputs.as_bytes(id)?;
            let entry = match bundle.files.entry(config.bundled_path(id)) {
                Entry::Occupied(_) => {
                    let err = jsemit_output::Error::DuplicateOutput { id: id.to_string() };
                    return Err(err.into());
                }
                Entry::Vacant(entry) => entry,
            };
            let sources = if config.include_sources {
                outputs.source_files(id).to_vec()
            } else {
                Vec::new()
            };

            bundle.manifest.files.push(ManifestEntry {
                path: entry.key().clone(),
                output: id.to_string(),
                size: bytes.len(),
                sources,
            });
            entry.insert(bytes.to_vec());
        }

        debug!(
            files = bundle.len(),
            bytes = bundle.manifest.total_size(),
            "packed bundle"
        );
        Ok(bundle)
    }

    /// Bytes stored under a bundled path.
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Bundled paths in bundle order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Manifest describing the packed files, in bundle order.
    pub fn manifest(&self) -> &BundleManifest {
        &self.manifest
    }

    /// Get the number of packed files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
