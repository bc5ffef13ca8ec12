use crate::chunk::ChunkRecord;
use crate::error::{ManifestError, Result};
use crate::index::ManifestIndex;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use vite_manifest_config::ViteOptions;

/// Reads a Vite manifest once and produces a [`ManifestIndex`].
///
/// The loader tries its candidate paths in order and reads the first one that
/// exists. If none exist it logs a single warning and yields an empty index:
/// that is how the application runs against the Vite dev server. A manifest
/// that exists but cannot be read or parsed is an error.
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    candidates: Vec<PathBuf>,
}

impl ManifestLoader {
    /// Loader for exactly this manifest path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Loader for the configured manifest, falling back to the `.vite/`
    /// directory Vite 5+ writes it to.
    pub fn from_options(options: &ViteOptions) -> Self {
        let primary = options.manifest_path();
        let fallback = options.vite_dir_manifest_path();

        let mut candidates = vec![primary];
        if !candidates.contains(&fallback) {
            candidates.push(fallback);
        }
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn load(&self) -> Result<ManifestIndex> {
        let Some(path) = self.candidates.iter().find(|path| path.is_file()) else {
            let expected = self.candidates.first().cloned().unwrap_or_default();
            warn!(
                code = "manifest_missing",
                path = %expected.display(),
                "The manifest file was not found. Did you forget to run `vite build`? Ignore this message if you're using the Vite dev server."
            );
            return Ok(ManifestIndex::missing(expected));
        };

        let bytes = fs::read(path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        let index = parse_manifest(path, &bytes)?;

        debug!(path = %path.display(), chunks = index.len(), "loaded vite manifest");
        Ok(index)
    }
}

/// Parse manifest bytes read from `path`.
///
/// Duplicate keys keep the last value.
pub fn parse_manifest(path: &Path, bytes: &[u8]) -> Result<ManifestIndex> {
    let chunks: IndexMap<String, ChunkRecord> =
        serde_json::from_slice(bytes).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ManifestIndex::from_chunks(chunks, path.to_path_buf()))
}
