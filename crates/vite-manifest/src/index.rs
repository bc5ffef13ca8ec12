use crate::chunk::ChunkRecord;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where an index came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOrigin {
    /// Parsed from this manifest file
    File(PathBuf),
    /// No manifest existed at this path (dev server mode)
    Missing(PathBuf),
}

impl ManifestOrigin {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Missing(path) => path,
        }
    }
}

#[derive(Debug, Clone)]
struct IndexedChunk {
    /// Key as spelled in the manifest
    key: String,
    chunk: ChunkRecord,
}

/// Immutable, case-insensitive view over a parsed manifest.
///
/// Built once at startup by [`ManifestLoader`](crate::ManifestLoader) and
/// shared read-only afterwards (wrap it in an `Arc` to hand it to several
/// owners). There are no mutating methods.
#[derive(Debug, Clone)]
pub struct ManifestIndex {
    /// Folded key -> chunk, in manifest order
    chunks: IndexMap<String, IndexedChunk>,
    origin: ManifestOrigin,
}

impl ManifestIndex {
    /// Index over parsed chunks. Keys that differ only by case collapse into
    /// one slot, later ones winning.
    pub(crate) fn from_chunks(
        chunks: impl IntoIterator<Item = (String, ChunkRecord)>,
        path: PathBuf,
    ) -> Self {
        let mut folded = IndexMap::new();
        for (key, chunk) in chunks {
            folded.insert(fold_key(&key), IndexedChunk { key, chunk });
        }

        Self {
            chunks: folded,
            origin: ManifestOrigin::File(path),
        }
    }

    /// Empty index standing in for a manifest that does not exist.
    pub(crate) fn missing(path: PathBuf) -> Self {
        Self {
            chunks: IndexMap::new(),
            origin: ManifestOrigin::Missing(path),
        }
    }

    /// Look up the chunk for a manifest key such as `src/main.ts`.
    ///
    /// A miss returns `None` and logs: a warning when a manifest was loaded,
    /// a debug event when there is none because the dev server is serving
    /// assets and every lookup is expected to miss.
    pub fn lookup(&self, key: &str) -> Option<&ChunkRecord> {
        let found = self.find(key);
        if found.is_none() {
            if self.is_dev_fallback() {
                debug!(key, "chunk not found; no manifest loaded, the dev server serves entries directly");
            } else {
                warn!(
                    key,
                    manifest = %self.origin.path().display(),
                    "The chunk was not found in the manifest. If you're using the Vite dev server, missing chunks are expected."
                );
            }
        }
        found
    }

    /// Lookup without diagnostics.
    pub(crate) fn find(&self, key: &str) -> Option<&ChunkRecord> {
        self.chunks.get(&fold_key(key)).map(|entry| &entry.chunk)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.chunks.contains_key(&fold_key(key))
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn origin(&self) -> &ManifestOrigin {
        &self.origin
    }

    /// True when the index was built without a manifest file.
    pub fn is_dev_fallback(&self) -> bool {
        matches!(self.origin, ManifestOrigin::Missing(_))
    }

    /// All chunks with their manifest keys, in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChunkRecord)> {
        self.chunks
            .values()
            .map(|entry| (entry.key.as_str(), &entry.chunk))
    }

    /// Only the chunks flagged `isEntry`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ChunkRecord)> {
        self.iter().filter(|(_, chunk)| chunk.is_entry)
    }
}

pub(crate) fn fold_key(key: &str) -> String {
    key.to_lowercase()
}
