//! Entry point asset resolution.
//!
//! Follows the backend integration walk Vite documents: the entry script,
//! every stylesheet reachable through static imports, and the imported chunks
//! to preload. Dynamic imports are left to the browser.

use crate::chunk::ChunkRecord;
use crate::index::{ManifestIndex, fold_key};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Everything a page needs to reference for one entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAssets {
    /// The entry's own script
    pub file: String,
    /// Stylesheets: the entry's first, then those of imported chunks
    pub css: Vec<String>,
    /// Statically imported chunk files, dependencies before dependents
    pub preload: Vec<String>,
}

impl ManifestIndex {
    /// Resolve an entry and its static import graph.
    ///
    /// Returns `None` (and logs like [`lookup`](Self::lookup)) if the entry is
    /// not in the manifest. Import keys missing from the manifest are skipped.
    pub fn resolve_entry(&self, key: &str) -> Option<EntryAssets> {
        let entry = self.lookup(key)?;

        let mut seen = HashSet::from([fold_key(key)]);
        let mut imported = Vec::new();
        self.collect_imports(entry, &mut seen, &mut imported);

        let css: IndexSet<&str> = entry
            .css
            .iter()
            .chain(imported.iter().flat_map(|chunk| chunk.css.iter()))
            .map(String::as_str)
            .collect();
        let preload: IndexSet<&str> = imported
            .iter()
            .map(|chunk| chunk.file.as_str())
            .filter(|file| *file != entry.file)
            .collect();

        Some(EntryAssets {
            file: entry.file.clone(),
            css: css.into_iter().map(str::to_owned).collect(),
            preload: preload.into_iter().map(str::to_owned).collect(),
        })
    }

    // Depth-first, post-order over `imports`
    fn collect_imports<'a>(
        &'a self,
        chunk: &'a ChunkRecord,
        seen: &mut HashSet<String>,
        out: &mut Vec<&'a ChunkRecord>,
    ) {
        for import in &chunk.imports {
            if !seen.insert(fold_key(import)) {
                continue;
            }
            let Some(imported) = self.find(import) else {
                debug!(import = %import, importer = %chunk.file, "imported chunk missing from manifest");
                continue;
            };
            self.collect_imports(imported, seen, out);
            out.push(imported);
        }
    }
}
