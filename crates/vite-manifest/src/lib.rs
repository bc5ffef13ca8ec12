//! # vite-manifest
//!
//! Resolve Vite entry points (`src/main.ts`) to the hashed files `vite build`
//! emitted, so server-rendered pages can reference them.
//!
//! The manifest is read once at startup into an immutable [`ManifestIndex`].
//! A missing manifest is not an error: it yields an empty index, which is what
//! an application running against the Vite dev server expects. A malformed
//! manifest is fatal.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vite_manifest::{build_index, ManifestIndex};
//!
//! let index: Arc<ManifestIndex> = Arc::new(build_index("wwwroot/manifest.json")?);
//! if let Some(chunk) = index.lookup("src/main.ts") {
//!     println!("<script type=\"module\" src=\"/{}\"></script>", chunk.file);
//! }
//! # Ok::<(), vite_manifest::ManifestError>(())
//! ```

pub mod chunk;
pub mod error;
pub mod index;
pub mod loader;
pub mod resolve;

#[cfg(feature = "logging")]
pub mod logging;

pub use chunk::ChunkRecord;
pub use error::{ManifestError, Result};
pub use index::{ManifestIndex, ManifestOrigin};
pub use loader::{ManifestLoader, parse_manifest};
pub use resolve::EntryAssets;
pub use vite_manifest_config::ViteOptions;

use std::path::PathBuf;

/// Build the index from a manifest path. Startup entry point.
pub fn build_index(manifest_path: impl Into<PathBuf>) -> Result<ManifestIndex> {
    ManifestLoader::new(manifest_path).load()
}

/// Validate `options` and build the index from the manifest they point at.
pub fn load_index(options: &ViteOptions) -> Result<ManifestIndex> {
    options.validate()?;
    ManifestLoader::from_options(options).load()
}
