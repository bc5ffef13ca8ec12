//! Errors raised while building a [`ManifestIndex`](crate::ManifestIndex).
//!
//! A missing manifest is deliberately absent from this list: it degrades to
//! an empty index with a warning. Lookup misses are plain `None`.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;
use vite_manifest_config::ConfigError;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Error, Debug, Diagnostic)]
pub enum ManifestError {
    /// The manifest exists but is not a JSON object of chunk records
    #[error("failed to parse manifest {}: {source}", path.display())]
    #[diagnostic(
        code(vite_manifest::parse),
        help("the manifest is generated by `vite build`; rebuild the frontend to regenerate it")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest exists but could not be read
    #[error("failed to read manifest {}: {source}", path.display())]
    #[diagnostic(code(vite_manifest::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vite configuration: {0}")]
    #[diagnostic(code(vite_manifest::config))]
    Config(#[from] ConfigError),
}

impl ManifestError {
    /// Path of the offending manifest, if the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Parse { path, .. } | Self::Read { path, .. } => Some(path),
            Self::Config(_) => None,
        }
    }
}
