//! Manifest location and public URL settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory Vite 5+ writes the manifest into, relative to the build output.
pub const VITE_DIR: &str = ".vite";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViteOptions {
    /// Manifest file name, resolved against `web_root`
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Static web root the build output is served from
    #[serde(default = "default_web_root")]
    pub web_root: PathBuf,

    /// Public base URL that manifest `file` paths are relative to
    #[serde(default = "default_base")]
    pub base: String,
}

impl Default for ViteOptions {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            web_root: default_web_root(),
            base: default_base(),
        }
    }
}

impl ViteOptions {
    /// Path of the manifest file: `web_root` joined with `manifest`.
    ///
    /// An absolute `manifest` replaces the web root entirely.
    pub fn manifest_path(&self) -> PathBuf {
        self.web_root.join(&self.manifest)
    }

    /// Where Vite 5+ places the same manifest: `<web_root>/.vite/<manifest>`.
    pub fn vite_dir_manifest_path(&self) -> PathBuf {
        self.web_root.join(VITE_DIR).join(&self.manifest)
    }

    /// Public URL for a manifest `file` entry.
    ///
    /// ```
    /// use vite_manifest_config::ViteOptions;
    ///
    /// let options = ViteOptions {
    ///     base: "/static/".into(),
    ///     ..ViteOptions::default()
    /// };
    /// assert_eq!(options.asset_url("assets/main-ABC123.js"), "/static/assets/main-ABC123.js");
    /// ```
    pub fn asset_url(&self, file: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            file.trim_start_matches('/')
        )
    }
}

pub fn default_manifest() -> String {
    "manifest.json".to_string()
}

pub fn default_web_root() -> PathBuf {
    PathBuf::from("wwwroot")
}

pub fn default_base() -> String {
    "/".to_string()
}
