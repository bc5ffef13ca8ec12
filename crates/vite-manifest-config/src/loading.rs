use crate::error::{ConfigError, Result};
use crate::options::ViteOptions;
use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

/// Prefix for environment overrides (`VITE_MANIFEST`, `VITE_WEB_ROOT`, `VITE_BASE`).
pub const ENV_PREFIX: &str = "VITE_";

const ENV_KEYS: &[&str] = &["manifest", "web_root", "base"];

impl ViteOptions {
    /// Load options from multiple sources.
    /// Priority: environment variables > config file > defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let options: Self = Self::figment(config_path)?.extract()?;
        options.validate()?;
        tracing::debug!(
            manifest = %options.manifest,
            web_root = %options.web_root.display(),
            base = %options.base,
            "resolved vite options"
        );
        Ok(options)
    }

    /// Build the provider chain without extracting it.
    pub fn figment(config_path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("toml") => figment.merge(Toml::file(path)),
                other => {
                    return Err(ConfigError::UnsupportedFormat(
                        other.unwrap_or("<none>").to_string(),
                    ));
                }
            };
        }

        // Vite exposes arbitrary VITE_* variables to client code, only take ours
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS)))
    }
}
