//! Schema checks for [`ViteOptions`]. No filesystem access happens here: a
//! missing manifest is a runtime condition, not a configuration error.

use crate::error::{ConfigError, Result};
use crate::options::ViteOptions;

impl ViteOptions {
    pub fn validate(&self) -> Result<()> {
        if self.manifest.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "manifest",
                reason: "manifest file name must not be empty".to_string(),
            });
        }

        if !is_valid_base(&self.base) {
            return Err(ConfigError::InvalidValue {
                field: "base",
                reason: format!(
                    "`{}` must start with `/` or be an absolute http(s) URL",
                    self.base
                ),
            });
        }

        Ok(())
    }
}

fn is_valid_base(base: &str) -> bool {
    base.starts_with('/') || base.starts_with("http://") || base.starts_with("https://")
}
