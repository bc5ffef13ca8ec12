//! Multi-source loading. Every test runs inside a figment `Jail` so that
//! environment variables and the working directory stay isolated.

use figment::Jail;
use std::path::{Path, PathBuf};
use vite_manifest_config::{ConfigError, ViteOptions};

#[test]
fn load_without_sources_uses_defaults() {
    Jail::expect_with(|_jail| {
        let options = ViteOptions::load(None).map_err(|e| e.to_string())?;
        assert_eq!(options, ViteOptions::default());
        Ok(())
    });
}

#[test]
fn load_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "vite.toml",
            r#"
                manifest = "build-manifest.json"
                web_root = "public"
            "#,
        )?;

        let options = ViteOptions::load(Some(Path::new("vite.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(options.manifest, "build-manifest.json");
        assert_eq!(options.web_root, PathBuf::from("public"));
        assert_eq!(options.base, "/");
        assert_eq!(options.manifest_path(), Path::new("public/build-manifest.json"));
        Ok(())
    });
}

#[test]
fn load_json_file() {
    Jail::expect_with(|jail| {
        jail.create_file("vite.json", r#"{"base": "/static/"}"#)?;

        let options = ViteOptions::load(Some(Path::new("vite.json"))).map_err(|e| e.to_string())?;
        assert_eq!(options.base, "/static/");
        assert_eq!(options.manifest, "manifest.json");
        Ok(())
    });
}

#[test]
fn env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("vite.toml", r#"manifest = "from-file.json""#)?;
        jail.set_env("VITE_MANIFEST", "from-env.json");
        jail.set_env("VITE_WEB_ROOT", "dist");

        let options = ViteOptions::load(Some(Path::new("vite.toml"))).map_err(|e| e.to_string())?;
        assert_eq!(options.manifest, "from-env.json");
        assert_eq!(options.web_root, PathBuf::from("dist"));
        Ok(())
    });
}

#[test]
fn unrelated_vite_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("VITE_API_URL", "https://api.example.com");

        let options = ViteOptions::load(None).map_err(|e| e.to_string())?;
        assert_eq!(options, ViteOptions::default());
        Ok(())
    });
}

#[test]
fn missing_config_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = ViteOptions::load(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        Ok(())
    });
}

#[test]
fn unsupported_extension_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("vite.yaml", "manifest: x.json")?;

        let err = ViteOptions::load(Some(Path::new("vite.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "yaml"));
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("VITE_BASE", "static");

        let err = ViteOptions::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "base", .. }));
        Ok(())
    });
}

#[test]
fn malformed_file_is_an_extract_error() {
    Jail::expect_with(|jail| {
        jail.create_file("vite.json", r#"{"manifest": "#)?;

        let err = ViteOptions::load(Some(Path::new("vite.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Extract(_)));
        Ok(())
    });
}
