//! Tests for default values and serialized shape.

use std::path::PathBuf;
use vite_manifest_config::{ViteOptions, default_base, default_manifest, default_web_root};

#[test]
fn vite_options_defaults() {
    let options = ViteOptions::default();
    assert_eq!(options.manifest, "manifest.json");
    assert_eq!(options.web_root, PathBuf::from("wwwroot"));
    assert_eq!(options.base, "/");
}

#[test]
fn default_fns_match_default_impl() {
    let options = ViteOptions::default();
    assert_eq!(options.manifest, default_manifest());
    assert_eq!(options.web_root, default_web_root());
    assert_eq!(options.base, default_base());
}

#[test]
fn missing_fields_take_defaults() {
    let options: ViteOptions = serde_json::from_str(r#"{"manifest": "assets.json"}"#).unwrap();
    assert_eq!(options.manifest, "assets.json");
    assert_eq!(options.web_root, PathBuf::from("wwwroot"));
    assert_eq!(options.base, "/");
}

#[test]
fn unknown_fields_are_ignored() {
    let options: ViteOptions =
        serde_json::from_str(r#"{"server": {"port": 5173}, "base": "/app/"}"#).unwrap();
    assert_eq!(options.base, "/app/");
}

#[test]
fn serializes_snake_case_keys() {
    let json = serde_json::to_value(ViteOptions::default()).unwrap();
    assert!(json.get("web_root").is_some());
    assert!(json.get("webRoot").is_none());
}
