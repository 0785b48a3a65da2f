//! Tests for export configuration loading.

use std::io::Write;
use std::path::PathBuf;

use fastlm_export::{load_config, resolve_config, ConfigOverrides, ExportConfig, ExportError};

#[test]
fn test_config_from_json() {
    let json = r#"{
        "layers": 2,
        "d_model": 8,
        "output": "out/weights.bin",
        "seed": 99
    }"#;

    let config: ExportConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.layers, 2);
    assert_eq!(config.d_model, 8);
    assert_eq!(config.output, PathBuf::from("out/weights.bin"));
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.weight_count(), 256);
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let config: ExportConfig = serde_json::from_str(r#"{"d_model": 16}"#).unwrap();
    assert_eq!(config.d_model, 16);
    assert_eq!(config.layers, 1);
    assert_eq!(config.output, PathBuf::from("models/model.bin"));
    assert_eq!(config.seed, None);
}

#[test]
fn test_load_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(br#"{"layers": 4, "d_model": 2}"#).unwrap();
    drop(f);

    let config = load_config(&path).unwrap();
    assert_eq!(config.layers, 4);
    assert_eq!(config.d_model, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(load_config(&path), Err(ExportError::Json(_))));
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_config(&dir.path().join("nope.json")),
        Err(ExportError::Io(_))
    ));
}

#[test]
fn test_huge_d_model_rejected() {
    let config = ExportConfig {
        d_model: i32::MAX,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ExportError::InvalidConfig(_))));
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");
    std::fs::write(&path, r#"{"layers": 5, "d_model": 2, "seed": 8}"#).unwrap();

    let overrides = ConfigOverrides {
        d_model: Some(3),
        ..Default::default()
    };
    let config = resolve_config(Some(path.as_path()), overrides).unwrap();
    assert_eq!(config.layers, 5);
    assert_eq!(config.d_model, 3);
    assert_eq!(config.seed, Some(8));
    assert_eq!(config.output, PathBuf::from("models/model.bin"));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let overrides = ConfigOverrides {
        output: Some(PathBuf::from("x.bin")),
        ..Default::default()
    };
    let config = resolve_config(None, overrides).unwrap();
    assert_eq!(config.layers, 1);
    assert_eq!(config.d_model, 4);
    assert_eq!(config.output, PathBuf::from("x.bin"));
}
