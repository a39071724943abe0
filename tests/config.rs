//! Tests for TOML config loading.

use mdlog::{Config, Level, Logger};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_from_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[general]
level = "warn"

[file]
historical = false
session = true
base_path = "/tmp/mdlog-test"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Warn);
    assert!(!config.file.historical);
    assert!(config.file.session);
    assert_eq!(config.file.base_path, "/tmp/mdlog-test");
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
    assert!(config.file.historical);
    assert!(config.file.session);
    assert_eq!(config.file.base_path, "logs");
}

#[test]
fn unknown_level_falls_back_to_info() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general]\nlevel = \"loud\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general\nlevel = ").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(mdlog::Error::ConfigParse(_))
    ));
}

#[test]
fn logger_from_config() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.general.level = "error".to_string();
    config.file.base_path = dir.path().to_string_lossy().into_owned();

    let logger = Logger::from_config_with(&config).unwrap();
    assert_eq!(logger.min_level(), Level::Error);
    drop(logger);

    // INFO start/end markers are filtered at Error level.
    let content = fs::read_to_string(dir.path().join("session.log")).unwrap();
    assert!(content.is_empty());
}
