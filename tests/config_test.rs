//! Integration tests for Settings loading from an explicit config file.
//!
//! These tests never touch AEGRAPH_* environment variables so they can run in parallel.
//! Environment overrides are covered in config_env_test.rs.

use std::fs;

use tempfile::TempDir;

use aegraph::application::ApplicationError;
use aegraph::config::Settings;
use aegraph::domain::Rule;

#[test]
fn given_config_file_with_rules_when_load_then_replaces_default_rules() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aegraph.toml");
    fs::write(
        &path,
        r#"
rules = ["erasure", "deiteration"]
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.rules, vec![Rule::Erasure, Rule::Deiteration]);
    assert!(settings.color, "unspecified keys keep their defaults");
    assert!(!settings.show_tree);
}

#[test]
fn given_config_file_with_flags_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aegraph.toml");
    fs::write(&path, "color = false\nshow_tree = true\n").unwrap();

    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    assert!(!settings.color);
    assert!(settings.show_tree);
    assert_eq!(settings.rules, Rule::ALL.to_vec());
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();

    let result = Settings::load(Some(dir.path().join("nope.toml").as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_unknown_rule_in_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aegraph.toml");
    fs::write(&path, "rules = [\"insertion\"]\n").unwrap();

    let result = Settings::load(Some(path.as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_loaded_settings_when_to_toml_then_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aegraph.toml");
    fs::write(&path, "show_tree = true\nrules = [\"double-cut\"]\n").unwrap();
    let settings = Settings::load(Some(path.as_path())).unwrap();

    let dumped = dir.path().join("dumped.toml");
    fs::write(&dumped, settings.to_toml().unwrap()).unwrap();

    assert_eq!(Settings::load(Some(dumped.as_path())).unwrap(), settings);
}
