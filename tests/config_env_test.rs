//! AEGRAPH_* environment overrides for Settings.
//!
//! Kept in its own test binary with a single test: it mutates process-wide
//! environment variables.

use std::env;
use std::fs;

use tempfile::TempDir;

use aegraph::config::Settings;
use aegraph::domain::Rule;

/// Removes the given variables when dropped, also on assertion failure.
struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            env::remove_var(key);
        }
    }
}

#[test]
fn given_env_vars_and_config_file_when_load_then_env_wins() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aegraph.toml");
    fs::write(&path, "color = true\nshow_tree = false\nrules = [\"double-cut\"]\n").unwrap();

    let _guard = EnvGuard(&["AEGRAPH_RULES", "AEGRAPH_SHOW_TREE", "AEGRAPH_COLOR"]);
    env::set_var("AEGRAPH_RULES", "erasure,deiteration");
    env::set_var("AEGRAPH_SHOW_TREE", "true");
    env::set_var("AEGRAPH_COLOR", "false");

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.rules, vec![Rule::Erasure, Rule::Deiteration]);
    assert!(settings.show_tree);
    assert!(!settings.color);
}
