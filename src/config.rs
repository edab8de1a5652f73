//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <file>`, else `$XDG_CONFIG_HOME/aegraph/aegraph.toml`
//! 3. Environment variables: `AEGRAPH_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Rule;

/// Unified configuration for aegraph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colored terminal output
    pub color: bool,
    /// Print the tree outline after every graph
    pub show_tree: bool,
    /// Rules offered by `moves` and accepted by `apply`/`check`
    pub rules: Vec<Rule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            show_tree: false,
            rules: Rule::ALL.to_vec(),
        }
    }
}

/// Get the XDG config directory for aegraph.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aegraph").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("aegraph.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// An explicitly given file must exist; the global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .set_default("show_tree", defaults.show_tree)
            .map_err(config_err)?
            .set_default(
                "rules",
                defaults.rules.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
            )
            .map_err(config_err)?;

        match config_file {
            Some(path) => {
                debug!("config file: {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    debug!("global config file: {}", global_path.display());
                    builder = builder.add_source(File::from(global_path).required(false));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("AEGRAPH")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("rules")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# aegraph configuration
#
# Locations (by precedence, lowest to highest):
#   File: --config <file>, else ~/.config/aegraph/aegraph.toml
#   Env:  AEGRAPH_* environment variables (AEGRAPH_RULES="erasure,deiteration")

# Colored output
# color = true

# Print the tree outline (with element paths) after every graph
# show_tree = false

# Rules listed by `moves` and accepted by `apply` and `check`
# rules = ["double-cut", "erasure", "deiteration"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
