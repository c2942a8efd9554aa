//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Runlet has two configuration scopes:
//! - **Global**: user-level settings
//! - **Project**: per-project overrides
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//!
//! # Global Config Locations
//!
//! Searched in order, first hit wins:
//! 1. `$RUNLET_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/runlet/config.toml` (platform config dir)
//! 3. `~/.runlet/config.toml`
//!
//! # Project Config Location
//!
//! `<project>/.runlet/config.toml`.
//!
//! Missing files are fine at every scope; a file that exists but fails to
//! parse is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::paths::ProjectPaths;

/// Environment variable overriding the global config location.
pub const CONFIG_ENV: &str = "RUNLET_CONFIG";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Lifecycle hook commands.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Hooks {
    /// Command line run before every script invocation.
    pub pre: Option<String>,

    /// Command line run after every script invocation.
    pub post: Option<String>,
}

/// Merged Runlet configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Pre/post lifecycle hook commands.
    #[serde(default)]
    pub hooks: Hooks,
}

impl Config {
    /// Load and merge configuration for a project.
    ///
    /// Global scope is loaded first, then the project scope; project values
    /// override global ones field by field. Pass `None` to load only the
    /// global scope.
    pub fn load(project: Option<&ProjectPaths>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = global_config_path() {
            if let Some(global) = Self::load_file(&path)? {
                config.merge(global);
            }
        }

        if let Some(project) = project {
            if let Some(local) = Self::load_file(&project.config_path())? {
                config.merge(local);
            }
        }

        Ok(config)
    }

    /// Load one config file. `Ok(None)` when the file does not exist.
    fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Apply a higher-precedence scope on top of this one.
    fn merge(&mut self, over: Config) {
        if over.hooks.pre.is_some() {
            self.hooks.pre = over.hooks.pre;
        }
        if over.hooks.post.is_some() {
            self.hooks.post = over.hooks.post;
        }
    }
}

/// Resolve the global config path, if any scope applies.
fn global_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        let candidate = dir.join("runlet").join("config.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    dirs::home_dir().map(|home| home.join(".runlet").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_config(toml_text: &str) -> (tempfile::TempDir, ProjectPaths) {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path().to_path_buf());
        std::fs::create_dir_all(dir.path().join(".runlet")).unwrap();
        std::fs::write(paths.config_path(), toml_text).unwrap();
        (dir, paths)
    }

    #[test]
    fn defaults_have_no_hooks() {
        let config = Config::default();
        assert_eq!(config.hooks.pre, None);
        assert_eq!(config.hooks.post, None);
    }

    #[test]
    fn parses_hook_table() {
        let config: Config =
            toml::from_str("[hooks]\npre = \"echo before\"\npost = \"echo after\"\n").unwrap();
        assert_eq!(config.hooks.pre.as_deref(), Some("echo before"));
        assert_eq!(config.hooks.post.as_deref(), Some("echo after"));
    }

    #[test]
    fn empty_file_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_project_file_is_fine() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = ProjectPaths::new(dir.path().to_path_buf());
        let loaded = Config::load_file(&paths.config_path()).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn project_file_loads() {
        let (_dir, paths) = project_with_config("[hooks]\npre = \"echo hi\"\n");
        let loaded = Config::load_file(&paths.config_path()).unwrap().unwrap();
        assert_eq!(loaded.hooks.pre.as_deref(), Some("echo hi"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let (_dir, paths) = project_with_config("[hooks\npre = nope");
        let err = Config::load_file(&paths.config_path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn merge_prefers_project_scope() {
        let mut base: Config = toml::from_str("[hooks]\npre = \"global\"\npost = \"global\"\n")
            .unwrap();
        let over: Config = toml::from_str("[hooks]\npre = \"project\"\n").unwrap();

        base.merge(over);
        assert_eq!(base.hooks.pre.as_deref(), Some("project"));
        assert_eq!(base.hooks.post.as_deref(), Some("global"));
    }
}
