//! # Configuration Management
//!
//! Loads launcher settings from an optional TOML file and layers environment
//! overrides on top. Every field is optional; unset fields fall back to the
//! launcher's built-in behavior.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::consts::{CONFIG_FILE_NAME, ENV_CONFIG, ENV_HOME, ENV_NODE, ENV_PROJECT_DIR};

/// Settings that steer runtime discovery and entry point resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
  /// Name of the project directory under the base directory
  pub project_dir: Option<String>,
  /// Node.js executable, either a path or a program name looked up in PATH
  pub node: Option<PathBuf>,
  /// Base directory replacing the launcher's own directory
  pub home: Option<PathBuf>,
}

impl LauncherConfig {
  /// Load the config file (if any) and apply environment overrides
  pub fn load() -> Result<Self> {
    let lookup = |key: &str| env::var_os(key);
    let config = match config_file_path(lookup) {
      Some(path) => Self::from_file(&path)?,
      None => Self::default(),
    };

    Ok(config.with_overrides(lookup))
  }

  /// Read a config file, treating a missing file as an empty config
  pub fn from_file(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No launcher config at {}", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read launcher config from {}", path.display()))?;

    let config: Self =
      toml::from_str(&content).with_context(|| format!("Failed to parse launcher config from {}", path.display()))?;

    debug!("Loaded launcher config from {}: {:?}", path.display(), config);
    Ok(config)
  }

  /// Replace fields with non-empty values returned by `lookup`
  pub fn with_overrides<F>(mut self, lookup: F) -> Self
  where
    F: Fn(&str) -> Option<OsString>,
  {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(project_dir) = non_empty(ENV_PROJECT_DIR) {
      self.project_dir = Some(project_dir.to_string_lossy().into_owned());
    }
    if let Some(node) = non_empty(ENV_NODE) {
      self.node = Some(PathBuf::from(node));
    }
    if let Some(home) = non_empty(ENV_HOME) {
      self.home = Some(PathBuf::from(home));
    }

    self
  }
}

/// Resolve which config file to read.
///
/// An explicit `PTREE_CONFIG` wins; otherwise the file lives in the user
/// config directory. `None` means no config directory could be determined.
pub fn config_file_path<F>(lookup: F) -> Option<PathBuf>
where
  F: Fn(&str) -> Option<OsString>,
{
  if let Some(explicit) = lookup(ENV_CONFIG).filter(|value| !value.is_empty()) {
    return Some(PathBuf::from(explicit));
  }

  ProjectDirs::from("", "", "ptree").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
