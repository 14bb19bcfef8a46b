//! Fake runtime directories for testing
//!
//! Exposes a `node` entry that is a symlink to [`crate::SHELL`], so a PATH
//! search finds an executable named `node` without Node.js being installed.

use std::ffi::OsString;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::SHELL;

/// A temporary directory containing a `node` executable.
/// The directory is removed when the guard is dropped.
pub struct RuntimeDirGuard {
  /// The temporary directory to put on PATH
  pub temp_dir: TempDir,
  node: PathBuf,
}

impl Default for RuntimeDirGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl RuntimeDirGuard {
  /// Create a runtime directory with `node` linked to the shell
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let node = temp_dir.path().join("node");
    symlink(SHELL, &node).expect("Failed to link fake node executable");

    Self { temp_dir, node }
  }

  /// Directory holding the fake executable
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Path of the fake `node`
  pub fn node_path(&self) -> &Path {
    &self.node
  }

  /// A PATH value containing only this directory
  pub fn path_var(&self) -> OsString {
    self.path().as_os_str().to_os_string()
  }
}
