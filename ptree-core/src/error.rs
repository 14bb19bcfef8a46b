//! # Launch Errors
//!
//! Every way the launcher can stop before (or while) handing control to the
//! JavaScript CLI. Each variant renders as a single diagnostic line and maps
//! to a non-zero exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::consts::FAILURE_EXIT_CODE;

/// Terminal failures of a launcher invocation
#[derive(Debug, Error)]
pub enum LaunchError {
  /// No usable Node.js executable was found
  #[error("Node.js is required but was not found in PATH.")]
  RuntimeNotFound,

  /// The CLI entry script does not exist
  #[error("CLI entry not found at {}.", path.display())]
  EntryNotFound { path: PathBuf },

  /// The entry script exists but the project has not been built
  #[error("Compiled CLI not found. Run `cd {project} && npm install && npm run compile`.")]
  CompiledArtifactMissing { project: String, path: PathBuf },

  /// The runtime could not be spawned or waited on
  #[error("failed to launch {}: {source}", runtime.display())]
  DelegateFailure {
    runtime: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The directory of the running executable could not be determined
  #[error("unable to determine the launcher directory: {0}")]
  BaseDir(#[source] io::Error),

  /// The config file or an environment override is invalid
  #[error("invalid configuration: {0:#}")]
  Config(anyhow::Error),
}

impl LaunchError {
  /// Exit code the launcher terminates with for this error
  pub const fn exit_code(&self) -> i32 {
    FAILURE_EXIT_CODE
  }
}
