//! # Entry Point Layout
//!
//! The JavaScript CLI lives in a project directory next to the launcher:
//!
//! ```text
//! <base>/<project>/bin/ptree.js   entry file
//! <base>/<project>/out/cli.js     compiled artifact
//! ```
//!
//! This module computes those paths and checks that they exist.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{COMPILED_RELATIVE_PATH, ENTRY_RELATIVE_PATH, PROJECT_DIR_CANDIDATES};
use crate::error::LaunchError;

/// Resolved paths of the JavaScript CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrypoints {
  /// Project directory name as configured or selected
  pub project: String,
  /// Absolute project directory
  pub project_dir: PathBuf,
  /// Script the runtime is pointed at
  pub entry: PathBuf,
  /// Build output whose presence means the CLI has been compiled
  pub compiled: PathBuf,
}

/// Compute the entry file and compiled artifact paths under `base_dir`.
///
/// Pure path arithmetic; nothing on disk is touched.
pub fn resolve_entrypoints(base_dir: &Path, project: &str) -> Entrypoints {
  let project_dir = base_dir.join(project);
  let entry = ENTRY_RELATIVE_PATH
    .iter()
    .fold(project_dir.clone(), |path, part| path.join(part));
  let compiled = COMPILED_RELATIVE_PATH
    .iter()
    .fold(project_dir.clone(), |path, part| path.join(part));

  Entrypoints {
    project: project.to_string(),
    project_dir,
    entry,
    compiled,
  }
}

/// Pick the project directory name.
///
/// A configured name always wins. Otherwise the first known candidate that
/// contains an entry file is used, falling back to the first candidate.
pub fn select_project(base_dir: &Path, configured: Option<&str>) -> String {
  if let Some(project) = configured {
    debug!("Using configured project directory {project}");
    return project.to_string();
  }

  for candidate in PROJECT_DIR_CANDIDATES {
    if resolve_entrypoints(base_dir, candidate).entry.exists() {
      debug!("Detected project directory {candidate}");
      return candidate.to_string();
    }
  }

  let fallback = PROJECT_DIR_CANDIDATES[0];
  debug!("No known project directory found under {}; assuming {fallback}", base_dir.display());
  fallback.to_string()
}

/// Check that the entry file and the compiled artifact exist, in that order
pub fn validate(entrypoints: &Entrypoints) -> Result<(), LaunchError> {
  if !entrypoints.entry.exists() {
    return Err(LaunchError::EntryNotFound {
      path: entrypoints.entry.clone(),
    });
  }

  if !entrypoints.compiled.exists() {
    return Err(LaunchError::CompiledArtifactMissing {
      project: entrypoints.project.clone(),
      path: entrypoints.compiled.clone(),
    });
  }

  Ok(())
}

/// Directory containing the running executable, with symlinks resolved
pub fn launcher_base_dir() -> Result<PathBuf, LaunchError> {
  let exe = env::current_exe().map_err(LaunchError::BaseDir)?;
  let exe = exe.canonicalize().map_err(LaunchError::BaseDir)?;

  exe.parent().map(Path::to_path_buf).ok_or_else(|| {
    LaunchError::BaseDir(std::io::Error::new(
      std::io::ErrorKind::NotFound,
      format!("{} has no parent directory", exe.display()),
    ))
  })
}
