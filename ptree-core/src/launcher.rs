//! # Launcher
//!
//! Ties the pieces together: locate the runtime, resolve and validate the
//! entry points, then hand over to the JavaScript CLI. The first failure
//! ends the invocation.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use tracing::debug;

use crate::config::LauncherConfig;
use crate::delegate::delegate;
use crate::error::LaunchError;
use crate::layout::{Entrypoints, launcher_base_dir, resolve_entrypoints, select_project, validate};
use crate::output::print_diagnostic;
use crate::runtime::locate_runtime;

/// A launcher invocation with its configuration and search path fixed up front
#[derive(Debug, Clone)]
pub struct Launcher {
  config: LauncherConfig,
  path_var: Option<OsString>,
}

/// Everything needed to spawn the JavaScript CLI, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
  /// Node.js executable
  pub runtime: PathBuf,
  /// Entry file and compiled artifact
  pub entrypoints: Entrypoints,
}

impl Launcher {
  pub const fn new(config: LauncherConfig, path_var: Option<OsString>) -> Self {
    Self { config, path_var }
  }

  /// Build a launcher from the config file, environment overrides and `PATH`
  pub fn from_env() -> Result<Self, LaunchError> {
    let config = LauncherConfig::load().map_err(LaunchError::Config)?;
    debug!("Launcher config: {:?}", config);
    Ok(Self::new(config, env::var_os("PATH")))
  }

  /// Directory the project layout is resolved against
  pub fn base_dir(&self) -> Result<PathBuf, LaunchError> {
    match &self.config.home {
      Some(home) => Ok(home.clone()),
      None => launcher_base_dir(),
    }
  }

  /// Run every precondition check in order and return the launch plan
  pub fn prepare(&self) -> Result<LaunchPlan, LaunchError> {
    let runtime = locate_runtime(self.config.node.as_deref(), self.path_var.as_deref())?;

    let base_dir = self.base_dir()?;
    let project = select_project(&base_dir, self.config.project_dir.as_deref());
    let entrypoints = resolve_entrypoints(&base_dir, &project);
    debug!("Resolved entry points: {:?}", entrypoints);

    validate(&entrypoints)?;

    Ok(LaunchPlan { runtime, entrypoints })
  }

  /// Check preconditions, then delegate and return the child's exit code
  pub fn run<I, S>(&self, args: I) -> Result<i32, LaunchError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
  {
    self.prepare()?.delegate(args)
  }
}

impl LaunchPlan {
  /// Spawn the runtime on the entry file with `args` appended
  pub fn delegate<I, S>(&self, args: I) -> Result<i32, LaunchError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
  {
    delegate(&self.runtime, &self.entrypoints.entry, args)
  }
}

/// Run the launcher against the ambient environment.
///
/// Failures are printed as a single diagnostic line; the return value is the
/// exit code the process should terminate with.
pub fn run<I, S>(args: I) -> i32
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  match Launcher::from_env().and_then(|launcher| launcher.run(args)) {
    Ok(code) => code,
    Err(error) => {
      debug!("Launch failed: {error:?}");
      print_diagnostic(&error.to_string());
      error.exit_code()
    }
  }
}
