//! Launcher home management for testing
//!
//! Builds the `<home>/<project>/bin/ptree.js` and `<home>/<project>/out/cli.js`
//! layout inside a temporary directory. The entry file is a shell script that
//! records the arguments it receives, so running it with [`crate::SHELL`] as
//! the runtime stands in for a real Node.js invocation.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// File next to the entry script's project that captures its argv
const RECORD_FILE_NAME: &str = "argv.txt";

/// A temporary base directory for the launcher.
/// The directory is removed when the guard is dropped.
pub struct LauncherHomeGuard {
  /// The temporary directory used as the launcher home
  pub temp_dir: TempDir,
}

impl Default for LauncherHomeGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl LauncherHomeGuard {
  /// Create an empty launcher home
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    Self { temp_dir }
  }

  /// Create a launcher home with a complete, built project
  pub fn installed(project: &str, exit_code: i32) -> Self {
    let guard = Self::new();
    guard.write_entry(project, exit_code);
    guard.write_compiled(project);
    guard
  }

  /// Path of the launcher home
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Path of a project directory inside the home
  pub fn project_dir(&self, project: &str) -> PathBuf {
    self.path().join(project)
  }

  /// Path of the entry file for a project
  pub fn entry_path(&self, project: &str) -> PathBuf {
    self.project_dir(project).join("bin").join("ptree.js")
  }

  /// Path of the compiled artifact for a project
  pub fn compiled_path(&self, project: &str) -> PathBuf {
    self.project_dir(project).join("out").join("cli.js")
  }

  /// Write an entry script that records its arguments and exits with
  /// `exit_code`
  pub fn write_entry(&self, project: &str, exit_code: i32) -> PathBuf {
    let entry = self.entry_path(project);
    let record = self.record_path(project);
    let script = format!(
      "printf '%s\\n' \"$0\" > '{record}'\n\
       for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{record}'; done\n\
       exit {exit_code}\n",
      record = record.display(),
    );

    write_with_parents(&entry, &script);
    entry
  }

  /// Write a placeholder compiled artifact
  pub fn write_compiled(&self, project: &str) -> PathBuf {
    let compiled = self.compiled_path(project);
    write_with_parents(&compiled, "module.exports = {};\n");
    compiled
  }

  /// Entry path the script was invoked with, if it ran
  pub fn recorded_entry(&self, project: &str) -> Option<String> {
    self.recorded_argv(project)?.into_iter().next()
  }

  /// Arguments received after the entry path, if the script ran
  pub fn recorded_args(&self, project: &str) -> Option<Vec<String>> {
    let argv = self.recorded_argv(project)?;
    Some(argv.into_iter().skip(1).collect())
  }

  /// Raw bytes the entry script recorded: `$0` and each argument, one per
  /// line
  pub fn recorded_bytes(&self, project: &str) -> Option<Vec<u8>> {
    fs::read(self.record_path(project)).ok()
  }

  fn recorded_argv(&self, project: &str) -> Option<Vec<String>> {
    let content = fs::read_to_string(self.record_path(project)).ok()?;
    Some(content.lines().map(str::to_string).collect())
  }

  fn record_path(&self, project: &str) -> PathBuf {
    self.project_dir(project).join(RECORD_FILE_NAME)
  }
}

fn write_with_parents(path: &Path, content: &str) {
  let parent = path.parent().expect("Test paths always have a parent");
  fs::create_dir_all(parent).expect("Failed to create parent directory");
  fs::write(path, content).expect("Failed to write test file");
}
