//! # Process Delegation
//!
//! Runs the JavaScript CLI as a child process with the launcher's standard
//! streams and reports the child's exit code.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::consts::FAILURE_EXIT_CODE;
use crate::error::LaunchError;

/// Run `runtime entry args...`, block until it exits and return its exit code.
///
/// Arguments are passed through untouched and in order. A child that ends
/// without an exit code (killed by a signal) yields the generic failure code.
pub fn delegate<I, S>(runtime: &Path, entry: &Path, args: I) -> Result<i32, LaunchError>
where
  I: IntoIterator<Item = S>,
  S: AsRef<OsStr>,
{
  let mut cmd = Command::new(runtime);
  cmd
    .arg(entry)
    .args(args)
    .stdin(Stdio::inherit())
    .stdout(Stdio::inherit())
    .stderr(Stdio::inherit());

  debug!("Spawning {:?}", cmd);

  let status = cmd.status().map_err(|source| LaunchError::DelegateFailure {
    runtime: runtime.to_path_buf(),
    source,
  })?;

  let code = exit_code(status);
  info!("{} exited with {status} (propagating {code})", runtime.display());
  Ok(code)
}

/// Map a child's exit status onto the launcher's own exit code
pub fn exit_code(status: ExitStatus) -> i32 {
  status.code().unwrap_or(FAILURE_EXIT_CODE)
}

#[cfg(all(test, unix))]
mod tests {
  use std::fs;
  use std::os::unix::process::ExitStatusExt;

  use tempfile::TempDir;

  use super::*;

  const SH: &str = "/bin/sh";

  /// Shell script that records `$0` and its arguments one per line
  fn recording_script(dir: &Path, exit_code: i32) -> std::path::PathBuf {
    let script = dir.join("entry.sh");
    let record = dir.join("argv.txt");
    let body = format!(
      "printf '%s\\n' \"$0\" > '{record}'\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{record}'; done\nexit {exit_code}\n",
      record = record.display(),
    );
    fs::write(&script, body).unwrap();
    script
  }

  fn recorded(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("argv.txt"))
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }

  #[test]
  fn test_forwards_arguments_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let script = recording_script(temp_dir.path(), 0);

    let code = delegate(Path::new(SH), &script, ["tree", "--depth", "2"]).unwrap();

    assert_eq!(code, 0);
    assert_eq!(
      recorded(temp_dir.path()),
      vec![script.display().to_string(), "tree".into(), "--depth".into(), "2".into()]
    );
  }

  #[test]
  fn test_arguments_with_spaces_stay_intact() {
    let temp_dir = TempDir::new().unwrap();
    let script = recording_script(temp_dir.path(), 0);

    delegate(Path::new(SH), &script, ["a b", "", "--", "-x"]).unwrap();

    assert_eq!(recorded(temp_dir.path())[1..], ["a b", "", "--", "-x"]);
  }

  #[test]
  fn test_propagates_exit_codes() {
    for expected in [0, 1, 127] {
      let temp_dir = TempDir::new().unwrap();
      let script = recording_script(temp_dir.path(), expected);

      let code = delegate(Path::new(SH), &script, Vec::<String>::new()).unwrap();
      assert_eq!(code, expected);
    }
  }

  #[test]
  fn test_spawn_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-runtime");

    match delegate(&missing, Path::new("entry.js"), ["x"]) {
      Err(LaunchError::DelegateFailure { runtime, .. }) => assert_eq!(runtime, missing),
      other => panic!("expected DelegateFailure, got {other:?}"),
    }
  }

  #[test]
  fn test_signal_termination_maps_to_failure() {
    // Raw wait status 9: terminated by SIGKILL
    let status = ExitStatus::from_raw(9);
    assert_eq!(exit_code(status), 1);

    let status = ExitStatus::from_raw(3 << 8);
    assert_eq!(exit_code(status), 3);
  }
}
