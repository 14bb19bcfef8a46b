//! # Runtime Discovery
//!
//! Locates the Node.js executable the JavaScript CLI runs on by walking the
//! executable search path, the same way a shell would.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::consts::NODE_EXECUTABLE;
use crate::error::LaunchError;

/// Find the runtime to delegate to.
///
/// `requested` is the configured override. When it names a path (it has a
/// directory component) that file is used as-is; when it is a bare program
/// name it replaces `node` in the PATH search.
pub fn locate_runtime(requested: Option<&Path>, path_var: Option<&OsStr>) -> Result<PathBuf, LaunchError> {
  let name = match requested {
    Some(path) if has_directory_component(path) => {
      debug!("Using explicitly configured runtime {}", path.display());
      return if is_executable(path) {
        Ok(path.to_path_buf())
      } else {
        debug!("Configured runtime {} is not an executable file", path.display());
        Err(LaunchError::RuntimeNotFound)
      };
    }
    Some(name) => name.as_os_str(),
    None => OsStr::new(NODE_EXECUTABLE),
  };

  let Some(path_var) = path_var else {
    debug!("PATH is not set; cannot search for {}", name.to_string_lossy());
    return Err(LaunchError::RuntimeNotFound);
  };

  match find_executable(name, path_var) {
    Some(runtime) => {
      debug!("Found runtime at {}", runtime.display());
      Ok(runtime)
    }
    None => {
      debug!("No {} found in PATH", name.to_string_lossy());
      Err(LaunchError::RuntimeNotFound)
    }
  }
}

/// Search each PATH entry in order and return the first executable match
pub fn find_executable(name: &OsStr, path_var: &OsStr) -> Option<PathBuf> {
  let names = candidate_names(name);

  for dir in env::split_paths(path_var) {
    if dir.as_os_str().is_empty() {
      continue;
    }

    for candidate_name in &names {
      let candidate = dir.join(candidate_name);
      trace!("Probing {}", candidate.display());
      if is_executable(&candidate) {
        return Some(candidate);
      }
    }
  }

  None
}

fn has_directory_component(path: &Path) -> bool {
  path
    .parent()
    .is_some_and(|parent| !parent.as_os_str().is_empty())
}

/// File names to probe for `name` in a single directory
#[cfg(windows)]
fn candidate_names(name: &OsStr) -> Vec<OsString> {
  candidate_names_with(name, env::var("PATHEXT").ok().as_deref())
}

/// Expand a bare program name with every `PATHEXT` extension.
///
/// A name that already carries an extension is probed as-is.
#[cfg(windows)]
fn candidate_names_with(name: &OsStr, pathext: Option<&str>) -> Vec<OsString> {
  if Path::new(name).extension().is_some() {
    return vec![name.to_os_string()];
  }

  pathext
    .filter(|value| !value.is_empty())
    .unwrap_or(".COM;.EXE;.BAT;.CMD")
    .split(';')
    .filter(|ext| !ext.is_empty())
    .map(|ext| {
      let mut candidate = name.to_os_string();
      candidate.push(ext.to_ascii_lowercase());
      candidate
    })
    .collect()
}

/// File names to probe for `name` in a single directory
#[cfg(not(windows))]
fn candidate_names(name: &OsStr) -> Vec<OsString> {
  vec![name.to_os_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;

  fs::metadata(path)
    .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
    .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
  fs::metadata(path).map(|metadata| metadata.is_file()).unwrap_or(false)
}

#[cfg(all(test, unix))]
mod tests {
  use std::os::unix::fs::PermissionsExt;

  use tempfile::TempDir;

  use super::*;

  fn write_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"#!/bin/sh\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
  }

  fn path_var(dirs: &[&Path]) -> OsString {
    env::join_paths(dirs).unwrap()
  }

  #[test]
  fn test_finds_node_in_path() {
    let bin = TempDir::new().unwrap();
    let node = write_file(bin.path(), "node", 0o755);

    let found = locate_runtime(None, Some(&path_var(&[bin.path()]))).unwrap();
    assert_eq!(found, node);
  }

  #[test]
  fn test_first_path_entry_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let primary = write_file(first.path(), "node", 0o755);
    write_file(second.path(), "node", 0o755);

    let found = find_executable(OsStr::new("node"), &path_var(&[first.path(), second.path()]));
    assert_eq!(found, Some(primary));
  }

  #[test]
  fn test_skips_non_executable_files_and_directories() {
    let not_executable = TempDir::new().unwrap();
    let directory = TempDir::new().unwrap();
    let real = TempDir::new().unwrap();
    write_file(not_executable.path(), "node", 0o644);
    fs::create_dir(directory.path().join("node")).unwrap();
    let node = write_file(real.path(), "node", 0o700);

    let found = find_executable(
      OsStr::new("node"),
      &path_var(&[not_executable.path(), directory.path(), real.path()]),
    );
    assert_eq!(found, Some(node));
  }

  #[test]
  fn test_missing_runtime_is_reported() {
    let empty = TempDir::new().unwrap();

    let result = locate_runtime(None, Some(&path_var(&[empty.path()])));
    assert!(matches!(result, Err(LaunchError::RuntimeNotFound)));
  }

  #[test]
  fn test_unset_path_is_reported() {
    let result = locate_runtime(None, None);
    assert!(matches!(result, Err(LaunchError::RuntimeNotFound)));
  }

  #[test]
  fn test_empty_path_entries_are_ignored() {
    let bin = TempDir::new().unwrap();
    let node = write_file(bin.path(), "node", 0o755);

    let mut path = OsString::from(":");
    path.push(bin.path());
    let found = find_executable(OsStr::new("node"), &path);
    assert_eq!(found, Some(node));
  }

  #[test]
  fn test_requested_program_name_replaces_node() {
    let bin = TempDir::new().unwrap();
    write_file(bin.path(), "node", 0o755);
    let nodejs = write_file(bin.path(), "nodejs", 0o755);

    let found = locate_runtime(Some(Path::new("nodejs")), Some(&path_var(&[bin.path()]))).unwrap();
    assert_eq!(found, nodejs);
  }

  #[test]
  fn test_requested_path_bypasses_search() {
    let elsewhere = TempDir::new().unwrap();
    let runtime = write_file(elsewhere.path(), "custom-node", 0o755);

    let found = locate_runtime(Some(&runtime), None).unwrap();
    assert_eq!(found, runtime);
  }

  #[test]
  fn test_requested_path_must_be_executable() {
    let elsewhere = TempDir::new().unwrap();
    let runtime = write_file(elsewhere.path(), "custom-node", 0o644);

    let result = locate_runtime(Some(&runtime), None);
    assert!(matches!(result, Err(LaunchError::RuntimeNotFound)));

    let missing = elsewhere.path().join("does-not-exist");
    let result = locate_runtime(Some(&missing), None);
    assert!(matches!(result, Err(LaunchError::RuntimeNotFound)));
  }
}
