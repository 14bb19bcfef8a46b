//! Build script for the ptree launcher
//!
//! Embeds version and build metadata for runtime access

use std::env;
use std::process::Command;

/// Entry point for the build script.
fn main() {
  embed_build_info();
  set_rerun_conditions();
}

/// Embeds the short Git commit hash and the target triple as compile-time
/// environment variables. Git being unavailable leaves the hash empty.
fn embed_build_info() {
  let git_hash = Command::new("git")
    .args(["rev-parse", "--short", "HEAD"])
    .output()
    .ok()
    .filter(|output| output.status.success())
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|hash| hash.trim().to_string())
    .unwrap_or_default();
  println!("cargo:rustc-env=PTREE_GIT_HASH={git_hash}");

  println!("cargo:rustc-env=PTREE_TARGET={}", env::var("TARGET").unwrap_or_default());
}

/// Configures conditions that trigger build script re-execution.
fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=../.git/HEAD");
  println!("cargo:rerun-if-env-changed=TARGET");
}
