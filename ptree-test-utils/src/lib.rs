//! Test utilities shared across the ptree workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary launcher homes with a JavaScript CLI layout
//!   ([`LauncherHomeGuard`])
//! - Temporary runtime directories exposing a fake `node` ([`RuntimeDirGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod home;
#[cfg(unix)]
pub mod runtime;

// Re-export commonly used items
pub use home::LauncherHomeGuard;
#[cfg(unix)]
pub use runtime::RuntimeDirGuard;

/// Shell used in place of Node.js; the recorded entry scripts are shell scripts
pub const SHELL: &str = "/bin/sh";
