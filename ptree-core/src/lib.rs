//! # ptree Core
//!
//! Library half of the ptree launcher. It finds a Node.js runtime, resolves
//! the JavaScript CLI that ships next to the launcher, checks that the CLI
//! has been built, and hands the process over to it.

pub mod config;
pub mod consts;
pub mod delegate;
pub mod error;
pub mod launcher;
pub mod layout;
pub mod output;
pub mod runtime;

pub use config::LauncherConfig;
pub use error::LaunchError;
pub use launcher::{LaunchPlan, Launcher};
pub use layout::Entrypoints;
