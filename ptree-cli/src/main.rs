//! # ptree Launcher Entry Point
//!
//! Locates Node.js, checks that the ptree JavaScript CLI next to this binary
//! has been built, and runs it with every argument forwarded verbatim. The
//! launcher has no flags of its own; logging is controlled through
//! `PTREE_LOG`.

use std::env;
use std::process;

use ptree_core::consts::ENV_LOG;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod panic;

fn main() {
  panic::install();
  init_tracing();

  debug!(
    "ptree {} ({}, {})",
    env!("CARGO_PKG_VERSION"),
    env!("PTREE_GIT_HASH"),
    env!("PTREE_TARGET")
  );

  let code = ptree_core::launcher::run(env::args_os().skip(1));
  process::exit(code);
}

/// Log to stderr only, so the delegated CLI owns stdout
fn init_tracing() {
  let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .init();
}
