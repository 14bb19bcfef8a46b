//! Panic reporting for release builds.
//!
//! Replaces the default multi-line panic report with a single diagnostic line
//! in the same format as every other launcher failure. Debug builds keep the
//! default hook.

use std::any::Any;
use std::panic::{self, Location, PanicHookInfo};

use owo_colors::{OwoColorize, Stream};
use ptree_core::output::format_diagnostic;

/// Install the hook; a no-op in debug builds
pub fn install() {
  if cfg!(debug_assertions) {
    return;
  }

  panic::set_hook(Box::new(report));
}

#[allow(clippy::print_stderr)]
fn report(info: &PanicHookInfo<'_>) {
  let line = panic_line(info.payload(), info.location());
  eprintln!("{}", line.if_supports_color(Stream::Stderr, |text| text.red()));
}

/// The single diagnostic line printed for a panic
fn panic_line(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
  let message = payload
    .downcast_ref::<&str>()
    .map(|message| (*message).to_string())
    .or_else(|| payload.downcast_ref::<String>().cloned())
    .unwrap_or_else(|| "unknown panic".to_string());

  let description = match location {
    Some(location) => format!(
      "internal error: {message} at {}:{} (set RUST_BACKTRACE=1 for a backtrace)",
      location.file(),
      location.line()
    ),
    None => format!("internal error: {message} (set RUST_BACKTRACE=1 for a backtrace)"),
  };

  format_diagnostic(&description)
}
