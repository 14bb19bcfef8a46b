//! # Output Formatting
//!
//! Diagnostics are single lines on stderr prefixed with the tool name. The
//! prefix is colored only when stderr is a color-capable terminal.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream, Style};

use crate::consts::TOOL_NAME;

/// Format a diagnostic line without any styling
pub fn format_diagnostic(message: &str) -> String {
  render(&TOOL_NAME, message)
}

/// Print a diagnostic line to stderr
#[allow(clippy::print_stderr)]
pub fn print_diagnostic(message: &str) {
  let style = Style::new().red().bold();
  let prefix = TOOL_NAME.if_supports_color(Stream::Stderr, |text| text.style(style));
  eprintln!("{}", render(&prefix, message));
}

fn render(prefix: &dyn Display, message: &str) -> String {
  format!("{prefix}: {message}")
}
