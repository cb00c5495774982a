//! Diagnostics for xpand.
//!
//! Standard output carries only the banner or version line, so everything
//! here goes to stderr: `tracing` events through a fixed-level subscriber,
//! and bracket-prefixed report lines for failures the user should see.
//!
//! The subscriber filter is fixed and ignores `RUST_LOG`. Report prefixes
//! are colored by `colored`, which honors `NO_COLOR`, `CLICOLOR` and
//! `CLICOLOR_FORCE`; those only change styling of stderr reports.

use colored::*;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

pub const DEFAULT_DIRECTIVES: &str = "xpand=warn";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
  let filter = EnvFilter::new(DEFAULT_DIRECTIVES);

  // A subscriber may already be installed (tests call this repeatedly).
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init()
    .ok();
}

fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]", prefix.color(color).bold())
}

fn prefixed(color: Color, prefix: &str, message: &str) -> Vec<String> {
  let prefix = format_prefix(color, prefix);
  message.lines().map(|line| format!("{prefix} {line}")).collect()
}

fn report(color: Color, prefix: &str, message: &str) {
  for line in prefixed(color, prefix, message) {
    eprintln!("{line}");
  }
}

pub fn warn(message: &str) {
  report(Color::Yellow, "warn", message);
}

pub fn error(message: &str) {
  report(Color::Red, "error", message);
}
