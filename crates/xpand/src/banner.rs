//! Status banner shown when no recognized flag is given.

use std::io::{self, Write};

pub const LINES: [&str; 6] = [
  "xpand - Expand application intent into explicit Kubernetes resources",
  "",
  "Status: Pre-alpha (design phase)",
  "See: https://github.com/davetashner/xpand",
  "",
  "Commands will be implemented after ADRs are decided.",
];

/// The banner text, every line newline-terminated
pub fn render() -> String {
  LINES.iter().map(|line| format!("{line}\n")).collect()
}

pub fn write_to<W: Write>(out: &mut W) -> io::Result<()> {
  out.write_all(render().as_bytes())
}
