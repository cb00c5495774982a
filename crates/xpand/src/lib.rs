//! xpand - expand application intent into explicit Kubernetes resources.
//!
//! The project is pre-alpha: the binary reports its build provenance on
//! `--version` and prints a status banner otherwise.

pub mod banner;
pub mod build_info;
pub mod cli;
pub mod error;
pub mod logging;

use std::io::Write;

pub use build_info::BuildInfo;
pub use cli::Invocation;
pub use error::{Result, XpandError};

/// Write the output for `invocation` to `out` and flush it
pub fn run<W: Write>(invocation: Invocation, build: &BuildInfo, out: &mut W) -> Result<()> {
  tracing::debug!(?invocation, version = build.version(), "dispatching");

  match invocation {
    Invocation::PrintVersion => {
      writeln!(out, "{build}").map_err(|e| XpandError::output("version", e))?;
    }
    Invocation::PrintBanner => {
      banner::write_to(out).map_err(|e| XpandError::output("banner", e))?;
    }
  }

  out.flush().map_err(|e| XpandError::output("standard output", e))
}
