//! Argument dispatch.
//!
//! Only the first argument is inspected. Nothing is ever rejected: anything
//! other than an exact `--version` prints the banner.

use std::ffi::OsStr;

pub const VERSION_FLAG: &str = "--version";

/// What a single run of the binary does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
  PrintVersion,
  PrintBanner,
}

impl Invocation {
  /// Decide from the process arguments, excluding the program name
  pub fn from_args<I>(args: I) -> Self
  where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
  {
    match args.into_iter().next() {
      Some(first) if first.as_ref() == VERSION_FLAG => Invocation::PrintVersion,
      _ => Invocation::PrintBanner,
    }
  }
}
