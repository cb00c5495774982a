//! Build provenance.
//!
//! Version, commit and build date are fixed when the binary is compiled.
//! The release tooling injects them through `build.rs`; unset values fall
//! back to `dev`, `none` and `unknown`.

use std::fmt;

pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_COMMIT: &str = "none";
pub const DEFAULT_DATE: &str = "unknown";

/// Immutable build information, created once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
  version: String,
  commit: String,
  date: String,
}

impl BuildInfo {
  /// Values are trimmed; blank ones are replaced by their defaults so no
  /// field is ever empty
  pub fn new(version: impl Into<String>, commit: impl Into<String>, date: impl Into<String>) -> Self {
    Self {
      version: or_default(version.into(), DEFAULT_VERSION),
      commit: or_default(commit.into(), DEFAULT_COMMIT),
      date: or_default(date.into(), DEFAULT_DATE),
    }
  }

  /// Build information compiled into this binary
  pub fn from_build_env() -> Self {
    Self::new(
      option_env!("XPAND_BUILD_INFO_VERSION").unwrap_or(DEFAULT_VERSION),
      option_env!("XPAND_BUILD_INFO_COMMIT").unwrap_or(DEFAULT_COMMIT),
      option_env!("XPAND_BUILD_INFO_DATE").unwrap_or(DEFAULT_DATE),
    )
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn commit(&self) -> &str {
    &self.commit
  }

  pub fn date(&self) -> &str {
    &self.date
  }
}

impl Default for BuildInfo {
  fn default() -> Self {
    Self::new(DEFAULT_VERSION, DEFAULT_COMMIT, DEFAULT_DATE)
  }
}

impl fmt::Display for BuildInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "xpand {} (commit: {}, built: {})", self.version, self.commit, self.date)
  }
}

fn or_default(value: String, default: &str) -> String {
  match value.trim() {
    "" => default.to_string(),
    trimmed => trimmed.to_string(),
  }
}
