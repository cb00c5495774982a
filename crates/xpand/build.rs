//! Build script for xpand.
//!
//! Forwards release provenance (version, commit, build date) from the
//! release tooling's environment into compile-time constants.

use std::env;

/// (variable set by the release tooling, variable read by the crate)
const PROVENANCE: [(&str, &str); 3] = [
  ("XPAND_VERSION", "XPAND_BUILD_INFO_VERSION"),
  ("XPAND_COMMIT", "XPAND_BUILD_INFO_COMMIT"),
  ("XPAND_BUILD_DATE", "XPAND_BUILD_INFO_DATE"),
];

fn main() {
  println!("cargo:rerun-if-changed=build.rs");

  for (source, target) in PROVENANCE {
    println!("cargo:rerun-if-env-changed={source}");

    if let Some(value) = injected_value(source) {
      println!("cargo:rustc-env={target}={value}");
    }
  }
}

/// Read a provenance value, ignoring unset, non-unicode and blank values
fn injected_value(name: &str) -> Option<String> {
  env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
