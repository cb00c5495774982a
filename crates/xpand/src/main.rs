use std::io;

use xpand::{logging, BuildInfo, Invocation};

#[cfg(not(tarpaulin_include))] // Skip coverage - process entry, exercised by tests/cli.rs
fn main() {
  logging::init();

  let build = BuildInfo::from_build_env();
  let invocation = Invocation::from_args(std::env::args_os().skip(1));

  // Every path exits 0, including a failed write.
  if let Err(err) = xpand::run(invocation, &build, &mut io::stdout().lock()) {
    if err.is_broken_pipe() {
      logging::warn(&err.to_string());
    } else {
      logging::error(&err.to_string());
    }
  }
}
