use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, XpandError>;

#[derive(Error, Debug)]
pub enum XpandError {
  #[error("failed to write {what}: {source}")]
  Output {
    what: &'static str,
    #[source]
    source: io::Error,
  },
}

impl XpandError {
  pub fn output(what: &'static str, source: io::Error) -> Self {
    Self::Output { what, source }
  }

  /// The reader went away before we finished writing
  pub fn is_broken_pipe(&self) -> bool {
    match self {
      Self::Output { source, .. } => source.kind() == io::ErrorKind::BrokenPipe,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_output_error_message() {
    let err = XpandError::output("banner", io::Error::new(io::ErrorKind::Other, "disk on fire"));
    assert_eq!(err.to_string(), "failed to write banner: disk on fire");
    assert!(!err.is_broken_pipe());
  }

  #[test]
  fn test_broken_pipe_detection() {
    let err = XpandError::output("version", io::Error::from(io::ErrorKind::BrokenPipe));
    assert!(err.is_broken_pipe());
  }

  #[test]
  fn test_source_is_preserved() {
    use std::error::Error;

    let err = XpandError::output("banner", io::Error::from(io::ErrorKind::WriteZero));
    let source = err.source().and_then(|s| s.downcast_ref::<io::Error>());
    assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::WriteZero));
  }
}
