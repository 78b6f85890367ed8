use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::words::Part;

#[derive(Debug, Error)]
pub enum NameError {
  #[error("file not found: {}", .path.display())]
  FileNotFound { path: PathBuf },

  #[error("unable to read {}: {source}", .path.display())]
  FileRead { path: PathBuf, source: io::Error },

  #[error("no {0} available to choose from")]
  EmptyWordList(Part),

  #[error("unknown mode '{0}', expected 'modern' or 'heroku'")]
  UnknownMode(String),

  #[error("unable to draw random values from the entropy source")]
  EntropyUnavailable,

  #[error("unable to encode output - {0}")]
  OutputEncoding(String),

  #[error("unable to write output - {0}")]
  OutputWrite(#[source] io::Error),

  #[error("invalid config file {}: {message}", .path.display())]
  ConfigParse { path: PathBuf, message: String },
}

impl NameError {
  pub fn from_io<P>(path: P, error: io::Error) -> Self
  where
    P: AsRef<Path>,
  {
    let path = path.as_ref().to_path_buf();

    match error.kind() {
      io::ErrorKind::NotFound => NameError::FileNotFound { path },
      _ => NameError::FileRead { path, source: error },
    }
  }
}

pub type Result<T> = std::result::Result<T, NameError>;

#[cfg(test)]
mod test {
  use super::NameError;
  use crate::words::Part;

  #[test]
  fn test_not_found_classification() {
    let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let result = NameError::from_io("nouns.txt", error);
    assert!(matches!(result, NameError::FileNotFound { .. }));
    assert_eq!(result.to_string(), "file not found: nouns.txt");
  }

  #[test]
  fn test_read_failure_classification() {
    let error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let result = NameError::from_io("nouns.txt", error);
    assert!(matches!(result, NameError::FileRead { .. }));
    assert_eq!(result.to_string(), "unable to read nouns.txt: denied");
  }

  #[test]
  fn test_empty_list_message() {
    assert_eq!(
      NameError::EmptyWordList(Part::Adjectives).to_string(),
      "no adjectives available to choose from"
    );
  }
}
