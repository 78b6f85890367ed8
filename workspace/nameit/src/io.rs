use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use namebank::Settings;

use super::errors::{NameError, Result};

/// Reads a word list file, one word per line. Surrounding whitespace and blank lines are dropped.
pub fn read_words<P>(path: P) -> Result<Vec<String>>
where
  P: AsRef<Path>,
{
  let path = path.as_ref();
  let file = fs::File::open(path).map_err(|error| NameError::from_io(path, error))?;

  let lines = BufReader::new(file)
    .lines()
    .collect::<std::io::Result<Vec<String>>>()
    .map_err(|error| NameError::from_io(path, error))?;

  let words = lines
    .into_iter()
    .map(|line| line.trim().to_string())
    .filter(|line| !line.is_empty())
    .collect::<Vec<String>>();

  log::debug!("read {} words from '{}'", words.len(), path.display());
  Ok(words)
}

/// Reads a yaml config file. An empty file is treated as one with no keys.
pub fn read_settings<P>(path: P) -> Result<Settings>
where
  P: AsRef<Path>,
{
  let path = path.as_ref();
  let contents = fs::read_to_string(path).map_err(|error| NameError::from_io(path, error))?;

  if contents.trim().is_empty() {
    return Ok(Settings::default());
  }

  serde_yaml::from_str::<Settings>(&contents).map_err(|error| NameError::ConfigParse {
    path: path.to_path_buf(),
    message: error.to_string(),
  })
}
