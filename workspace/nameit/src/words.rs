use std::path::PathBuf;
use std::str::FromStr;

use super::constants;
use super::errors::{NameError, Result};
use super::{io, lists};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
  Adjectives,
  Nouns,
}

impl std::fmt::Display for Part {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Part::Adjectives => write!(formatter, "adjectives"),
      Part::Nouns => write!(formatter, "nouns"),
    }
  }
}

/// Selects which built-in word lists are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Modern,
  Heroku,
}

impl Default for Mode {
  fn default() -> Self {
    Mode::Modern
  }
}

impl std::fmt::Display for Mode {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Mode::Modern => write!(formatter, "{}", constants::MODE_MODERN),
      Mode::Heroku => write!(formatter, "{}", constants::MODE_HEROKU),
    }
  }
}

impl FromStr for Mode {
  type Err = NameError;

  fn from_str(input: &str) -> Result<Self> {
    match input.trim().to_lowercase().as_str() {
      constants::MODE_MODERN => Ok(Mode::Modern),
      constants::MODE_HEROKU => Ok(Mode::Heroku),
      _ => Err(NameError::UnknownMode(input.to_string())),
    }
  }
}

/// An ordered, non-empty sequence of candidate words. Entries are trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
  words: Vec<String>,
}

impl WordList {
  pub fn new<I, S>(part: Part, words: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let words = words
      .into_iter()
      .map(|word| word.as_ref().trim().to_string())
      .filter(|word| !word.is_empty())
      .collect::<Vec<String>>();

    if words.is_empty() {
      log::warn!("resolved {} to an empty list", part);
      return Err(NameError::EmptyWordList(part));
    }

    Ok(WordList { words })
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn get(&self, index: usize) -> Option<&str> {
    self.words.get(index).map(String::as_str)
  }

  pub fn words(&self) -> &[String] {
    &self.words
  }
}

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum WordSource {
  Builtin(Mode),
  Inline(Vec<String>),
  File(PathBuf),
}

impl WordSource {
  /// An inline list wins over a file, which wins over the built-in list for `mode`.
  pub fn select(mode: Mode, inline: Option<Vec<String>>, file: Option<PathBuf>) -> Self {
    match (inline, file) {
      (Some(words), _) if !words.is_empty() => WordSource::Inline(words),
      (_, Some(path)) => WordSource::File(path),
      _ => WordSource::Builtin(mode),
    }
  }

  pub fn load(&self, part: Part) -> Result<WordList> {
    log::debug!("loading {} from {:?}", part, self);

    match self {
      WordSource::Builtin(mode) => WordList::new(part, lists::builtin(*mode, part)),
      WordSource::Inline(words) => WordList::new(part, words),
      WordSource::File(path) => io::read_words(path).and_then(|words| WordList::new(part, words)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{Mode, Part, WordList, WordSource};
  use crate::errors::NameError;
  use std::io::Write;
  use std::path::PathBuf;

  #[test]
  fn test_mode_parse() {
    assert_eq!("Heroku".parse::<Mode>().unwrap(), Mode::Heroku);
    assert_eq!(" modern ".parse::<Mode>().unwrap(), Mode::Modern);
    assert!(matches!("retro".parse::<Mode>(), Err(NameError::UnknownMode(_))));
  }

  #[test]
  fn test_word_list_trims_and_drops_blank() {
    let list = WordList::new(Part::Nouns, vec!["  forest ", "", "   ", "river"]).unwrap();
    assert_eq!(list.words(), &["forest".to_string(), "river".to_string()]);
  }

  #[test]
  fn test_word_list_empty() {
    let result = WordList::new(Part::Nouns, Vec::<String>::new());
    assert!(matches!(result, Err(NameError::EmptyWordList(Part::Nouns))));
  }

  #[test]
  fn test_select_prefers_inline() {
    let source = WordSource::select(
      Mode::Heroku,
      Some(vec!["red".to_string()]),
      Some(PathBuf::from("adjectives.txt")),
    );
    assert_eq!(source, WordSource::Inline(vec!["red".to_string()]));
  }

  #[test]
  fn test_select_ignores_empty_inline() {
    let source = WordSource::select(Mode::Heroku, Some(vec![]), Some(PathBuf::from("nouns.txt")));
    assert_eq!(source, WordSource::File(PathBuf::from("nouns.txt")));
    assert_eq!(WordSource::select(Mode::Heroku, None, None), WordSource::Builtin(Mode::Heroku));
  }

  #[test]
  fn test_load_builtin() {
    for mode in &[Mode::Modern, Mode::Heroku] {
      for part in &[Part::Adjectives, Part::Nouns] {
        let list = WordSource::Builtin(*mode).load(*part).unwrap();
        assert!(list.len() > 10);
      }
    }
  }

  #[test]
  fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "quiet\n\n  misty  \n\t\nbold").unwrap();
    let list = WordSource::File(file.path().to_path_buf()).load(Part::Adjectives).unwrap();
    assert_eq!(list.words(), &["quiet".to_string(), "misty".to_string(), "bold".to_string()]);
  }

  #[test]
  fn test_load_blank_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "\n   \n").unwrap();
    let result = WordSource::File(file.path().to_path_buf()).load(Part::Adjectives);
    assert!(matches!(result, Err(NameError::EmptyWordList(Part::Adjectives))));
  }

  #[test]
  fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let result = WordSource::File(path.clone()).load(Part::Nouns);
    assert!(matches!(result, Err(NameError::FileNotFound { path: p }) if p == path));
  }
}
