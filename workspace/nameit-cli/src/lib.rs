use std::io::Write;

use nameit::{Part, Result};

pub mod args;
pub mod config;
pub mod constants;

pub use args::Cli;
pub use config::Config;

/// Resolves configuration, generates the requested names and writes them to `out`. Notices go to stderr.
pub fn run<W>(cli: &Cli, out: &mut W) -> Result<()>
where
  W: Write,
{
  let config = Config::load(cli)?;

  if let Some(path) = &config.source {
    log::debug!("using config file '{}'", path.display());
    eprintln!("Using config file: {}", path.display());
  }

  if let Some(warning) = &config.warning {
    log::debug!("{}", warning);
    eprintln!("{}", warning);
  }

  let adjectives = config.adjectives.load(Part::Adjectives)?;
  let nouns = config.nouns.load(Part::Nouns)?;

  log::debug!(
    "generating {} names from {} adjectives and {} nouns",
    config.count,
    adjectives.len(),
    nouns.len()
  );

  let batch = nameit::generate_batch(&adjectives, &nouns, &config.options, config.count)?;
  nameit::output::write(&batch, config.output, out)
}

#[cfg(test)]
mod test {
  use super::{run, Cli};
  use nameit::NameError;
  use std::path::Path;

  fn inline(config: &Path, adjectives: &[&str], nouns: &[&str]) -> Cli {
    Cli {
      config: Some(config.to_path_buf()),
      adjectives_list: adjectives.iter().map(|w| w.to_string()).collect(),
      nouns_list: nouns.iter().map(|w| w.to_string()).collect(),
      ..Cli::default()
    }
  }

  #[test]
  fn test_run_text() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let cli = Cli {
      count: Some(2),
      ..inline(file.path(), &["quiet"], &["forest"])
    };
    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "quiet-forest\nquiet-forest\n");
  }

  #[test]
  fn test_run_zero_json() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let cli = Cli {
      count: Some(0),
      output: Some("json".to_string()),
      ..inline(file.path(), &["quiet"], &["forest"])
    };
    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
  }

  #[test]
  fn test_run_blank_inline_list() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let cli = inline(file.path(), &[" ", ""], &["forest"]);
    let mut out = Vec::new();
    assert!(matches!(run(&cli, &mut out), Err(NameError::EmptyWordList(_))));
    assert!(out.is_empty());
  }
}
