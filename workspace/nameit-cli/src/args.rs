use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use namebank::Settings;

use crate::constants;

#[derive(Debug, Clone, Default, Parser)]
#[command(
  name = "nameit",
  version,
  about = "Generate memorable random names",
  long_about = constants::LONG_ABOUT
)]
pub struct Cli {
  /// Config file (default is $HOME/.nameit.yaml)
  #[arg(long, value_name = "PATH", env = constants::CONFIG_ENV)]
  pub config: Option<PathBuf>,

  /// Generation mode ("modern" or "heroku")
  #[arg(long, env = constants::MODE_ENV)]
  pub mode: Option<String>,

  /// Number of names to generate
  #[arg(long, env = constants::COUNT_ENV)]
  pub count: Option<usize>,

  /// Prepend prefix to name
  #[arg(long, env = constants::PREFIX_ENV)]
  pub prefix: Option<String>,

  /// Separator between words
  #[arg(long, env = constants::SEPARATOR_ENV, allow_hyphen_values = true)]
  pub separator: Option<String>,

  /// Output format: text, json, or yaml
  #[arg(long, env = constants::OUTPUT_ENV)]
  pub output: Option<String>,

  /// Append a random token to the end of the name
  #[arg(
    long,
    env = constants::APPEND_RANDOM_ENV,
    value_parser = clap::builder::BoolishValueParser::new(),
    num_args = 0..=1,
    require_equals = true,
    default_missing_value = "true"
  )]
  pub append_random: Option<bool>,

  /// Characters to use when generating the random token
  #[arg(long, env = constants::RANDOM_CHARS_ENV)]
  pub random_chars: Option<String>,

  /// Length of the random token
  #[arg(long, env = constants::RANDOM_LENGTH_ENV)]
  pub random_length: Option<usize>,

  /// Comma separated adjectives to use in names
  #[arg(long, env = constants::ADJECTIVES_LIST_ENV, value_delimiter = ',')]
  pub adjectives_list: Vec<String>,

  /// Comma separated nouns to use in names
  #[arg(long, env = constants::NOUNS_LIST_ENV, value_delimiter = ',')]
  pub nouns_list: Vec<String>,

  /// Path to file containing adjectives, one per line
  #[arg(long, value_name = "PATH", env = constants::ADJECTIVES_FILE_ENV)]
  pub adjectives_file: Option<PathBuf>,

  /// Path to file containing nouns, one per line
  #[arg(long, value_name = "PATH", env = constants::NOUNS_FILE_ENV)]
  pub nouns_file: Option<PathBuf>,
}

/// Pairs of arguments that cannot both be typed on the command line. Values coming from the environment are
/// defaults and never conflict.
const EXCLUSIVE: &[(&str, &str)] = &[
  ("mode", "adjectives_list"),
  ("mode", "adjectives_file"),
  ("mode", "nouns_list"),
  ("mode", "nouns_file"),
  ("adjectives_list", "adjectives_file"),
  ("nouns_list", "nouns_file"),
];

fn typed(matches: &ArgMatches, id: &str) -> bool {
  matches.value_source(id) == Some(ValueSource::CommandLine)
}

fn flag(id: &str) -> String {
  format!("--{}", id.replace('_', "-"))
}

impl Cli {
  pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    let mut command = Cli::command();
    let matches = command.try_get_matches_from_mut(args)?;

    if let Some((left, right)) = EXCLUSIVE
      .iter()
      .find(|(left, right)| typed(&matches, left) && typed(&matches, right))
    {
      let message = format!("the argument '{}' cannot be used with '{}'", flag(right), flag(left));
      return Err(command.error(ErrorKind::ArgumentConflict, message));
    }

    Cli::from_arg_matches(&matches)
  }

  /// Parses the process arguments, exiting with clap's usage error on failure.
  pub fn parse_args() -> Self {
    Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|error| error.exit())
  }
}

fn non_empty(words: &[String]) -> Option<Vec<String>> {
  Some(words.to_vec()).filter(|words| !words.is_empty())
}

impl From<&Cli> for Settings {
  fn from(cli: &Cli) -> Settings {
    Settings {
      mode: cli.mode.clone(),
      count: cli.count,
      prefix: cli.prefix.clone(),
      separator: cli.separator.clone(),
      output: cli.output.clone(),
      append_random: cli.append_random,
      random_chars: cli.random_chars.clone(),
      random_length: cli.random_length,
      adjectives_list: non_empty(&cli.adjectives_list),
      nouns_list: non_empty(&cli.nouns_list),
      adjectives_file: cli.adjectives_file.clone(),
      nouns_file: cli.nouns_file.clone(),
    }
  }
}
