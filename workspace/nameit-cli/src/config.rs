use std::path::PathBuf;

use namebank::Settings;
use nameit::{constants as defaults, FormatOptions, Mode, OutputFormat, Result, UnknownOutputFormat, WordSource};

use crate::args::Cli;
use crate::constants;

/// Everything a run needs, resolved once from defaults, the config file, the environment and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub options: FormatOptions,
  pub count: usize,
  pub output: OutputFormat,
  pub warning: Option<UnknownOutputFormat>,
  pub adjectives: WordSource,
  pub nouns: WordSource,
  pub source: Option<PathBuf>,
}

fn default_path() -> Option<PathBuf> {
  dirs::home_dir().map(|home| home.join(constants::CONFIG_FILE_NAME))
}

/// An explicit path must exist; the default location is only read when something is there.
fn read_file(explicit: Option<&PathBuf>) -> Result<Option<(PathBuf, Settings)>> {
  let path = match explicit {
    Some(path) => path.clone(),
    None => match default_path() {
      Some(path) if path.is_file() => path,
      other => {
        log::debug!("no default config file found (looked for {:?})", other);
        return Ok(None);
      }
    },
  };

  log::debug!("reading config file '{}'", path.display());
  nameit::io::read_settings(&path).map(|settings| Some((path, settings)))
}

impl Config {
  pub fn load(cli: &Cli) -> Result<Self> {
    let (source, file) = match read_file(cli.config.as_ref())? {
      Some((path, settings)) => (Some(path), settings),
      None => (None, Settings::default()),
    };

    let mut config = Config::resolve(file.merge(Settings::from(cli)))?;
    config.source = source;
    Ok(config)
  }

  pub fn resolve(settings: Settings) -> Result<Self> {
    let Settings {
      mode,
      count,
      prefix,
      separator,
      output,
      append_random,
      random_chars,
      random_length,
      adjectives_list,
      nouns_list,
      adjectives_file,
      nouns_file,
    } = settings;

    let mode = mode
      .as_deref()
      .map(str::parse::<Mode>)
      .transpose()?
      .unwrap_or_default();

    let (output, warning) = output
      .as_deref()
      .map(OutputFormat::lenient)
      .unwrap_or_default();

    let options = FormatOptions {
      separator: separator.unwrap_or_else(|| defaults::DEFAULT_SEPARATOR.to_string()),
      prefix: prefix.unwrap_or_default(),
      append_random: append_random.unwrap_or(false),
      random_chars: random_chars.unwrap_or_else(|| defaults::DEFAULT_RANDOM_CHARS.to_string()),
      random_length: random_length.unwrap_or(defaults::DEFAULT_RANDOM_LENGTH),
    };

    Ok(Config {
      options,
      count: count.unwrap_or(defaults::DEFAULT_COUNT),
      output,
      warning,
      adjectives: WordSource::select(mode, adjectives_list, adjectives_file),
      nouns: WordSource::select(mode, nouns_list, nouns_file),
      source: None,
    })
  }
}
