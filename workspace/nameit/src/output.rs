use std::io::Write;
use std::str::FromStr;

use namebank::NameBatch;

use super::constants;
use super::errors::{NameError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Text,
  Json,
  Yaml,
}

impl Default for OutputFormat {
  fn default() -> Self {
    OutputFormat::Text
  }
}

impl std::fmt::Display for OutputFormat {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      OutputFormat::Text => write!(formatter, "{}", constants::OUTPUT_TEXT),
      OutputFormat::Json => write!(formatter, "{}", constants::OUTPUT_JSON),
      OutputFormat::Yaml => write!(formatter, "{}", constants::OUTPUT_YAML),
    }
  }
}

/// Raised, but never fatal, when an output format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOutputFormat(pub String);

impl std::fmt::Display for UnknownOutputFormat {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "unknown output format '{}', using text format", self.0)
  }
}

impl FromStr for OutputFormat {
  type Err = UnknownOutputFormat;

  fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
    match input.trim().to_lowercase().as_str() {
      constants::OUTPUT_TEXT => Ok(OutputFormat::Text),
      constants::OUTPUT_JSON => Ok(OutputFormat::Json),
      constants::OUTPUT_YAML => Ok(OutputFormat::Yaml),
      _ => Err(UnknownOutputFormat(input.to_string())),
    }
  }
}

impl OutputFormat {
  /// Parses `name`, falling back to text along with the warning to report.
  pub fn lenient(name: &str) -> (Self, Option<UnknownOutputFormat>) {
    match name.parse::<OutputFormat>() {
      Ok(format) => (format, None),
      Err(warning) => (OutputFormat::Text, Some(warning)),
    }
  }
}

fn encoding_error<E>(error: E) -> NameError
where
  E: std::fmt::Display,
{
  log::warn!("unable to serialize names - {}", error);
  NameError::OutputEncoding(error.to_string())
}

/// Renders the batch as a single document. JSON is pretty printed without a trailing newline.
pub fn format(names: &NameBatch, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Text => Ok(names.iter().map(|name| format!("{}\n", name)).collect()),
    OutputFormat::Json => serde_json::to_string_pretty(names).map_err(encoding_error),
    OutputFormat::Yaml => serde_yaml::to_string(names).map_err(encoding_error),
  }
}

/// Writes the rendered batch to `sink`, terminating JSON documents with a newline.
pub fn write<W>(names: &NameBatch, format: OutputFormat, sink: &mut W) -> Result<()>
where
  W: Write,
{
  let mut document = self::format(names, format)?;

  if format == OutputFormat::Json {
    document.push('\n');
  }

  sink
    .write_all(document.as_bytes())
    .and_then(|_| sink.flush())
    .map_err(NameError::OutputWrite)
}
