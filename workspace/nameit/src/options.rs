use super::constants;

/// Controls the shape of every generated name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
  pub separator: String,
  pub prefix: String,
  pub append_random: bool,
  pub random_chars: String,
  pub random_length: usize,
}

impl Default for FormatOptions {
  fn default() -> Self {
    FormatOptions {
      separator: constants::DEFAULT_SEPARATOR.to_string(),
      prefix: String::default(),
      append_random: false,
      random_chars: constants::DEFAULT_RANDOM_CHARS.to_string(),
      random_length: constants::DEFAULT_RANDOM_LENGTH,
    }
  }
}

impl FormatOptions {
  pub fn suffix_enabled(&self) -> bool {
    self.append_random && !self.random_chars.is_empty() && self.random_length > 0
  }
}
