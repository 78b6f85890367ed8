use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One layer of user supplied options. Every field is optional so layers (config file, environment,
/// command line) can be stacked with `merge`, later layers winning field by field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
  pub mode: Option<String>,
  pub count: Option<usize>,
  pub prefix: Option<String>,
  pub separator: Option<String>,
  pub output: Option<String>,
  pub append_random: Option<bool>,
  pub random_chars: Option<String>,
  pub random_length: Option<usize>,
  pub adjectives_list: Option<Vec<String>>,
  pub nouns_list: Option<Vec<String>>,
  pub adjectives_file: Option<PathBuf>,
  pub nouns_file: Option<PathBuf>,
}

impl Settings {
  pub fn merge(self, overrides: Settings) -> Settings {
    Settings {
      mode: overrides.mode.or(self.mode),
      count: overrides.count.or(self.count),
      prefix: overrides.prefix.or(self.prefix),
      separator: overrides.separator.or(self.separator),
      output: overrides.output.or(self.output),
      append_random: overrides.append_random.or(self.append_random),
      random_chars: overrides.random_chars.or(self.random_chars),
      random_length: overrides.random_length.or(self.random_length),
      adjectives_list: overrides.adjectives_list.or(self.adjectives_list),
      nouns_list: overrides.nouns_list.or(self.nouns_list),
      adjectives_file: overrides.adjectives_file.or(self.adjectives_file),
      nouns_file: overrides.nouns_file.or(self.nouns_file),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Settings;

  #[test]
  fn test_parse_kebab_keys() {
    let source = "mode: heroku\ncount: 4\nappend-random: true\nrandom-length: 5\nnouns-list:\n  - forest\n  - river\n";
    let settings = serde_yaml::from_str::<Settings>(source).expect("unable to parse");
    assert_eq!(settings.mode.as_deref(), Some("heroku"));
    assert_eq!(settings.count, Some(4));
    assert_eq!(settings.append_random, Some(true));
    assert_eq!(settings.random_length, Some(5));
    assert_eq!(settings.nouns_list, Some(vec!["forest".to_string(), "river".to_string()]));
    assert_eq!(settings.prefix, None);
  }

  #[test]
  fn test_unknown_keys_rejected() {
    let result = serde_yaml::from_str::<Settings>("colour: blue\n");
    assert!(result.is_err());
  }

  #[test]
  fn test_merge_prefers_overrides() {
    let base = Settings {
      count: Some(2),
      separator: Some("_".to_string()),
      prefix: Some("app".to_string()),
      ..Settings::default()
    };
    let overrides = Settings {
      count: Some(5),
      ..Settings::default()
    };
    let merged = base.merge(overrides);
    assert_eq!(merged.count, Some(5));
    assert_eq!(merged.separator.as_deref(), Some("_"));
    assert_eq!(merged.prefix.as_deref(), Some("app"));
  }
}
