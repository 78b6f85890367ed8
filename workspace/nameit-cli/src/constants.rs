pub const CONFIG_FILE_NAME: &'static str = ".nameit.yaml";

pub const CONFIG_ENV: &'static str = "NAMEIT_CONFIG";
pub const MODE_ENV: &'static str = "NAMEIT_MODE";
pub const COUNT_ENV: &'static str = "NAMEIT_COUNT";
pub const PREFIX_ENV: &'static str = "NAMEIT_PREFIX";
pub const SEPARATOR_ENV: &'static str = "NAMEIT_SEPARATOR";
pub const OUTPUT_ENV: &'static str = "NAMEIT_OUTPUT";
pub const APPEND_RANDOM_ENV: &'static str = "NAMEIT_APPEND_RANDOM";
pub const RANDOM_CHARS_ENV: &'static str = "NAMEIT_RANDOM_CHARS";
pub const RANDOM_LENGTH_ENV: &'static str = "NAMEIT_RANDOM_LENGTH";
pub const ADJECTIVES_LIST_ENV: &'static str = "NAMEIT_ADJECTIVES_LIST";
pub const NOUNS_LIST_ENV: &'static str = "NAMEIT_NOUNS_LIST";
pub const ADJECTIVES_FILE_ENV: &'static str = "NAMEIT_ADJECTIVES_FILE";
pub const NOUNS_FILE_ENV: &'static str = "NAMEIT_NOUNS_FILE";

pub const LONG_ABOUT: &'static str = "Generate Heroku-like memorable random names.

Names combine a random adjective and noun, optionally with a prefix and a random suffix. The word lists,
separator and suffix are all configurable. Output formats include plain text (one per line), a JSON array
or a YAML sequence.

Defaults are read from $HOME/.nameit.yaml (or --config) and NAMEIT_* environment variables; flags on the
command line always win.

Examples:
  # Generate a single Heroku-style name
  nameit --mode=heroku

  # Generate 5 modern-style names with custom separator
  nameit --mode=modern --count=5 --separator=_

  # Generate names using custom word lists
  nameit --adjectives-list=red,blue,green --nouns-list=apple,banana,orange

  # Generate names using words from files
  nameit --adjectives-file=./my-adjectives.txt --nouns-file=./my-nouns.txt

  # Output as JSON
  nameit --count=10 --output=json";
