pub const DEFAULT_SEPARATOR: &'static str = "-";
pub const DEFAULT_RANDOM_CHARS: &'static str = "0123456789";
pub const DEFAULT_RANDOM_LENGTH: usize = 3;
pub const DEFAULT_COUNT: usize = 1;

pub const MODE_MODERN: &'static str = "modern";
pub const MODE_HEROKU: &'static str = "heroku";

pub const OUTPUT_TEXT: &'static str = "text";
pub const OUTPUT_JSON: &'static str = "json";
pub const OUTPUT_YAML: &'static str = "yaml";
