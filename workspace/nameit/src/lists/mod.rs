use crate::words::{Mode, Part};

const MODERN_ADJECTIVES: &'static str = include_str!("modern/adjectives.txt");
const MODERN_NOUNS: &'static str = include_str!("modern/nouns.txt");
const HEROKU_ADJECTIVES: &'static str = include_str!("heroku/adjectives.txt");
const HEROKU_NOUNS: &'static str = include_str!("heroku/nouns.txt");

/// The embedded word list for a mode, one word per line in the source file.
pub fn builtin(mode: Mode, part: Part) -> impl Iterator<Item = &'static str> {
  let data = match (mode, part) {
    (Mode::Modern, Part::Adjectives) => MODERN_ADJECTIVES,
    (Mode::Modern, Part::Nouns) => MODERN_NOUNS,
    (Mode::Heroku, Part::Adjectives) => HEROKU_ADJECTIVES,
    (Mode::Heroku, Part::Nouns) => HEROKU_NOUNS,
  };

  data.lines().map(str::trim).filter(|line| !line.is_empty())
}
