use namebank::NameBatch;

use super::errors::{NameError, Result};
use super::options::FormatOptions;
use super::rollers::{pick, RandomRoller};
use super::words::WordList;

/// Produces names from a pair of word lists, drawing randomness from the roller `R`.
pub struct Synthesizer<'a, R>
where
  R: Iterator<Item = u64>,
{
  adjectives: &'a WordList,
  nouns: &'a WordList,
  options: &'a FormatOptions,
  alphabet: Vec<char>,
  roller: R,
}

impl<'a> Synthesizer<'a, RandomRoller> {
  pub fn new(adjectives: &'a WordList, nouns: &'a WordList, options: &'a FormatOptions) -> Self {
    Synthesizer::with_roller(adjectives, nouns, options, RandomRoller::default())
  }
}

fn choose<'w, R>(roller: &mut R, words: &'w WordList) -> Result<&'w str>
where
  R: Iterator<Item = u64>,
{
  pick(roller, words.len())
    .and_then(|index| words.get(index))
    .ok_or(NameError::EntropyUnavailable)
}

impl<'a, R> Synthesizer<'a, R>
where
  R: Iterator<Item = u64>,
{
  pub fn with_roller(adjectives: &'a WordList, nouns: &'a WordList, options: &'a FormatOptions, roller: R) -> Self {
    let alphabet = options.random_chars.chars().collect();

    Synthesizer {
      adjectives,
      nouns,
      options,
      alphabet,
      roller,
    }
  }

  pub fn synthesize(&mut self) -> Result<String> {
    let FormatOptions {
      separator,
      prefix,
      random_length,
      ..
    } = self.options;

    let adjective = choose(&mut self.roller, self.adjectives)?;
    let noun = choose(&mut self.roller, self.nouns)?;

    let mut name = String::with_capacity(prefix.len() + adjective.len() + noun.len() + separator.len() * 3);

    if !prefix.is_empty() {
      name.push_str(prefix);
      name.push_str(separator);
    }

    name.push_str(adjective);
    name.push_str(separator);
    name.push_str(noun);

    if self.options.suffix_enabled() {
      name.push_str(separator);

      for _ in 0..*random_length {
        let index = pick(&mut self.roller, self.alphabet.len()).ok_or(NameError::EntropyUnavailable)?;
        name.push(self.alphabet[index]);
      }
    }

    log::debug!("generated name - '{}'", name);
    Ok(name)
  }

  pub fn batch(&mut self, count: usize) -> Result<NameBatch> {
    let mut batch = NameBatch::with_capacity(count);

    for _ in 0..count {
      batch.push(self.synthesize()?);
    }

    Ok(batch)
  }
}
