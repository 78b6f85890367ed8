pub mod constants;
pub mod errors;
pub mod io;
pub mod lists;
pub mod options;
pub mod output;
pub mod rollers;
pub mod synth;
pub mod words;

pub use errors::{NameError, Result};
pub use namebank::NameBatch;
pub use options::FormatOptions;
pub use output::{OutputFormat, UnknownOutputFormat};
pub use synth::Synthesizer;
pub use words::{Mode, Part, WordList, WordSource};

/// Generates a single name using the operating system's entropy source.
pub fn synthesize(adjectives: &WordList, nouns: &WordList, options: &FormatOptions) -> Result<String> {
  Synthesizer::new(adjectives, nouns, options).synthesize()
}

/// Generates `count` names, in generation order.
pub fn generate_batch(
  adjectives: &WordList,
  nouns: &WordList,
  options: &FormatOptions,
  count: usize,
) -> Result<NameBatch> {
  Synthesizer::new(adjectives, nouns, options).batch(count)
}
