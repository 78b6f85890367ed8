/// Draws values from the operating system's entropy source. Yields `None` when the source is unavailable.
#[derive(Debug, Default, Clone)]
pub struct RandomRoller {}

impl Iterator for RandomRoller {
  type Item = u64;

  fn next(&mut self) -> Option<Self::Item> {
    let mut buffer = [0u8; 8];

    getrandom::getrandom(&mut buffer)
      .map_err(|error| log::warn!("unable to generate random numbers - {}", error))
      .ok()
      .map(|_| u64::from_le_bytes(buffer))
  }
}

/// Uniformly selects an index in `0..bound` from the roller's output. Values above the largest multiple of
/// `bound` are rejected so that no index is favored.
///
/// Returns `None` when `bound` is zero or the roller runs dry.
pub fn pick<R>(roller: &mut R, bound: usize) -> Option<usize>
where
  R: Iterator<Item = u64>,
{
  if bound == 0 {
    return None;
  }

  let bound = bound as u64;
  let ceiling = u64::MAX - (u64::MAX % bound);

  roller
    .find(|value| *value < ceiling)
    .map(|value| (value % bound) as usize)
}
