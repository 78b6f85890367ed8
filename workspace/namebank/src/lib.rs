use serde::{Deserialize, Serialize};

pub mod settings;

pub use settings::Settings;

/// The ordered names produced by a single run. Serializes as a plain sequence of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NameBatch(Vec<String>);

impl NameBatch {
  pub fn with_capacity(capacity: usize) -> Self {
    NameBatch(Vec::with_capacity(capacity))
  }

  pub fn push(&mut self, name: String) {
    self.0.push(name)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn names(&self) -> &[String] {
    &self.0
  }

  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.0.iter()
  }

  pub fn into_inner(self) -> Vec<String> {
    self.0
  }
}

impl<S> From<Vec<S>> for NameBatch
where
  S: Into<String>,
{
  fn from(names: Vec<S>) -> Self {
    names.into_iter().map(|name| name.into()).collect()
  }
}

impl std::iter::FromIterator<String> for NameBatch {
  fn from_iter<T: IntoIterator<Item = String>>(target: T) -> Self {
    NameBatch(target.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a NameBatch {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
