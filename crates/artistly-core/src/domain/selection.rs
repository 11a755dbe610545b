use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Conjunto de opciones marcadas (casillas de categorías, idiomas...).
///
/// Itera en el orden de declaración del enum, no en el de marcado, así que
/// dos formularios con las mismas casillas se comparan y muestran igual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection<T: Ord>(BTreeSet<T>);

impl<T: Ord> Default for Selection<T> {
  fn default() -> Self {
    Selection(BTreeSet::new())
  }
}

impl<T: Ord> Selection<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Marca `value`. Devuelve `false` si ya estaba marcado.
  pub fn insert(&mut self, value: T) -> bool {
    self.0.insert(value)
  }

  /// Desmarca `value`. Devuelve `false` si no estaba marcado.
  pub fn remove(&mut self, value: &T) -> bool {
    self.0.remove(value)
  }

  /// Invierte la casilla y devuelve si queda marcada.
  pub fn toggle(&mut self, value: T) -> bool {
    if self.0.remove(&value) {
      false
    } else {
      self.0.insert(value);
      true
    }
  }

  pub fn contains(&self, value: &T) -> bool {
    self.0.contains(value)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.0.iter()
  }
}

impl<T: Ord + fmt::Display> Selection<T> {
  /// Une las opciones marcadas con `sep`; vacío si no hay ninguna.
  pub fn joined(&self, sep: &str) -> String {
    self.0.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep)
  }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Selection(iter.into_iter().collect())
  }
}

impl<T: Ord> Extend<T> for Selection<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.0.extend(iter);
  }
}

impl<'a, T: Ord> IntoIterator for &'a Selection<T> {
  type Item = &'a T;
  type IntoIter = std::collections::btree_set::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
