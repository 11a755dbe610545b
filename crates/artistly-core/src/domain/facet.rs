use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Valor de una dimensión de filtrado: `All` o un valor concreto.
///
/// `All` coincide con cualquier registro en esa dimensión.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet<T> {
  #[default]
  All,
  Is(T),
}

impl<T: PartialEq> Facet<T> {
  pub fn matches(&self, value: &T) -> bool {
    match self {
      Facet::All => true,
      Facet::Is(wanted) => wanted == value,
    }
  }
}

impl<T> Facet<T> {
  pub fn is_all(&self) -> bool {
    matches!(self, Facet::All)
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Facet::All => None,
      Facet::Is(v) => Some(v),
    }
  }
}

impl<T> From<Option<T>> for Facet<T> {
  fn from(value: Option<T>) -> Self {
    value.map_or(Facet::All, Facet::Is)
  }
}

impl<T: FromStr> FromStr for Facet<T> {
  type Err = T::Err;

  /// `"All"` (sin distinguir mayúsculas) o la cadena vacía es el centinela;
  /// cualquier otra cosa se delega en `T`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
      return Ok(Facet::All);
    }
    trimmed.parse().map(Facet::Is)
  }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Facet::All => f.write_str("All"),
      Facet::Is(v) => v.fmt(f),
    }
  }
}
