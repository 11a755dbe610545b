use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Tipo de artista que se puede contratar.
///
/// Las variantes estándar son las que ofrecen el catálogo y el formulario de
/// alta. Cualquier otra etiqueta (p. ej. la de un catálogo importado) se
/// conserva en [`Category::Custom`], de modo que parsear nunca falla.
///
/// Se serializa como su texto visible (`"Singer"`, `"DJ"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
  Singer,
  Dancer,
  Speaker,
  DJ,
  Musician,
  Comedian,
  Magician,
  /// Etiqueta no estándar, tal y como venía en el origen.
  Custom(String),
}

impl Category {
  /// Categorías seleccionables, en el orden en que se muestran.
  pub const STANDARD: [Category; 7] = [
    Category::Singer,
    Category::Dancer,
    Category::Speaker,
    Category::DJ,
    Category::Musician,
    Category::Comedian,
    Category::Magician,
  ];

  pub fn as_str(&self) -> &str {
    match self {
      Category::Singer => "Singer",
      Category::Dancer => "Dancer",
      Category::Speaker => "Speaker",
      Category::DJ => "DJ",
      Category::Musician => "Musician",
      Category::Comedian => "Comedian",
      Category::Magician => "Magician",
      Category::Custom(s) => s,
    }
  }
}

impl FromStr for Category {
  type Err = Infallible;

  /// Reconoce las categorías estándar sin distinguir mayúsculas ni plural
  /// ("singers" → `Singer`). El resto acaba en `Custom` con el texto original.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();
    let singular = normalized.strip_suffix('s').unwrap_or(&normalized);

    let category = match singular {
      "singer" => Category::Singer,
      "dancer" => Category::Dancer,
      "speaker" => Category::Speaker,
      "dj" => Category::DJ,
      "musician" => Category::Musician,
      "comedian" => Category::Comedian,
      "magician" => Category::Magician,
      _ => Category::Custom(s.to_string()),
    };

    Ok(category)
  }
}

impl From<String> for Category {
  fn from(s: String) -> Self {
    match s.parse::<Self>() {
      Ok(category) => category,
      Err(never) => match never {},
    }
  }
}

impl From<Category> for String {
  fn from(category: Category) -> Self {
    match category {
      Category::Custom(s) => s,
      other => other.as_str().to_string(),
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_plural_and_case_insensitive_labels() {
    assert_eq!("Singers".parse::<Category>().unwrap(), Category::Singer);
    assert_eq!(" dj ".parse::<Category>().unwrap(), Category::DJ);
    assert_eq!("DJs".parse::<Category>().unwrap(), Category::DJ);
  }

  #[test]
  fn unknown_labels_are_kept_verbatim() {
    let category: Category = "Ventriloquist".parse().unwrap();

    assert_eq!(category, Category::Custom("Ventriloquist".into()));
    assert_eq!(category.to_string(), "Ventriloquist");
  }
}
