use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Tramo de caché publicado en el catálogo.
///
/// Los tramos fijos son los del filtro de precios de la página de artistas.
/// Un registro con un tramo distinto conserva su texto en [`PriceRange::Custom`];
/// solo coincide con un filtro que tenga exactamente ese mismo texto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriceRange {
  /// ₹200000-500000
  TwoToFiveLakh,
  /// ₹500000-1000000
  FiveToTenLakh,
  /// ₹1000000-1500000
  TenToFifteenLakh,
  /// ₹1500000+
  FifteenLakhPlus,
  Custom(String),
}

impl PriceRange {
  pub const STANDARD: [PriceRange; 4] = [
    PriceRange::TwoToFiveLakh,
    PriceRange::FiveToTenLakh,
    PriceRange::TenToFifteenLakh,
    PriceRange::FifteenLakhPlus,
  ];

  pub fn as_str(&self) -> &str {
    match self {
      PriceRange::TwoToFiveLakh => "₹200000-500000",
      PriceRange::FiveToTenLakh => "₹500000-1000000",
      PriceRange::TenToFifteenLakh => "₹1000000-1500000",
      PriceRange::FifteenLakhPlus => "₹1500000+",
      PriceRange::Custom(s) => s,
    }
  }
}

impl FromStr for PriceRange {
  type Err = Infallible;

  /// Ignora el símbolo de rupia, separadores de miles y espacios, de modo que
  /// `"₹5,00,000-10,00,000"` y `"500000-1000000"` son el mismo tramo.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized: String = s.chars().filter(|c| !matches!(c, '₹' | ',' | ' ')).collect();

    let range = match normalized.as_str() {
      "200000-500000" => PriceRange::TwoToFiveLakh,
      "500000-1000000" => PriceRange::FiveToTenLakh,
      "1000000-1500000" => PriceRange::TenToFifteenLakh,
      "1500000+" => PriceRange::FifteenLakhPlus,
      _ => PriceRange::Custom(s.to_string()),
    };

    Ok(range)
  }
}

impl From<String> for PriceRange {
  fn from(s: String) -> Self {
    match s.parse::<Self>() {
      Ok(range) => range,
      Err(never) => match never {},
    }
  }
}

impl From<PriceRange> for String {
  fn from(range: PriceRange) -> Self {
    match range {
      PriceRange::Custom(s) => s,
      other => other.as_str().to_string(),
    }
  }
}

impl fmt::Display for PriceRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn indian_digit_grouping_maps_to_standard_bucket() {
    assert_eq!("₹5,00,000-10,00,000".parse::<PriceRange>().unwrap(), PriceRange::FiveToTenLakh);
    assert_eq!("₹1500000+".parse::<PriceRange>().unwrap(), PriceRange::FifteenLakhPlus);
  }

  #[test]
  fn unknown_bucket_is_custom() {
    let range: PriceRange = "₹6,00,000-12,00,000".parse().unwrap();
    assert_eq!(range, PriceRange::Custom("₹6,00,000-12,00,000".into()));
  }
}
