use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Tramo de honorarios que declara un artista al darse de alta.
///
/// A diferencia de [`PriceRange`](super::PriceRange) es una lista cerrada:
/// el formulario solo ofrece estos valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FeeRange {
  /// ₹30000-50000
  ThirtyToFiftyThousand,
  /// ₹50000-100000
  FiftyThousandToOneLakh,
  /// ₹100000-200000
  OneToTwoLakh,
  /// ₹200000-500000
  TwoToFiveLakh,
  /// ₹500000+
  FiveLakhPlus,
}

impl FeeRange {
  pub const ALL: [FeeRange; 5] = [
    FeeRange::ThirtyToFiftyThousand,
    FeeRange::FiftyThousandToOneLakh,
    FeeRange::OneToTwoLakh,
    FeeRange::TwoToFiveLakh,
    FeeRange::FiveLakhPlus,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      FeeRange::ThirtyToFiftyThousand => "₹30000-50000",
      FeeRange::FiftyThousandToOneLakh => "₹50000-100000",
      FeeRange::OneToTwoLakh => "₹100000-200000",
      FeeRange::TwoToFiveLakh => "₹200000-500000",
      FeeRange::FiveLakhPlus => "₹500000+",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fee range: {input}")]
pub struct FeeRangeParseError {
  pub input: String,
}

impl FromStr for FeeRange {
  type Err = FeeRangeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized: String = s.chars().filter(|c| !matches!(c, '₹' | ',' | ' ')).collect();

    let range = match normalized.as_str() {
      "30000-50000" => FeeRange::ThirtyToFiftyThousand,
      "50000-100000" => FeeRange::FiftyThousandToOneLakh,
      "100000-200000" => FeeRange::OneToTwoLakh,
      "200000-500000" => FeeRange::TwoToFiveLakh,
      "500000+" => FeeRange::FiveLakhPlus,
      _ => return Err(FeeRangeParseError { input: s.to_string() }),
    };

    Ok(range)
  }
}

impl TryFrom<String> for FeeRange {
  type Error = FeeRangeParseError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl From<FeeRange> for String {
  fn from(range: FeeRange) -> Self {
    range.as_str().to_string()
  }
}

impl fmt::Display for FeeRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
