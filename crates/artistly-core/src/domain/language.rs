use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Idiomas en los que un artista puede actuar, tal como los ofrece el alta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
  Hindi,
  English,
  Bengali,
  Telugu,
  Marathi,
  Tamil,
  Gujarati,
  Urdu,
  Kannada,
  Malayalam,
  Odia,
  Punjabi,
  Assamese,
}

impl Language {
  pub const ALL: [Language; 13] = [
    Language::Hindi,
    Language::English,
    Language::Bengali,
    Language::Telugu,
    Language::Marathi,
    Language::Tamil,
    Language::Gujarati,
    Language::Urdu,
    Language::Kannada,
    Language::Malayalam,
    Language::Odia,
    Language::Punjabi,
    Language::Assamese,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Language::Hindi => "Hindi",
      Language::English => "English",
      Language::Bengali => "Bengali",
      Language::Telugu => "Telugu",
      Language::Marathi => "Marathi",
      Language::Tamil => "Tamil",
      Language::Gujarati => "Gujarati",
      Language::Urdu => "Urdu",
      Language::Kannada => "Kannada",
      Language::Malayalam => "Malayalam",
      Language::Odia => "Odia",
      Language::Punjabi => "Punjabi",
      Language::Assamese => "Assamese",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid language: {input}")]
pub struct LanguageParseError {
  pub input: String,
}

impl FromStr for Language {
  type Err = LanguageParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    Language::ALL
      .into_iter()
      .find(|lang| lang.as_str().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| LanguageParseError { input: s.to_string() })
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
