use crate::onboarding::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Paso actual del asistente de alta. Es lineal: 1 → 2 → 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
  #[default]
  BasicInfo,
  SkillsAndPricing,
  ContactAndReview,
}

impl WizardStep {
  pub const COUNT: u8 = 3;

  pub fn number(self) -> u8 {
    match self {
      WizardStep::BasicInfo => 1,
      WizardStep::SkillsAndPricing => 2,
      WizardStep::ContactAndReview => 3,
    }
  }

  pub fn from_number(n: u8) -> Option<Self> {
    match n {
      1 => Some(WizardStep::BasicInfo),
      2 => Some(WizardStep::SkillsAndPricing),
      3 => Some(WizardStep::ContactAndReview),
      _ => None,
    }
  }

  /// Paso siguiente; en el último se queda donde está.
  pub fn next(self) -> Self {
    Self::from_number(self.number() + 1).unwrap_or(self)
  }

  /// Paso anterior; en el primero se queda donde está.
  pub fn previous(self) -> Self {
    Self::from_number(self.number() - 1).unwrap_or(self)
  }

  pub fn is_first(self) -> bool {
    self == WizardStep::BasicInfo
  }

  pub fn is_last(self) -> bool {
    self == WizardStep::ContactAndReview
  }

  pub fn title(self) -> &'static str {
    match self {
      WizardStep::BasicInfo => "Basic Info",
      WizardStep::SkillsAndPricing => "Skills & Pricing",
      WizardStep::ContactAndReview => "Contact & Review",
    }
  }

  /// Campos del esquema que se rellenan en este paso.
  pub fn fields(self) -> &'static [Field] {
    match self {
      WizardStep::BasicInfo => &[Field::Name, Field::Bio],
      WizardStep::SkillsAndPricing => &[Field::Categories, Field::Languages, Field::FeeRange],
      WizardStep::ContactAndReview => &[Field::Location, Field::Email, Field::Phone],
    }
  }
}

impl fmt::Display for WizardStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Step {} of {}: {}", self.number(), Self::COUNT, self.title())
  }
}
