use crate::onboarding::OnboardingForm;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Campos del esquema de alta, en el orden en que se informan los errores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
  Name,
  Bio,
  Categories,
  Languages,
  FeeRange,
  Location,
  Email,
  Phone,
}

impl Field {
  pub const ALL: [Field; 8] = [
    Field::Name,
    Field::Bio,
    Field::Categories,
    Field::Languages,
    Field::FeeRange,
    Field::Location,
    Field::Email,
    Field::Phone,
  ];

  pub fn key(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Bio => "bio",
      Field::Categories => "categories",
      Field::Languages => "languages",
      Field::FeeRange => "fee_range",
      Field::Location => "location",
      Field::Email => "email",
      Field::Phone => "phone",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: Field,
  pub message: &'static str,
}

/// Errores por campo de un intento de envío. Ninguno es fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
    self.0.iter()
  }

  /// Mensaje a mostrar junto al campo, si lo tiene.
  pub fn message_for(&self, field: Field) -> Option<&'static str> {
    self.0.iter().find(|e| e.field == field).map(|e| e.message)
  }

  pub fn fields(&self) -> Vec<Field> {
    self.0.iter().map(|e| e.field).collect()
  }

  fn into_result(self) -> Result<(), Self> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

// Sin look-around en `regex`: el punto inicial y los puntos dobles se
// comprueban aparte en `is_valid_email`.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-z0-9_'+.-]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
    .expect("email pattern is valid")
});

fn is_valid_email(email: &str) -> bool {
  !email.starts_with('.') && !email.contains("..") && EMAIL_SHAPE.is_match(email)
}

// Longitud en caracteres Unicode, sin recortar espacios.
fn min_chars(value: &str, min: usize) -> bool {
  value.chars().count() >= min
}

fn check(field: Field, form: &OnboardingForm) -> Option<&'static str> {
  let ok = match field {
    Field::Name => min_chars(&form.name, 2),
    Field::Bio => min_chars(&form.bio, 50),
    Field::Categories => !form.categories.is_empty(),
    Field::Languages => !form.languages.is_empty(),
    Field::FeeRange => form.fee_range.is_some(),
    Field::Location => min_chars(&form.location, 2),
    Field::Email => is_valid_email(&form.email),
    Field::Phone => min_chars(&form.phone, 10),
  };

  (!ok).then(|| message(field))
}

fn message(field: Field) -> &'static str {
  match field {
    Field::Name => "Name must be at least 2 characters",
    Field::Bio => "Bio must be at least 50 characters",
    Field::Categories => "Please select at least one category",
    Field::Languages => "Please select at least one language",
    Field::FeeRange => "Please select a fee range",
    Field::Location => "Location is required",
    Field::Email => "Please enter a valid email",
    Field::Phone => "Please enter a valid phone number",
  }
}

/// Comprueba solo `fields`, en el orden del esquema.
pub fn validate_fields(form: &OnboardingForm, fields: &[Field]) -> ValidationErrors {
  let errors = Field::ALL
    .into_iter()
    .filter(|f| fields.contains(f))
    .filter_map(|field| check(field, form).map(|message| FieldError { field, message }))
    .collect();
  ValidationErrors(errors)
}

/// Esquema completo de envío: informa todos los campos que fallan.
pub fn validate(form: &OnboardingForm) -> Result<(), ValidationErrors> {
  validate_fields(form, &Field::ALL).into_result()
}
