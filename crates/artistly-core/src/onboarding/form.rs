use crate::domain::{Category, FeeRange, Language, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Datos que recoge el asistente de alta, campo a campo.
///
/// No valida nada por sí mismo; el esquema vive en [`validation`](super::validation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
  pub name: String,
  pub bio: String,
  pub categories: Selection<Category>,
  pub languages: Selection<Language>,
  pub fee_range: Option<FeeRange>,
  pub location: String,
  pub email: String,
  pub phone: String,
}

impl OnboardingForm {
  pub fn review(&self) -> ReviewSummary<'_> {
    ReviewSummary { form: self }
  }
}

/// Imagen de perfil adjunta. Es una referencia binaria opaca: no se inspecciona.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfileImage {
  pub file_name: String,
  pub content_type: Option<String>,
  pub bytes: Vec<u8>,
}

impl ProfileImage {
  pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
    Self { file_name: file_name.into(), content_type: None, bytes }
  }

  pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
    self.content_type = Some(content_type.into());
    self
  }

  pub fn size_bytes(&self) -> usize {
    self.bytes.len()
  }
}

// Sin volcar los bytes: el payload se registra en logs.
impl fmt::Debug for ProfileImage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProfileImage")
      .field("file_name", &self.file_name)
      .field("content_type", &self.content_type)
      .field("size_bytes", &self.bytes.len())
      .finish()
  }
}

/// Solicitud completa lista para el destino de envío.
///
/// Solo se construye tras pasar el esquema completo, así que un `Application`
/// siempre es válido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
  form: OnboardingForm,
  image: Option<ProfileImage>,
}

impl Application {
  pub(crate) fn new(form: OnboardingForm, image: Option<ProfileImage>) -> Self {
    Self { form, image }
  }

  pub fn form(&self) -> &OnboardingForm {
    &self.form
  }

  pub fn image(&self) -> Option<&ProfileImage> {
    self.image.as_ref()
  }
}

/// Bloque "Review Your Information" del último paso.
pub struct ReviewSummary<'a> {
  form: &'a OnboardingForm,
}

impl ReviewSummary<'_> {
  /// Pares (etiqueta, valor) con los textos de relleno de la pantalla de revisión.
  pub fn lines(&self) -> Vec<(&'static str, String)> {
    let form = self.form;
    vec![
      ("Name", or_placeholder(form.name.clone(), "Not provided")),
      ("Categories", or_placeholder(form.categories.joined(", "), "None selected")),
      ("Languages", or_placeholder(form.languages.joined(", "), "None selected")),
      ("Fee Range", form.fee_range.map_or_else(|| "Not selected".to_string(), |f| f.to_string())),
      ("Location", or_placeholder(form.location.clone(), "Not provided")),
    ]
  }
}

fn or_placeholder(value: String, placeholder: &str) -> String {
  if value.is_empty() { placeholder.to_string() } else { value }
}

impl fmt::Display for ReviewSummary<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (label, value) in self.lines() {
      writeln!(f, "{label}: {value}")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_form_review_uses_placeholders() {
    let form = OnboardingForm::default();

    assert_eq!(
      form.review().to_string(),
      "Name: Not provided\nCategories: None selected\nLanguages: None selected\nFee Range: Not selected\nLocation: Not provided\n"
    );
  }

  #[test]
  fn review_lists_selected_values() {
    let mut form = OnboardingForm { name: "Asha".into(), ..Default::default() };
    form.categories.insert(Category::Dancer);
    form.categories.insert(Category::Singer);
    form.fee_range = Some(FeeRange::OneToTwoLakh);

    let lines = form.review().lines();

    assert_eq!(lines[0], ("Name", "Asha".to_string()));
    assert_eq!(lines[1], ("Categories", "Singer, Dancer".to_string()));
    assert_eq!(lines[3], ("Fee Range", "₹100000-200000".to_string()));
  }

  #[test]
  fn image_debug_hides_bytes() {
    let image = ProfileImage::new("me.png", vec![0; 2048]).with_content_type("image/png");

    let dbg = format!("{image:?}");

    assert!(dbg.contains("size_bytes: 2048"));
    assert!(!dbg.contains("0, 0"));
  }
}
