use crate::errors::SubmitError;
use crate::onboarding::{
  Application, OnboardingForm, ProfileImage, ValidationErrors, WizardStep, validate, validate_fields,
};
use tracing::debug;

/// Estado del asistente de alta de artistas: formulario, paso actual,
/// imagen adjunta y últimos errores de validación.
///
/// Por defecto la navegación no está condicionada: se puede llegar al último
/// paso con campos inválidos y el esquema solo se aplica al enviar. Con
/// [`OnboardingWizard::with_step_gating`] `next` exige que los campos del paso
/// actual sean válidos.
#[derive(Debug, Default)]
pub struct OnboardingWizard {
  form: OnboardingForm,
  step: WizardStep,
  image: Option<ProfileImage>,
  errors: ValidationErrors,
  gate_steps: bool,
}

impl OnboardingWizard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_step_gating(gate_steps: bool) -> Self {
    Self { gate_steps, ..Self::default() }
  }

  pub fn step(&self) -> WizardStep {
    self.step
  }

  pub fn step_title(&self) -> &'static str {
    self.step.title()
  }

  /// `(paso actual, total)` para la barra de progreso.
  pub fn progress(&self) -> (u8, u8) {
    (self.step.number(), WizardStep::COUNT)
  }

  pub fn form(&self) -> &OnboardingForm {
    &self.form
  }

  /// Acceso para editar un campo en respuesta a la entrada del usuario.
  pub fn form_mut(&mut self) -> &mut OnboardingForm {
    &mut self.form
  }

  pub fn image(&self) -> Option<&ProfileImage> {
    self.image.as_ref()
  }

  pub fn attach_image(&mut self, image: ProfileImage) {
    debug!(file = %image.file_name, size = image.size_bytes(), "profile image attached");
    self.image = Some(image);
  }

  pub fn clear_image(&mut self) {
    self.image = None;
  }

  /// Errores del último intento de envío (o de avance, con gating activo).
  pub fn errors(&self) -> &ValidationErrors {
    &self.errors
  }

  /// Avanza un paso; en el último no hace nada.
  ///
  /// Con gating activo, si los campos del paso actual no son válidos se queda
  /// en el mismo paso y devuelve esos errores.
  pub fn next(&mut self) -> Result<WizardStep, ValidationErrors> {
    if self.gate_steps {
      let errors = validate_fields(&self.form, self.step.fields());
      if !errors.is_empty() {
        self.errors = errors.clone();
        return Err(errors);
      }
      self.errors = ValidationErrors::default();
    }

    self.step = self.step.next();
    Ok(self.step)
  }

  /// Retrocede un paso; en el primero no hace nada.
  pub fn previous(&mut self) -> WizardStep {
    self.step = self.step.previous();
    self.step
  }

  /// Aplica el esquema completo y, si pasa, construye la solicitud.
  ///
  /// Si falla, los errores quedan guardados y el formulario intacto.
  pub fn prepare_submission(&mut self) -> Result<Application, SubmitError> {
    if !self.step.is_last() {
      return Err(SubmitError::NotOnFinalStep);
    }

    if let Err(errors) = validate(&self.form) {
      debug!(fields = ?errors.fields(), "submission rejected by validation");
      self.errors = errors.clone();
      return Err(SubmitError::Invalid(errors));
    }

    self.errors = ValidationErrors::default();
    Ok(Application::new(self.form.clone(), self.image.clone()))
  }

  /// Vuelve al estado inicial: formulario vacío, sin imagen, paso 1.
  /// Se conserva la política de gating.
  pub fn reset(&mut self) {
    *self = Self::with_step_gating(self.gate_steps);
  }
}
