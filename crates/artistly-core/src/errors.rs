// crates/artistly-core/src/errors.rs
use thiserror::Error;

use crate::domain::submission::ReviewError;
use crate::onboarding::ValidationErrors;
use crate::ports::SinkError;

/// Error genérico del núcleo de Artistly.
///
/// Las capas superiores (CLI, comandos) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),

  #[error(transparent)]
  Review(#[from] ReviewError),

  #[error("not found")]
  NotFound,
}

/// Resultado fallido de enviar el asistente de alta.
///
/// Ninguna variante es fatal: el estado del asistente se conserva para que
/// el usuario corrija o reintente.
#[derive(Debug, Error)]
pub enum SubmitError {
  #[error("application can only be submitted from the final step")]
  NotOnFinalStep,

  #[error(transparent)]
  Invalid(#[from] ValidationErrors),

  #[error("submission failed: {0}")]
  Transport(#[from] SinkError),
}
