use async_trait::async_trait;
use serde::Serialize;

use crate::domain::SubmissionId;
use crate::onboarding::Application;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("encode error: {0}")]
  Encode(String),

  #[error("submission rejected: {0}")]
  Rejected(String),
}

/// Acuse de recibo del destino de envío.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
  pub id: SubmissionId,
}

/// Port del sistema externo que procesa una solicitud de alta completa.
///
/// Es el único límite asíncrono del núcleo. Se llama una vez por envío, sin
/// reintentos: si falla, el usuario vuelve a enviar.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
  async fn submit(&self, application: &Application) -> Result<SubmissionReceipt, SinkError>;
}
