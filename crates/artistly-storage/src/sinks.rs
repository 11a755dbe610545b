use std::path::PathBuf;

use artistly_core::domain::SubmissionId;
use artistly_core::onboarding::{Application, OnboardingForm};
use artistly_core::ports::{SinkError, SubmissionReceipt, SubmissionSink};
use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::config::{SinkKind, StorageConfig};

/// Metadatos de la imagen adjunta; los bytes no se vuelcan.
#[derive(Debug, Serialize)]
struct ImageMeta<'a> {
  file_name: &'a str,
  content_type: Option<&'a str>,
  size_bytes: usize,
}

#[derive(Debug, Serialize)]
struct ApplicationRecord<'a> {
  id: SubmissionId,
  form: &'a OnboardingForm,
  image: Option<ImageMeta<'a>>,
}

impl<'a> ApplicationRecord<'a> {
  fn new(id: SubmissionId, application: &'a Application) -> Self {
    let image = application.image().map(|img| ImageMeta {
      file_name: &img.file_name,
      content_type: img.content_type.as_deref(),
      size_bytes: img.size_bytes(),
    });
    Self { id, form: application.form(), image }
  }
}

/// Destino de pruebas: registra el payload y siempre acepta.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmissionSink;

#[async_trait]
impl SubmissionSink for LoggingSubmissionSink {
  async fn submit(&self, application: &Application) -> Result<SubmissionReceipt, SinkError> {
    let id = SubmissionId::new();
    let record = ApplicationRecord::new(id, application);
    let payload = serde_json::to_string(&record).map_err(|e| SinkError::Encode(e.to_string()))?;
    info!(%id, %payload, "form submitted");
    Ok(SubmissionReceipt { id })
  }
}

/// Añade cada solicitud como una línea JSON al final de `path`.
#[derive(Debug, Clone)]
pub struct JsonlSubmissionSink {
  path: PathBuf,
}

impl JsonlSubmissionSink {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

#[async_trait]
impl SubmissionSink for JsonlSubmissionSink {
  async fn submit(&self, application: &Application) -> Result<SubmissionReceipt, SinkError> {
    let id = SubmissionId::new();
    let mut line = serde_json::to_string(&ApplicationRecord::new(id, application))
      .map_err(|e| SinkError::Encode(e.to_string()))?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new().create(true).append(true).open(&self.path).await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;

    info!(%id, path = %self.path.display(), "application appended");
    Ok(SubmissionReceipt { id })
  }
}

/// Destino elegido por `[storage].sink`.
#[derive(Debug, Clone)]
pub enum ConfiguredSink {
  Log(LoggingSubmissionSink),
  Jsonl(JsonlSubmissionSink),
}

impl ConfiguredSink {
  pub fn from_config(cfg: &StorageConfig) -> Self {
    match cfg.sink {
      SinkKind::Log => ConfiguredSink::Log(LoggingSubmissionSink),
      SinkKind::Jsonl => ConfiguredSink::Jsonl(JsonlSubmissionSink::new(cfg.submissions_log.clone())),
    }
  }
}

#[async_trait]
impl SubmissionSink for ConfiguredSink {
  async fn submit(&self, application: &Application) -> Result<SubmissionReceipt, SinkError> {
    match self {
      ConfiguredSink::Log(sink) => sink.submit(application).await,
      ConfiguredSink::Jsonl(sink) => sink.submit(application).await,
    }
  }
}
