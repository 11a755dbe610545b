use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Success,
  Destructive,
}

/// Aviso para el usuario (el "toast" de la interfaz).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
  pub title: String,
  pub description: String,
  pub severity: Severity,
}

impl Notification {
  pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self { title: title.into(), description: description.into(), severity: Severity::Success }
  }

  pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self { title: title.into(), description: description.into(), severity: Severity::Destructive }
  }
}

// El frontend implementa esto para mostrar el aviso. Fire-and-forget.
pub trait Notifier: Send + Sync {
  fn notify(&self, notification: Notification);
}
