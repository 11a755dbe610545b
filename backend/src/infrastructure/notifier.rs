use artistly_core::ports::{Notification, Notifier, Severity};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// `Notifier` de la aplicación: registra cada aviso y lo guarda hasta que la
/// capa de presentación lo recoge con [`ToastNotifier::drain`].
///
/// Es `Clone`; todas las copias comparten la misma cola.
#[derive(Debug, Clone, Default)]
pub struct ToastNotifier {
  pending: Arc<Mutex<Vec<Notification>>>,
}

impl ToastNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn drain(&self) -> Vec<Notification> {
    let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
    std::mem::take(&mut *pending)
  }
}

impl Notifier for ToastNotifier {
  fn notify(&self, notification: Notification) {
    match notification.severity {
      Severity::Success => info!(title = %notification.title, "{}", notification.description),
      Severity::Destructive => warn!(title = %notification.title, "{}", notification.description),
    }

    // Un lock envenenado no debe tirar el aviso.
    let mut pending = self.pending.lock().unwrap_or_else(|p| p.into_inner());
    pending.push(notification);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clones_share_the_queue_and_drain_empties_it() {
    let notifier = ToastNotifier::new();
    let handle = notifier.clone();

    handle.notify(Notification::success("Saved", "ok"));
    handle.notify(Notification::destructive("Error", "nope"));

    let drained = notifier.drain();
    assert_eq!(drained.len(), 2);
    assert_eq!(drained[1].severity, Severity::Destructive);
    assert!(notifier.drain().is_empty());
  }
}
