use crate::errors::SubmitError;
use crate::onboarding::OnboardingWizard;
use crate::ports::{Notification, Notifier, SubmissionReceipt, SubmissionSink};
use tracing::{info, warn};

const SUBMITTED_TITLE: &str = "Application Submitted!";
const SUBMITTED_DESCRIPTION: &str = "We'll review your application and get back to you within 24 hours.";
const FAILED_TITLE: &str = "Error";
const FAILED_DESCRIPTION: &str = "Something went wrong. Please try again.";

/// Envío del asistente de alta al sistema externo.
pub struct OnboardingService<S, N>
where
  S: SubmissionSink,
  N: Notifier,
{
  sink: S,
  notifier: N,
}

impl<S, N> OnboardingService<S, N>
where
  S: SubmissionSink,
  N: Notifier,
{
  pub fn new(sink: S, notifier: N) -> Self {
    Self { sink, notifier }
  }

  /// Envía la solicitud del asistente:
  /// - errores de validación: quedan en el asistente, sin aviso ni envío
  /// - fallo del destino: aviso destructivo, formulario intacto para reintentar
  /// - éxito: aviso de confirmación y el asistente vuelve al paso 1 vacío
  pub async fn submit(&self, wizard: &mut OnboardingWizard) -> Result<SubmissionReceipt, SubmitError> {
    let application = wizard.prepare_submission()?;

    match self.sink.submit(&application).await {
      Ok(receipt) => {
        info!(id = %receipt.id, name = %application.form().name, "application submitted");
        self.notifier.notify(Notification::success(SUBMITTED_TITLE, SUBMITTED_DESCRIPTION));
        wizard.reset();
        Ok(receipt)
      }
      Err(e) => {
        warn!(error = %e, "application submission failed");
        self.notifier.notify(Notification::destructive(FAILED_TITLE, FAILED_DESCRIPTION));
        Err(SubmitError::Transport(e))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::SubmissionId;
  use crate::onboarding::validation::tests::valid_form;
  use crate::onboarding::{Application, WizardStep};
  use crate::ports::{Severity, SinkError};
  use async_trait::async_trait;
  use std::sync::{Arc, Mutex};

  #[derive(Default)]
  struct RecordingSink {
    fail: bool,
    received: Mutex<Vec<Application>>,
  }

  #[async_trait]
  impl SubmissionSink for RecordingSink {
    async fn submit(&self, application: &Application) -> Result<SubmissionReceipt, SinkError> {
      if self.fail {
        return Err(SinkError::Rejected("offline".into()));
      }
      self.received.lock().unwrap().push(application.clone());
      Ok(SubmissionReceipt { id: SubmissionId::derived("receipt") })
    }
  }

  #[derive(Clone, Default)]
  struct RecordingNotifier(Arc<Mutex<Vec<Notification>>>);

  impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
      self.0.lock().unwrap().push(notification);
    }
  }

  fn wizard_at_review(form: crate::onboarding::OnboardingForm) -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    *wizard.form_mut() = form;
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard
  }

  #[tokio::test]
  async fn successful_submission_notifies_and_resets() {
    let notifier = RecordingNotifier::default();
    let service = OnboardingService::new(RecordingSink::default(), notifier.clone());
    let mut wizard = wizard_at_review(valid_form());

    let receipt = service.submit(&mut wizard).await.unwrap();

    assert_eq!(receipt.id, SubmissionId::derived("receipt"));
    assert_eq!(service.sink.received.lock().unwrap()[0].form(), &valid_form());
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(wizard.form(), &crate::onboarding::OnboardingForm::default());

    let sent = notifier.0.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Application Submitted!");
    assert_eq!(sent[0].severity, Severity::Success);
  }

  #[tokio::test]
  async fn invalid_form_is_not_sent_nor_notified() {
    let notifier = RecordingNotifier::default();
    let service = OnboardingService::new(RecordingSink::default(), notifier.clone());
    let mut form = valid_form();
    form.bio = "short".into();
    let mut wizard = wizard_at_review(form.clone());

    let err = service.submit(&mut wizard).await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(service.sink.received.lock().unwrap().is_empty());
    assert!(notifier.0.lock().unwrap().is_empty());
    assert_eq!(wizard.step(), WizardStep::ContactAndReview);
    assert_eq!(wizard.form(), &form);
  }

  #[tokio::test]
  async fn transport_failure_preserves_form_for_retry() {
    let notifier = RecordingNotifier::default();
    let service = OnboardingService::new(RecordingSink { fail: true, ..Default::default() }, notifier.clone());
    let mut wizard = wizard_at_review(valid_form());

    let err = service.submit(&mut wizard).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(SinkError::Rejected(_))));
    assert_eq!(wizard.form(), &valid_form());
    assert_eq!(wizard.step(), WizardStep::ContactAndReview);

    let sent = notifier.0.lock().unwrap();
    assert_eq!(sent.as_slice(), [Notification::destructive("Error", "Something went wrong. Please try again.")]);
  }

  #[test]
  fn submit_future_can_be_driven_by_any_executor() {
    let service = OnboardingService::new(RecordingSink::default(), RecordingNotifier::default());
    let mut wizard = wizard_at_review(valid_form());

    let result = futures::executor::block_on(service.submit(&mut wizard));

    assert!(result.is_ok());
  }
}
