use crate::domain::SubmissionId;
use crate::domain::booking::BookingRequest;
use crate::domain::submission::ArtistSubmission;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
}

/// Solicitudes recibidas que revisa el gestor.
pub trait SubmissionRepository {
  fn list_submissions(&self) -> Result<Vec<ArtistSubmission>, RepoError>;
  fn find_submission(&self, id: SubmissionId) -> Result<Option<ArtistSubmission>, RepoError>;
  fn save_submission(&self, submission: &ArtistSubmission) -> Result<(), RepoError>;
}

pub trait BookingRepository {
  fn list_bookings(&self) -> Result<Vec<BookingRequest>, RepoError>;
}
