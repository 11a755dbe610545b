use crate::dashboard::{DashboardStats, SubmissionFilter, filter_submissions};
use crate::domain::SubmissionId;
use crate::domain::booking::BookingRequest;
use crate::domain::submission::ArtistSubmission;
use crate::errors::CoreError;
use crate::ports::{BookingRepository, RepoError, SubmissionRepository};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
  Approve,
  Reject,
}

/// Panel del gestor: revisión de solicitudes y peticiones de contratación.
pub struct DashboardService<R, B>
where
  R: SubmissionRepository,
  B: BookingRepository,
{
  submissions: R,
  bookings: B,
}

fn repo_error(e: RepoError) -> CoreError {
  match e {
    RepoError::NotFound => CoreError::NotFound,
    RepoError::Storage(msg) => CoreError::Repository(msg),
  }
}

impl<R, B> DashboardService<R, B>
where
  R: SubmissionRepository,
  B: BookingRepository,
{
  pub fn new(submissions: R, bookings: B) -> Self {
    Self { submissions, bookings }
  }

  // -------- QUERY (read) --------

  pub fn submissions(&self, filter: &SubmissionFilter) -> Result<Vec<ArtistSubmission>, CoreError> {
    let all = self.submissions.list_submissions().map_err(repo_error)?;
    Ok(filter_submissions(&all, filter).into_iter().cloned().collect())
  }

  pub fn bookings(&self) -> Result<Vec<BookingRequest>, CoreError> {
    self.bookings.list_bookings().map_err(repo_error)
  }

  pub fn stats(&self, total_artists: usize) -> Result<DashboardStats, CoreError> {
    let submissions = self.submissions.list_submissions().map_err(repo_error)?;
    let bookings = self.bookings()?;
    Ok(DashboardStats::compute(total_artists, &submissions, &bookings))
  }

  // -------- COMMAND (write) --------

  /// Aprueba o rechaza una solicitud pendiente y persiste el nuevo estado.
  pub fn review(&self, id: SubmissionId, decision: ReviewDecision) -> Result<ArtistSubmission, CoreError> {
    let mut submission = self.submissions.find_submission(id).map_err(repo_error)?.ok_or(CoreError::NotFound)?;

    match decision {
      ReviewDecision::Approve => submission.approve()?,
      ReviewDecision::Reject => submission.reject()?,
    }

    self.submissions.save_submission(&submission).map_err(repo_error)?;
    info!(%id, status = %submission.status, "submission reviewed");
    Ok(submission)
  }
}
