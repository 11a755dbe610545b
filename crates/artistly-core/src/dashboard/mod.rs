use crate::domain::Facet;
use crate::domain::booking::{BookingRequest, BookingStatus};
use crate::domain::submission::{ArtistSubmission, SubmissionStatus};
use serde::Serialize;

/// Búsqueda y filtro de estado de la tabla de solicitudes del panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
  pub search_term: String,
  pub status: Facet<SubmissionStatus>,
}

impl SubmissionFilter {
  /// Subcadena sin distinguir mayúsculas sobre nombre o categoría.
  fn accepts(&self, needle: &str, submission: &ArtistSubmission) -> bool {
    let matches_search = needle.is_empty()
      || submission.name.to_lowercase().contains(needle)
      || submission.category.as_str().to_lowercase().contains(needle);

    matches_search && self.status.matches(&submission.status)
  }
}

pub fn filter_submissions<'a>(
  submissions: &'a [ArtistSubmission],
  filter: &SubmissionFilter,
) -> Vec<&'a ArtistSubmission> {
  let needle = filter.search_term.to_lowercase();
  submissions.iter().filter(|s| filter.accepts(&needle, s)).collect()
}

/// Tarjetas de resumen del panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
  pub total_artists: usize,
  pub active_bookings: usize,
  pub pending_reviews: usize,
}

impl DashboardStats {
  /// `active_bookings` cuenta solo las confirmadas.
  pub fn compute(total_artists: usize, submissions: &[ArtistSubmission], bookings: &[BookingRequest]) -> Self {
    Self {
      total_artists,
      active_bookings: bookings.iter().filter(|b| b.status == BookingStatus::Confirmed).count(),
      pending_reviews: submissions.iter().filter(|s| s.status == SubmissionStatus::Pending).count(),
    }
  }
}
