use std::path::{Path, PathBuf};
use std::sync::Mutex;

use artistly_config::atomic_write_str;
use artistly_core::domain::booking::{BookingRequest, BookingStatus};
use artistly_core::domain::submission::{ArtistSubmission, SubmissionStatus};
use artistly_core::domain::{BookingId, Category, FeeRange, SubmissionId};
use artistly_core::ports::{BookingRepository, RepoError, SubmissionRepository};
use tracing::warn;

use crate::ids;
use crate::models::{BookingRow, RawId, SubmissionRow};
use crate::seed;

fn storage_err(e: impl std::fmt::Display) -> RepoError {
  RepoError::Storage(e.to_string())
}

fn row_to_submission(index: usize, row: SubmissionRow) -> Option<ArtistSubmission> {
  let fee_range =
    row.fee_range.parse::<FeeRange>().map_err(|e| warn!(row = index, error = %e, "skipping submission")).ok()?;
  let status =
    row.status.parse::<SubmissionStatus>().map_err(|e| warn!(row = index, error = %e, "skipping submission")).ok()?;

  Some(ArtistSubmission {
    id: SubmissionId::from_uuid(ids::resolve("submission", Some(&row.id), index)),
    name: row.name,
    category: Category::from(row.category),
    location: row.location,
    fee_range,
    status,
  })
}

fn submission_to_row(s: &ArtistSubmission) -> SubmissionRow {
  SubmissionRow {
    id: RawId::Text(s.id.to_string()),
    name: s.name.clone(),
    category: s.category.to_string(),
    location: s.location.clone(),
    fee_range: s.fee_range.to_string(),
    status: s.status.to_string(),
  }
}

/// Filas válidas y filas que no se pudieron interpretar (se conservan tal cual).
fn parse_submissions(raw: &str) -> (Vec<ArtistSubmission>, Vec<SubmissionRow>) {
  let rows = match serde_json::from_str::<Vec<SubmissionRow>>(raw) {
    Ok(rows) => rows,
    Err(e) => {
      warn!(error = %e, "malformed submissions data");
      return (Vec::new(), Vec::new());
    }
  };

  let mut parsed = Vec::with_capacity(rows.len());
  let mut skipped = Vec::new();
  for (index, row) in rows.into_iter().enumerate() {
    match row_to_submission(index, row.clone()) {
      Some(submission) => parsed.push(submission),
      None => skipped.push(row),
    }
  }
  (parsed, skipped)
}

/// Solicitudes del panel del gestor.
///
/// Con `path`, cada decisión se reescribe atómicamente en ese fichero JSON y
/// persiste entre ejecuciones; sin él vive solo en memoria. Las filas ilegibles
/// del fichero no se muestran, pero se vuelven a escribir sin cambios.
pub struct SubmissionStore {
  rows: Mutex<Vec<ArtistSubmission>>,
  skipped: Vec<SubmissionRow>,
  path: Option<PathBuf>,
}

impl SubmissionStore {
  pub fn in_memory(rows: Vec<ArtistSubmission>) -> Self {
    Self { rows: Mutex::new(rows), skipped: Vec::new(), path: None }
  }

  pub fn seeded() -> Self {
    let (rows, _) = parse_submissions(seed::SUBMISSIONS_JSON);
    Self::in_memory(rows)
  }

  /// Abre el fichero de revisiones; si aún no existe se parte de la semilla.
  pub fn open(path: &Path) -> Result<Self, RepoError> {
    let (rows, skipped) = match std::fs::read_to_string(path) {
      Ok(raw) => parse_submissions(&raw),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => parse_submissions(seed::SUBMISSIONS_JSON),
      Err(e) => return Err(storage_err(e)),
    };
    Ok(Self { rows: Mutex::new(rows), skipped, path: Some(path.to_path_buf()) })
  }

  fn persist(&self, rows: &[ArtistSubmission]) -> Result<(), RepoError> {
    let Some(path) = &self.path else {
      return Ok(());
    };
    let all: Vec<SubmissionRow> = rows.iter().map(submission_to_row).chain(self.skipped.iter().cloned()).collect();
    let serialized = serde_json::to_string_pretty(&all).map_err(storage_err)?;
    atomic_write_str(path, &serialized).map_err(storage_err)
  }
}

impl SubmissionRepository for SubmissionStore {
  fn list_submissions(&self) -> Result<Vec<ArtistSubmission>, RepoError> {
    let rows = self.rows.lock().map_err(|_| RepoError::Storage("submission store poisoned".into()))?;
    Ok(rows.clone())
  }

  fn find_submission(&self, id: SubmissionId) -> Result<Option<ArtistSubmission>, RepoError> {
    let rows = self.rows.lock().map_err(|_| RepoError::Storage("submission store poisoned".into()))?;
    Ok(rows.iter().find(|s| s.id == id).cloned())
  }

  fn save_submission(&self, submission: &ArtistSubmission) -> Result<(), RepoError> {
    let mut rows = self.rows.lock().map_err(|_| RepoError::Storage("submission store poisoned".into()))?;

    // Se escribe una copia; la memoria solo cambia si el disco lo aceptó.
    let mut updated = rows.clone();
    match updated.iter_mut().find(|s| s.id == submission.id) {
      Some(row) => *row = submission.clone(),
      None => updated.push(submission.clone()),
    }
    self.persist(&updated)?;
    *rows = updated;
    Ok(())
  }
}

/// Peticiones de contratación; de solo lectura.
pub struct BookingStore {
  rows: Vec<BookingRequest>,
}

impl BookingStore {
  pub fn new(rows: Vec<BookingRequest>) -> Self {
    Self { rows }
  }

  pub fn seeded() -> Self {
    let rows = match serde_json::from_str::<Vec<BookingRow>>(seed::BOOKINGS_JSON) {
      Ok(rows) => rows.into_iter().enumerate().filter_map(|(i, row)| row_to_booking(i, row)).collect(),
      Err(e) => {
        warn!(error = %e, "malformed bookings data");
        Vec::new()
      }
    };
    Self { rows }
  }
}

fn row_to_booking(index: usize, row: BookingRow) -> Option<BookingRequest> {
  let status = match row.status.trim().to_lowercase().as_str() {
    "pending" => BookingStatus::Pending,
    "confirmed" => BookingStatus::Confirmed,
    "declined" => BookingStatus::Declined,
    other => {
      warn!(row = index, status = other, "skipping booking with unknown status");
      return None;
    }
  };

  Some(BookingRequest {
    id: BookingId::from_uuid(ids::resolve("booking", Some(&row.id), index)),
    event_name: row.event_name,
    artist_name: row.artist_name,
    event_date: row.event_date,
    budget: row.budget,
    status,
  })
}

impl BookingRepository for BookingStore {
  fn list_bookings(&self) -> Result<Vec<BookingRequest>, RepoError> {
    Ok(self.rows.clone())
  }
}
