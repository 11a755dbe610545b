use crate::domain::{Category, FeeRange, SubmissionId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Estado de revisión de una solicitud de alta en el panel del gestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
  Pending,
  Approved,
  Rejected,
}

impl SubmissionStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      SubmissionStatus::Pending => "pending",
      SubmissionStatus::Approved => "approved",
      SubmissionStatus::Rejected => "rejected",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid submission status: {input}")]
pub struct SubmissionStatusParseError {
  pub input: String,
}

impl FromStr for SubmissionStatus {
  type Err = SubmissionStatusParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "pending" => Ok(SubmissionStatus::Pending),
      "approved" => Ok(SubmissionStatus::Approved),
      "rejected" => Ok(SubmissionStatus::Rejected),
      _ => Err(SubmissionStatusParseError { input: s.to_string() }),
    }
  }
}

impl fmt::Display for SubmissionStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
  #[error("submission {id} is already {status}")]
  NotPending { id: SubmissionId, status: SubmissionStatus },
}

/// Solicitud de alta tal y como la ve el gestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSubmission {
  pub id: SubmissionId,
  pub name: String,
  pub category: Category,
  pub location: String,
  pub fee_range: FeeRange,
  pub status: SubmissionStatus,
}

impl ArtistSubmission {
  pub fn approve(&mut self) -> Result<(), ReviewError> {
    self.decide(SubmissionStatus::Approved)
  }

  pub fn reject(&mut self) -> Result<(), ReviewError> {
    self.decide(SubmissionStatus::Rejected)
  }

  // Solo las pendientes admiten decisión.
  fn decide(&mut self, outcome: SubmissionStatus) -> Result<(), ReviewError> {
    if self.status != SubmissionStatus::Pending {
      return Err(ReviewError::NotPending { id: self.id, status: self.status });
    }
    self.status = outcome;
    Ok(())
  }
}
