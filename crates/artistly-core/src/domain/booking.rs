use crate::domain::BookingId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
  Pending,
  Confirmed,
  Declined,
}

/// Petición de contratación enviada por un organizador de eventos.
///
/// Fecha y presupuesto se muestran tal cual llegan; no se interpretan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
  pub id: BookingId,
  pub event_name: String,
  pub artist_name: String,
  pub event_date: String,
  pub budget: String,
  pub status: BookingStatus,
}
