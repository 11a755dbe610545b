use serde::{Deserialize, Serialize};

/// Id tal y como aparece en los ficheros de datos: número o texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
  Number(u64),
  Text(String),
}

/// Fila cruda del catálogo. Cualquier campo puede faltar o ser `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistRow {
  pub id: Option<RawId>,
  pub name: Option<String>,
  pub category: Option<String>,
  pub location: Option<String>,
  pub price_range: Option<String>,
  pub bio: Option<String>,
  pub rating: Option<f32>,
  pub reviews: Option<u32>,
  pub languages: Option<Vec<String>>,
  pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRow {
  pub id: RawId,
  pub name: String,
  pub category: String,
  pub location: String,
  pub fee_range: String,
  pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
  pub id: RawId,
  pub event_name: String,
  pub artist_name: String,
  pub event_date: String,
  pub budget: String,
  pub status: String,
}
