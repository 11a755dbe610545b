use crate::domain::{ArtistId, Category, PriceRange, Rating};
use serde::{Deserialize, Serialize};

/// Ciudades que ofrece el filtro de ubicación del catálogo.
pub const CATALOG_LOCATIONS: [&str; 11] = [
  "Dehradun, Uttarakhand",
  "Mumbai, Maharashtra",
  "Delhi, NCR",
  "Bangalore, Karnataka",
  "Chennai, Tamil Nadu",
  "Kolkata, West Bengal",
  "Hyderabad, Telangana",
  "Pune, Maharashtra",
  "Ahmedabad, Gujarat",
  "Jaipur, Rajasthan",
  "Kochi, Kerala",
];

/// Una entrada del catálogo: un artista que se puede contratar.
///
/// Los registros son datos semilla inmutables. Los valores por defecto de
/// campos ausentes ya se aplicaron al ingerirlos, así que aquí ningún campo
/// es opcional salvo la imagen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
  pub id: ArtistId,
  pub name: String,
  pub category: Category,
  pub location: String,
  pub price_range: PriceRange,
  pub bio: String,
  pub rating: Rating,
  pub reviews: u32,
  pub languages: Vec<String>,
  /// Referencia a la imagen de perfil (ruta o URL), sin interpretar.
  pub image: Option<String>,
}

impl ArtistRecord {
  /// `needle` debe venir ya en minúsculas; vacío coincide siempre.
  pub(crate) fn matches_search(&self, needle: &str) -> bool {
    needle.is_empty() || self.name.to_lowercase().contains(needle) || self.bio.to_lowercase().contains(needle)
  }

  /// Primeros `limit` idiomas y cuántos quedan fuera ("+N more").
  pub fn language_preview(&self, limit: usize) -> (&[String], usize) {
    let shown = self.languages.len().min(limit);
    (&self.languages[..shown], self.languages.len() - shown)
  }
}
