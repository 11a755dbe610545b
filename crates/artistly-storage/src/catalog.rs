use std::path::Path;

use artistly_core::domain::{ArtistId, ArtistRecord, Category, PriceRange, Rating};
use artistly_core::ports::CatalogSource;
use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::ids;
use crate::models::ArtistRow;
use crate::seed;

/// Catálogo en memoria, cargado una vez al arrancar.
///
/// Es el único punto donde se aplican los valores por defecto de campos
/// ausentes; un catálogo ilegible degrada a vacío con un aviso en el log.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
  artists: Vec<ArtistRecord>,
}

impl StaticCatalog {
  pub fn new(artists: Vec<ArtistRecord>) -> Self {
    Self { artists }
  }

  /// Catálogo semilla embebido.
  pub fn seeded() -> Self {
    Self::from_json(seed::ARTISTS_JSON)
  }

  pub fn from_config(cfg: &StorageConfig) -> Self {
    match &cfg.catalog_path {
      Some(path) => Self::from_path(path),
      None => Self::seeded(),
    }
  }

  pub fn from_path(path: &Path) -> Self {
    match std::fs::read_to_string(path) {
      Ok(raw) => {
        info!(path = %path.display(), "loading catalog file");
        Self::from_json(&raw)
      }
      Err(e) => {
        warn!(path = %path.display(), error = %e, "catalog file unreadable, using empty catalog");
        Self::default()
      }
    }
  }

  /// Acepta `null`, una lista con entradas `null` o filas incompletas.
  ///
  /// Solo un documento que no es una lista deja el catálogo vacío; una fila con
  /// campos de tipo erróneo se omite y el resto se conserva.
  pub fn from_json(raw: &str) -> Self {
    let values = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(raw) {
      Ok(values) => values,
      Err(e) => {
        warn!(error = %e, "malformed catalog data, using empty catalog");
        return Self::default();
      }
    };

    let rows = values.map(|values| {
      values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
          serde_json::Value::Null => None,
          value => serde_json::from_value::<ArtistRow>(value)
            .map_err(|e| warn!(row = index, error = %e, "skipping malformed catalog row"))
            .ok(),
        })
        .collect()
    });
    Self::from_rows(rows)
  }

  pub fn from_rows(rows: Option<Vec<Option<ArtistRow>>>) -> Self {
    let artists: Vec<ArtistRecord> = rows
      .unwrap_or_default()
      .into_iter()
      .enumerate()
      .filter_map(|(index, row)| row.map(|row| row_to_artist(index, row)))
      .collect();

    Self { artists }
  }

  pub fn len(&self) -> usize {
    self.artists.len()
  }

  pub fn is_empty(&self) -> bool {
    self.artists.is_empty()
  }
}

impl CatalogSource for StaticCatalog {
  fn artists(&self) -> &[ArtistRecord] {
    &self.artists
  }
}

fn row_to_artist(index: usize, row: ArtistRow) -> ArtistRecord {
  let rating = match row.rating {
    None => Rating::ZERO,
    Some(value) => Rating::new(value).unwrap_or_else(|| {
      warn!(row = index, value, "rating out of range, using 0");
      Rating::ZERO
    }),
  };

  ArtistRecord {
    id: ArtistId::from_uuid(ids::resolve("artist", row.id.as_ref(), index)),
    name: row.name.unwrap_or_default(),
    category: Category::from(row.category.unwrap_or_default()),
    location: row.location.unwrap_or_default(),
    price_range: PriceRange::from(row.price_range.unwrap_or_default()),
    bio: row.bio.unwrap_or_default(),
    rating,
    reviews: row.reviews.unwrap_or_default(),
    languages: row.languages.unwrap_or_default(),
    image: row.image,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_core::catalog::{FilterCriteria, filter_artists};
  use artistly_core::domain::Facet;

  #[test]
  fn seed_catalog_is_complete() {
    let catalog = StaticCatalog::seeded();

    assert_eq!(catalog.len(), 15);
    assert!(catalog.artists().iter().all(|a| !a.name.is_empty() && !a.bio.is_empty()));
  }

  #[test]
  fn missing_fields_get_empty_defaults() {
    let catalog = StaticCatalog::from_json(r#"[{ "name": "Solo" }, null, { "bio": null, "rating": 9.5 }]"#);
    let artists = catalog.artists();

    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].name, "Solo");
    assert_eq!(artists[0].bio, "");
    assert_eq!(artists[0].category, Category::Custom(String::new()));
    assert_eq!(artists[0].reviews, 0);
    assert!(artists[0].languages.is_empty());
    assert_eq!(artists[1].name, "");
    assert_eq!(artists[1].rating, Rating::ZERO);
  }

  #[test]
  fn null_or_malformed_documents_degrade_to_empty() {
    assert!(StaticCatalog::from_json("null").is_empty());
    assert!(StaticCatalog::from_json(r#"{ "artists": [] }"#).is_empty());
    assert!(StaticCatalog::from_json("not json").is_empty());
  }

  #[test]
  fn mistyped_row_is_skipped_and_the_rest_kept() {
    let catalog = StaticCatalog::from_json(
      r#"[{ "name": "Arijit", "bio": "singer" }, { "name": "B", "reviews": "12" }, { "name": "C" }]"#,
    );
    let names: Vec<_> = catalog.artists().iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, ["Arijit", "C"]);
  }

  #[test]
  fn unreadable_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();

    assert!(StaticCatalog::from_path(&dir.path().join("missing.json")).is_empty());
  }

  #[test]
  fn seed_row_with_defaults_still_filters() {
    let catalog = StaticCatalog::from_json(
      r#"[{ "name": "Arijit", "bio": "singer", "category": "Singer",
            "location": "Mumbai, Maharashtra", "priceRange": "₹500000-1000000" }]"#,
    );

    let by_search = FilterCriteria::new().with_search("ari");
    assert_eq!(filter_artists(catalog.artists(), &by_search).len(), 1);

    let by_category = FilterCriteria::new().with_category(Facet::Is(Category::Dancer));
    assert!(filter_artists(catalog.artists(), &by_category).is_empty());
  }

  #[test]
  fn ids_are_stable_across_loads() {
    let first = StaticCatalog::seeded();
    let second = StaticCatalog::seeded();

    assert_eq!(first.artists()[0].id, second.artists()[0].id);
    assert_ne!(first.artists()[0].id, first.artists()[1].id);
  }
}
