use crate::domain::ArtistRecord;

/// Port de origen del catálogo: una secuencia ordenada y de solo lectura.
///
/// El adapter ya aplicó los valores por defecto de campos ausentes; el dominio
/// nunca ve registros "nulos".
pub trait CatalogSource {
  fn artists(&self) -> &[ArtistRecord];
}

impl CatalogSource for Vec<ArtistRecord> {
  fn artists(&self) -> &[ArtistRecord] {
    self
  }
}
