use artistly_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Destino de las solicitudes de alta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
  /// Solo registra el payload en el log y siempre acepta.
  #[default]
  Log,
  /// Añade una línea JSON por solicitud a `submissions_log`.
  Jsonl,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
  /// Catálogo JSON alternativo; sin él se usa el semilla embebido.
  pub catalog_path: Option<PathBuf>,
  pub submissions_log: PathBuf,
  /// Solicitudes revisadas por el gestor (estado aprobado/rechazado).
  pub review_store: PathBuf,
  #[serde(default)]
  pub sink: SinkKind,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig {
      catalog_path: None,
      submissions_log: PATHS.data_file("submissions.jsonl"),
      review_store: PATHS.data_file("reviews.json"),
      sink: SinkKind::default(),
    }
  }
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("storage")?;
    CONFIG_BACKEND.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("storage", self)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section("storage")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_config::{ArtistlyPaths, TomlConfigBackend};

  #[test]
  fn section_decodes_with_default_sink() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = ArtistlyPaths::rooted_at(tmp.path()).unwrap();
    std::fs::write(
      paths.config_file(),
      "[storage]\nsubmissions_log = \"/tmp/a.jsonl\"\nreview_store = \"/tmp/r.json\"\n",
    )
    .unwrap();

    let cfg = StorageConfig::load_from(&TomlConfigBackend::new(paths)).unwrap();

    assert_eq!(cfg.sink, SinkKind::Log);
    assert_eq!(cfg.catalog_path, None);
    assert_eq!(cfg.submissions_log, PathBuf::from("/tmp/a.jsonl"));
  }
}
