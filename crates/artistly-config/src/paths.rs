use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable, tests).
pub const BASE_DIR_ENV: &str = "ARTISTLY_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de trabajo de Artistly.
///
/// `config_dir` guarda `artistly.toml`, `data_dir` el catálogo opcional y
/// las solicitudes recibidas, `cache_dir` queda para adaptadores futuros.
#[derive(Debug, Clone)]
pub struct ArtistlyPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: PathBuf,
}

impl ArtistlyPaths {
  /// Rutas activas: bajo `ARTISTLY_BASE_DIR` si está definida, si no las
  /// del sistema (config y base coinciden).
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(base) = std::env::var(BASE_DIR_ENV) {
      return Self::rooted_at(base);
    }

    let dirs = ProjectDirs::from("com", "artistly", "artistly").ok_or(ConfigError::Directories)?;
    Self::ensure(Self {
      base_dir: dirs.config_dir().to_path_buf(),
      config_dir: dirs.config_dir().to_path_buf(),
      data_dir: dirs.data_dir().to_path_buf(),
      cache_dir: dirs.cache_dir().to_path_buf(),
    })
  }

  /// Construye las rutas bajo un único directorio raíz, sin consultar el entorno.
  pub fn rooted_at(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base = base.into();
    Self::ensure(Self {
      config_dir: base.join("config"),
      data_dir: base.join("data"),
      cache_dir: base.join("cache"),
      base_dir: base,
    })
  }

  fn ensure(paths: Self) -> Result<Self, ConfigError> {
    for dir in [&paths.config_dir, &paths.data_dir, &paths.cache_dir] {
      std::fs::create_dir_all(dir)?;
    }
    Ok(paths)
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("artistly.toml")
  }

  /// Fichero de datos (catálogo, solicitudes, revisiones) bajo `data_dir`.
  pub fn data_file(&self, name: &str) -> PathBuf {
    self.data_dir.join(name)
  }
}
