use artistly_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};

/// Sección `[onboarding]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingConfig {
  /// Si es `true`, "Next" exige que los campos del paso actual sean válidos.
  #[serde(default)]
  pub gate_steps: bool,
}

impl OnboardingConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("onboarding")?;
    CONFIG_BACKEND.save_section("onboarding", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("onboarding", self)
  }
}

/// Sección `[catalog]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
  /// Artistas destacados en la portada.
  #[serde(default = "default_featured_count")]
  pub featured_count: usize,
}

fn default_featured_count() -> usize {
  3
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig { featured_count: default_featured_count() }
  }
}

impl CatalogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("catalog")?;
    CONFIG_BACKEND.save_section("catalog", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("catalog", self)
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
  pub onboarding: OnboardingConfig,
  pub catalog: CatalogConfig,
}

impl AppSettings {
  pub fn load() -> Result<Self, ConfigError> {
    Ok(AppSettings { onboarding: OnboardingConfig::load()?, catalog: CatalogConfig::load()? })
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    Ok(AppSettings {
      onboarding: backend.load_section_with_default("onboarding")?,
      catalog: backend.load_section_with_default("catalog")?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use artistly_config::ArtistlyPaths;

  #[test]
  fn absent_sections_fall_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let backend = TomlConfigBackend::new(ArtistlyPaths::rooted_at(tmp.path()).unwrap());

    let settings = AppSettings::load_from(&backend).unwrap();

    assert!(!settings.onboarding.gate_steps);
    assert_eq!(settings.catalog.featured_count, 3);
  }

  #[test]
  fn sections_are_read_from_file() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = ArtistlyPaths::rooted_at(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[onboarding]\ngate_steps = true\n\n[catalog]\nfeatured_count = 5\n").unwrap();

    let settings = AppSettings::load_from(&TomlConfigBackend::new(paths)).unwrap();

    assert!(settings.onboarding.gate_steps);
    assert_eq!(settings.catalog.featured_count, 5);
  }
}
