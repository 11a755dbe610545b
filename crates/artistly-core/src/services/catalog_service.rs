use crate::catalog::{FilterCriteria, filter_artists, result_summary};
use crate::domain::{ArtistRecord, Category, Facet, PriceRange};
use crate::ports::CatalogSource;
use tracing::debug;

/// Controlador de la página de artistas: posee los criterios activos y
/// deriva la vista filtrada del catálogo sin modificarlo.
pub struct CatalogService<C>
where
  C: CatalogSource,
{
  source: C,
  criteria: FilterCriteria,
}

impl<C> CatalogService<C>
where
  C: CatalogSource,
{
  pub fn new(source: C) -> Self {
    Self { source, criteria: FilterCriteria::default() }
  }

  pub fn criteria(&self) -> &FilterCriteria {
    &self.criteria
  }

  pub fn set_criteria(&mut self, criteria: FilterCriteria) {
    self.criteria = criteria;
  }

  pub fn set_search_term(&mut self, term: impl Into<String>) {
    self.criteria.search_term = term.into();
  }

  pub fn set_category(&mut self, category: Facet<Category>) {
    self.criteria.category = category;
  }

  pub fn set_location(&mut self, location: Facet<String>) {
    self.criteria.location = location;
  }

  pub fn set_price_range(&mut self, price_range: Facet<PriceRange>) {
    self.criteria.price_range = price_range;
  }

  pub fn clear_filters(&mut self) {
    self.criteria.clear();
  }

  // -------- QUERY (read) --------

  pub fn all(&self) -> &[ArtistRecord] {
    self.source.artists()
  }

  pub fn visible(&self) -> Vec<&ArtistRecord> {
    let visible = filter_artists(self.source.artists(), &self.criteria);
    debug!(total = self.source.artists().len(), visible = visible.len(), "catalog filtered");
    visible
  }

  pub fn summary(&self) -> String {
    result_summary(self.visible().len())
  }

  /// Los `n` mejor valorados; a igual valoración, en orden de catálogo.
  pub fn featured(&self, n: usize) -> Vec<&ArtistRecord> {
    let mut ranked: Vec<&ArtistRecord> = self.source.artists().iter().collect();
    // sort_by es estable: los empates conservan el orden original.
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating));
    ranked.truncate(n);
    ranked
  }

  /// Número de artistas por categoría estándar, en orden de declaración.
  /// Las etiquetas no estándar no aparecen.
  pub fn category_counts(&self) -> Vec<(Category, usize)> {
    Category::STANDARD
      .into_iter()
      .map(|category| {
        let count = self.source.artists().iter().filter(|a| a.category == category).count();
        (category, count)
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ArtistId, Rating};

  fn artist(name: &str, category: Category, rating: f32) -> ArtistRecord {
    ArtistRecord {
      id: ArtistId::derived(name),
      name: name.into(),
      category,
      location: "Delhi, NCR".into(),
      price_range: PriceRange::TwoToFiveLakh,
      bio: format!("{name} performs live"),
      rating: Rating::new(rating).unwrap(),
      reviews: 10,
      languages: vec!["Hindi".into()],
      image: None,
    }
  }

  fn service() -> CatalogService<Vec<ArtistRecord>> {
    CatalogService::new(vec![
      artist("Kabir", Category::Singer, 4.5),
      artist("Leela", Category::Dancer, 4.9),
      artist("Vikram", Category::Speaker, 4.5),
      artist("Anaya", Category::Singer, 4.7),
    ])
  }

  #[test]
  fn setters_narrow_and_clear_restores_everything() {
    let mut service = service();

    service.set_category(Facet::Is(Category::Singer));
    service.set_search_term("ANA");
    assert_eq!(service.visible().iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), ["Anaya"]);
    assert_eq!(service.summary(), "Showing 1 artist");

    service.clear_filters();
    assert_eq!(service.visible().len(), 4);
  }

  #[test]
  fn featured_orders_by_rating_keeping_ties_stable() {
    let service = service();

    let names: Vec<_> = service.featured(3).iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, ["Leela", "Anaya", "Kabir"]);
  }

  #[test]
  fn category_counts_cover_standard_categories() {
    let counts = service().category_counts();

    assert_eq!(counts.len(), Category::STANDARD.len());
    assert_eq!(counts[0], (Category::Singer, 2));
    assert_eq!(counts[1], (Category::Dancer, 1));
    assert_eq!(counts[3], (Category::DJ, 0));
  }
}
