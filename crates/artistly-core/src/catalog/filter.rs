use crate::domain::{ArtistRecord, Category, Facet, PriceRange};
use serde::{Deserialize, Serialize};

/// Selección activa de búsqueda y filtros sobre el catálogo.
///
/// El valor por defecto (término vacío, todo `All`) deja pasar el catálogo entero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
  pub search_term: String,
  pub category: Facet<Category>,
  pub location: Facet<String>,
  pub price_range: Facet<PriceRange>,
}

impl FilterCriteria {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_search(mut self, term: impl Into<String>) -> Self {
    self.search_term = term.into();
    self
  }

  pub fn with_category(mut self, category: Facet<Category>) -> Self {
    self.category = category;
    self
  }

  pub fn with_location(mut self, location: Facet<String>) -> Self {
    self.location = location;
    self
  }

  pub fn with_price_range(mut self, price_range: Facet<PriceRange>) -> Self {
    self.price_range = price_range;
    self
  }

  /// "Clear All Filters": vuelve a los valores por defecto.
  pub fn clear(&mut self) {
    *self = Self::default();
  }

  pub fn is_cleared(&self) -> bool {
    *self == Self::default()
  }

  fn accepts(&self, needle: &str, artist: &ArtistRecord) -> bool {
    artist.matches_search(needle)
      && self.category.matches(&artist.category)
      && self.location.matches(&artist.location)
      && self.price_range.matches(&artist.price_range)
  }
}

/// Subsecuencia de `records` que cumple todos los criterios, en el orden original.
///
/// La búsqueda es una subcadena sin distinguir mayúsculas sobre nombre o biografía.
pub fn filter_artists<'a>(records: &'a [ArtistRecord], criteria: &FilterCriteria) -> Vec<&'a ArtistRecord> {
  let needle = criteria.search_term.to_lowercase();
  records.iter().filter(|artist| criteria.accepts(&needle, artist)).collect()
}

/// Igual que [`filter_artists`], pero un catálogo ausente da un resultado vacío.
pub fn filter_catalog<'a>(records: Option<&'a [ArtistRecord]>, criteria: &FilterCriteria) -> Vec<&'a ArtistRecord> {
  records.map(|r| filter_artists(r, criteria)).unwrap_or_default()
}

/// Texto del contador de resultados: "Showing 1 artist", "Showing 3 artists".
pub fn result_summary(count: usize) -> String {
  let plural = if count == 1 { "" } else { "s" };
  format!("Showing {count} artist{plural}")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ArtistId, Rating};

  fn artist(name: &str, bio: &str, category: Category, location: &str, price: &str) -> ArtistRecord {
    ArtistRecord {
      id: ArtistId::derived(name),
      name: name.into(),
      category,
      location: location.into(),
      price_range: price.parse().unwrap(),
      bio: bio.into(),
      rating: Rating::ZERO,
      reviews: 0,
      languages: vec![],
      image: None,
    }
  }

  fn catalog() -> Vec<ArtistRecord> {
    vec![
      artist("Arijit", "singer", Category::Singer, "Mumbai, Maharashtra", "₹500000-1000000"),
      artist("Terence", "Bollywood choreographer", Category::Dancer, "Mumbai, Maharashtra", "₹200000-500000"),
      artist("Sandeep", "Motivational SPEAKER and author", Category::Speaker, "Delhi, NCR", "₹200000-500000"),
      artist("Nucleya", "Bass music producer and DJ", Category::DJ, "Bangalore, Karnataka", "₹1000000-1500000"),
      artist("Shreya", "Playback singer with a classical base", Category::Singer, "Kolkata, West Bengal", "₹1500000+"),
      artist("Mystery", "", Category::Custom(String::new()), "", ""),
    ]
  }

  fn sample_criteria() -> Vec<FilterCriteria> {
    vec![
      FilterCriteria::new(),
      FilterCriteria::new().with_search("SINGER"),
      FilterCriteria::new().with_search("er"),
      FilterCriteria::new().with_category(Facet::Is(Category::Singer)),
      FilterCriteria::new().with_location(Facet::Is("Mumbai, Maharashtra".into())),
      FilterCriteria::new().with_price_range(Facet::Is(PriceRange::TwoToFiveLakh)).with_search("o"),
      FilterCriteria::new().with_category(Facet::Is(Category::Magician)),
    ]
  }

  #[test]
  fn default_criteria_return_full_catalog_in_order() {
    let records = catalog();

    let result = filter_artists(&records, &FilterCriteria::default());

    assert_eq!(result, records.iter().collect::<Vec<_>>());
  }

  #[test]
  fn every_hit_contains_the_term_and_every_miss_lacks_it() {
    let records = catalog();

    for term in ["singer", "ER", "bass", "zzz", "a"] {
      let criteria = FilterCriteria::new().with_search(term);
      let hits = filter_artists(&records, &criteria);
      let needle = term.to_lowercase();

      for artist in &records {
        let has_term = artist.name.to_lowercase().contains(&needle) || artist.bio.to_lowercase().contains(&needle);
        assert_eq!(hits.contains(&artist), has_term, "term {term:?}, artist {}", artist.name);
      }
    }
  }

  #[test]
  fn filtering_is_idempotent() {
    let records = catalog();

    for criteria in sample_criteria() {
      let once: Vec<ArtistRecord> = filter_artists(&records, &criteria).into_iter().cloned().collect();
      let twice = filter_artists(&once, &criteria);

      assert_eq!(twice, once.iter().collect::<Vec<_>>());
    }
  }

  #[test]
  fn result_is_an_order_preserving_subsequence() {
    let records = catalog();

    for criteria in sample_criteria() {
      let result = filter_artists(&records, &criteria);
      let positions = result.iter().map(|hit| records.iter().position(|r| std::ptr::eq(r, *hit)).unwrap());

      let mut last: Option<usize> = None;
      for pos in positions {
        assert!(last.is_none_or(|prev| prev < pos));
        last = Some(pos);
      }
    }
  }

  #[test]
  fn search_term_matches_name_case_insensitively() {
    let records = vec![artist("Arijit", "singer", Category::Singer, "Mumbai, Maharashtra", "₹500000-1000000")];
    let criteria = FilterCriteria {
      search_term: "ari".into(),
      category: Facet::All,
      location: Facet::All,
      price_range: Facet::All,
    };

    let result = filter_artists(&records, &criteria);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Arijit");
  }

  #[test]
  fn unmatched_category_yields_empty_result() {
    let records = vec![artist("Arijit", "singer", Category::Singer, "Mumbai, Maharashtra", "₹500000-1000000")];
    let criteria = FilterCriteria::new().with_category(Facet::Is(Category::Dancer));

    assert!(filter_artists(&records, &criteria).is_empty());
  }

  #[test]
  fn all_dimensions_must_hold() {
    let records = catalog();
    let criteria = FilterCriteria::new()
      .with_category(Facet::Is(Category::Singer))
      .with_location(Facet::Is("Kolkata, West Bengal".into()))
      .with_price_range(Facet::Is(PriceRange::FifteenLakhPlus));

    let names: Vec<_> = filter_artists(&records, &criteria).iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, ["Shreya"]);
  }

  #[test]
  fn absent_catalog_yields_empty_result() {
    assert!(filter_catalog(None, &FilterCriteria::default()).is_empty());
  }

  #[test]
  fn clear_resets_every_dimension() {
    let mut criteria = FilterCriteria::new().with_search("dj").with_category(Facet::Is(Category::DJ));

    criteria.clear();

    assert!(criteria.is_cleared());
  }

  #[test]
  fn summary_uses_singular_only_for_one() {
    assert_eq!(result_summary(0), "Showing 0 artists");
    assert_eq!(result_summary(1), "Showing 1 artist");
    assert_eq!(result_summary(12), "Showing 12 artists");
  }
}
