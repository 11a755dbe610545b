use artistly_core::catalog::FilterCriteria;
use artistly_core::dashboard::{DashboardStats, SubmissionFilter};
use artistly_core::domain::booking::BookingRequest;
use artistly_core::domain::submission::{ArtistSubmission, SubmissionStatus};
use artistly_core::domain::{ArtistRecord, Category, Facet, FeeRange, Language, PriceRange};
use artistly_core::onboarding::{FieldError, OnboardingForm};
use artistly_core::ports::Notification;
use serde::{Deserialize, Serialize};

/// Idiomas visibles en la tarjeta antes del "+N more".
const LANGUAGE_PREVIEW: usize = 3;

const PRICE_ON_REQUEST: &str = "Price on request";

/// Filtros del catálogo tal como llegan de la interfaz (`"All"` o ausente = sin filtro).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ArtistQueryDto {
  pub search: Option<String>,
  pub category: Option<String>,
  pub location: Option<String>,
  pub price_range: Option<String>,
}

fn facet<T: std::str::FromStr<Err = std::convert::Infallible>>(raw: Option<&str>) -> Facet<T> {
  match raw.map(str::parse::<Facet<T>>) {
    Some(Ok(facet)) => facet,
    Some(Err(never)) => match never {},
    None => Facet::All,
  }
}

impl From<ArtistQueryDto> for FilterCriteria {
  fn from(dto: ArtistQueryDto) -> Self {
    FilterCriteria::new()
      .with_search(dto.search.unwrap_or_default())
      .with_category(facet::<Category>(dto.category.as_deref()))
      .with_location(facet::<String>(dto.location.as_deref()))
      .with_price_range(facet::<PriceRange>(dto.price_range.as_deref()))
  }
}

#[derive(Debug, Serialize)]
pub struct ArtistCardDto {
  pub id: String,
  pub name: String,
  pub category: String,
  pub location: String,
  pub price_range: String,
  pub bio: String,
  pub rating: String,
  pub reviews: u32,
  pub languages: Vec<String>,
  pub more_languages: usize,
  pub image: Option<String>,
}

impl From<&ArtistRecord> for ArtistCardDto {
  fn from(artist: &ArtistRecord) -> Self {
    let (shown, more) = artist.language_preview(LANGUAGE_PREVIEW);
    ArtistCardDto {
      id: artist.id.to_string(),
      name: artist.name.clone(),
      category: artist.category.to_string(),
      location: artist.location.clone(),
      price_range: match artist.price_range.as_str() {
        "" => PRICE_ON_REQUEST.to_string(),
        label => label.to_string(),
      },
      bio: artist.bio.clone(),
      rating: artist.rating.to_string(),
      reviews: artist.reviews,
      languages: shown.to_vec(),
      more_languages: more,
      image: artist.image.clone(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ArtistListDto {
  pub summary: String,
  pub artists: Vec<ArtistCardDto>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCountDto {
  pub category: String,
  pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FeaturedDto {
  pub featured: Vec<ArtistCardDto>,
  pub categories: Vec<CategoryCountDto>,
}

/// Solicitud de alta leída de un fichero TOML, repartida por pasos del asistente.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDto {
  pub name: String,
  pub bio: String,
  pub categories: Vec<String>,
  pub languages: Vec<String>,
  pub fee_range: Option<String>,
  pub location: String,
  pub email: String,
  pub phone: String,
}

impl ApplicationDto {
  pub fn apply_basic_info(&self, form: &mut OnboardingForm) {
    form.name = self.name.clone();
    form.bio = self.bio.clone();
  }

  /// Las categorías aceptan cualquier texto; idiomas y tarifa deben ser opciones conocidas.
  pub fn apply_skills(&self, form: &mut OnboardingForm) -> Result<(), String> {
    form.categories.clear();
    form.categories.extend(self.categories.iter().map(|c| Category::from(c.clone())));

    form.languages.clear();
    for raw in &self.languages {
      let language = raw.parse::<Language>().map_err(|e| e.to_string())?;
      form.languages.insert(language);
    }

    form.fee_range = match self.fee_range.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(raw) => Some(raw.parse::<FeeRange>().map_err(|e| e.to_string())?),
    };
    Ok(())
  }

  pub fn apply_contact(&self, form: &mut OnboardingForm) {
    form.location = self.location.clone();
    form.email = self.email.clone();
    form.phone = self.phone.clone();
  }
}

/// Resultado de `onboard`: o el envío se aceptó, o quedan errores por campo.
#[derive(Debug, Serialize)]
pub struct OnboardOutcomeDto {
  pub submitted: bool,
  pub receipt: Option<String>,
  /// Paso en el que quedó el asistente (1..=3).
  pub step: u8,
  pub errors: Vec<FieldError>,
  pub notifications: Vec<Notification>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DashboardQueryDto {
  pub search: Option<String>,
  pub status: Option<String>,
}

impl TryFrom<DashboardQueryDto> for SubmissionFilter {
  type Error = String;

  fn try_from(dto: DashboardQueryDto) -> Result<Self, Self::Error> {
    let status = match dto.status.as_deref() {
      Some(raw) => raw.parse::<Facet<SubmissionStatus>>().map_err(|e| e.to_string())?,
      None => Facet::All,
    };
    Ok(SubmissionFilter { search_term: dto.search.unwrap_or_default(), status })
  }
}

#[derive(Debug, Serialize)]
pub struct DashboardDto {
  pub stats: DashboardStats,
  pub submissions: Vec<ArtistSubmission>,
  pub bookings: Vec<BookingRequest>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_and_missing_facets_mean_no_filter() {
    let dto = ArtistQueryDto {
      search: None,
      category: Some("All".into()),
      location: None,
      price_range: Some("".into()),
    };
    assert!(FilterCriteria::from(dto).is_cleared());
  }

  #[test]
  fn concrete_facets_are_parsed() {
    let dto = ArtistQueryDto {
      search: Some("ari".into()),
      category: Some("singers".into()),
      location: Some("Mumbai, Maharashtra".into()),
      price_range: Some("₹500000-1000000".into()),
    };
    let criteria = FilterCriteria::from(dto);
    assert_eq!(criteria.search_term, "ari");
    assert_eq!(criteria.category, Facet::Is(Category::Singer));
    assert_eq!(criteria.location, Facet::Is("Mumbai, Maharashtra".to_string()));
    assert_eq!(criteria.price_range, Facet::Is(PriceRange::FiveToTenLakh));
  }

  fn card_artist(languages: &[&str], price: &str) -> ArtistRecord {
    ArtistRecord {
      id: artistly_core::domain::ArtistId::derived("card"),
      name: "Mame Khan".into(),
      category: Category::Singer,
      location: "Jaipur, Rajasthan".into(),
      price_range: PriceRange::from(price.to_string()),
      bio: "Rajasthani folk singer".into(),
      rating: artistly_core::domain::Rating::ZERO,
      reviews: 0,
      languages: languages.iter().map(|l| l.to_string()).collect(),
      image: None,
    }
  }

  #[test]
  fn card_shows_three_languages_and_counts_the_rest() {
    let card = ArtistCardDto::from(&card_artist(&["Hindi", "English", "Rajasthani", "Punjabi"], "₹200000-500000"));

    assert_eq!(card.languages, ["Hindi", "English", "Rajasthani"]);
    assert_eq!(card.more_languages, 1);
    assert_eq!(card.price_range, "₹200000-500000");
  }

  #[test]
  fn card_without_price_shows_on_request() {
    let card = ArtistCardDto::from(&card_artist(&["Hindi"], ""));

    assert_eq!(card.price_range, "Price on request");
    assert_eq!(card.more_languages, 0);
  }

  #[test]
  fn application_file_fills_every_step() {
    let dto: ApplicationDto = toml::from_str(
      r#"
        name = "Asha"
        bio = "Classical vocalist"
        categories = ["Singer", "Musician"]
        languages = ["hindi", "English"]
        fee_range = "₹50000-100000"
        location = "Pune"
        email = "asha@example.com"
        phone = "9876543210"
      "#,
    )
    .unwrap();

    let mut form = OnboardingForm::default();
    dto.apply_basic_info(&mut form);
    dto.apply_skills(&mut form).unwrap();
    dto.apply_contact(&mut form);

    assert_eq!(form.name, "Asha");
    assert!(form.categories.contains(&Category::Singer));
    assert!(form.languages.contains(&Language::Hindi));
    assert_eq!(form.languages.len(), 2);
    assert_eq!(form.fee_range, Some(FeeRange::FiftyThousandToOneLakh));
    assert_eq!(form.phone, "9876543210");
  }

  #[test]
  fn blank_fee_range_stays_unselected() {
    let dto = ApplicationDto { fee_range: Some("  ".into()), ..Default::default() };
    let mut form = OnboardingForm::default();
    dto.apply_skills(&mut form).unwrap();
    assert_eq!(form.fee_range, None);
  }

  #[test]
  fn unknown_language_is_rejected() {
    let dto = ApplicationDto { languages: vec!["Klingon".into()], ..Default::default() };
    let mut form = OnboardingForm::default();
    assert!(dto.apply_skills(&mut form).is_err());
  }

  #[test]
  fn dashboard_status_parses_or_fails() {
    let ok = DashboardQueryDto { search: None, status: Some("pending".into()) };
    assert_eq!(SubmissionFilter::try_from(ok).unwrap().status, Facet::Is(SubmissionStatus::Pending));

    let all = DashboardQueryDto { search: Some("dj".into()), status: Some("all".into()) };
    assert!(SubmissionFilter::try_from(all).unwrap().status.is_all());

    let bad = DashboardQueryDto { search: None, status: Some("archived".into()) };
    assert!(SubmissionFilter::try_from(bad).is_err());
  }
}
