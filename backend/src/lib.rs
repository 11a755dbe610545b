pub mod config;
pub mod infrastructure;
pub mod settings;

use artistly_core::SubmitError;
use artistly_core::catalog::FilterCriteria;
use artistly_core::dashboard::SubmissionFilter;
use artistly_core::domain::SubmissionId;
use artistly_core::domain::submission::ArtistSubmission;
use artistly_core::onboarding::{OnboardingWizard, ProfileImage, ValidationErrors};
use artistly_core::services::{CatalogService, DashboardService, OnboardingService, ReviewDecision};
use artistly_storage::{BookingStore, ConfiguredSink, StaticCatalog, StorageConfig, SubmissionStore};
use tracing::debug;

use crate::config::{
  ApplicationDto, ArtistCardDto, ArtistListDto, ArtistQueryDto, CategoryCountDto, DashboardDto, DashboardQueryDto,
  FeaturedDto, OnboardOutcomeDto,
};
use crate::infrastructure::notifier::ToastNotifier;
use crate::settings::AppSettings;

pub use infrastructure::image::load_profile_image;

/// Type aliases to keep the generic service signatures out of the command layer.
type ConcreteCatalogService = CatalogService<StaticCatalog>;
type ConcreteOnboardingService = OnboardingService<ConfiguredSink, ToastNotifier>;
type ConcreteDashboardService = DashboardService<SubmissionStore, BookingStore>;

/// Global application state: the services with their adapters injected.
pub struct AppState {
  catalog: ConcreteCatalogService,
  onboarding: ConcreteOnboardingService,
  dashboard: ConcreteDashboardService,
  /// Shares its queue with the notifier injected into `onboarding`.
  toasts: ToastNotifier,
  settings: AppSettings,
}

impl AppState {
  /// Wires every adapter from the given configuration.
  pub fn new(storage: &StorageConfig, settings: AppSettings) -> anyhow::Result<Self> {
    // --- Dependency Injection Phase ---

    // 1. Catalog source (embedded seed or `catalog_path`)
    let catalog = CatalogService::new(StaticCatalog::from_config(storage));

    // 2. Submission sink + notifier
    let toasts = ToastNotifier::new();
    let onboarding = OnboardingService::new(ConfiguredSink::from_config(storage), toasts.clone());

    // 3. Dashboard repositories. Reviews persist in `review_store`.
    let submissions = SubmissionStore::open(&storage.review_store)?;
    let dashboard = DashboardService::new(submissions, BookingStore::seeded());

    Ok(AppState { catalog, onboarding, dashboard, toasts, settings })
  }

  /// Loads `[storage]`, `[onboarding]` and `[catalog]` from the config file and wires the state.
  pub fn from_config() -> anyhow::Result<Self> {
    let storage = StorageConfig::load()?;
    let settings = AppSettings::load()?;
    Self::new(&storage, settings)
  }

  fn outcome(&self, wizard: &OnboardingWizard, errors: &ValidationErrors) -> OnboardOutcomeDto {
    OnboardOutcomeDto {
      submitted: false,
      receipt: None,
      step: wizard.step().number(),
      errors: errors.iter().cloned().collect(),
      notifications: self.toasts.drain(),
    }
  }
}

/// Command: filters the catalog with the browse-page criteria.
pub fn artists_filter(state: &mut AppState, query: ArtistQueryDto) -> ArtistListDto {
  state.catalog.set_criteria(FilterCriteria::from(query));
  let artists = state.catalog.visible().into_iter().map(ArtistCardDto::from).collect();
  ArtistListDto { summary: state.catalog.summary(), artists }
}

/// Command: home page data, the top-rated artists and the per-category counts.
pub fn artists_featured(state: &AppState) -> FeaturedDto {
  let featured = state.catalog.featured(state.settings.catalog.featured_count);
  FeaturedDto {
    featured: featured.into_iter().map(ArtistCardDto::from).collect(),
    categories: state
      .catalog
      .category_counts()
      .into_iter()
      .map(|(category, count)| CategoryCountDto { category: category.to_string(), count })
      .collect(),
  }
}

/// Command: drives the onboarding wizard step by step with the given answers, then submits.
///
/// Field errors are part of the outcome, not an `Err`. Only input that cannot be mapped
/// onto the form (unknown language or fee range) is reported as an error.
pub async fn onboard_submit(
  state: &AppState,
  input: ApplicationDto,
  image: Option<ProfileImage>,
) -> Result<OnboardOutcomeDto, String> {
  let mut wizard = OnboardingWizard::with_step_gating(state.settings.onboarding.gate_steps);
  if let Some(image) = image {
    wizard.attach_image(image);
  }

  input.apply_basic_info(wizard.form_mut());
  if let Err(errors) = wizard.next() {
    return Ok(state.outcome(&wizard, &errors));
  }

  input.apply_skills(wizard.form_mut())?;
  if let Err(errors) = wizard.next() {
    return Ok(state.outcome(&wizard, &errors));
  }

  input.apply_contact(wizard.form_mut());
  debug!(step = %wizard.step(), "wizard ready to submit");

  match state.onboarding.submit(&mut wizard).await {
    Ok(receipt) => Ok(OnboardOutcomeDto {
      submitted: true,
      receipt: Some(receipt.id.to_string()),
      step: wizard.step().number(),
      errors: Vec::new(),
      notifications: state.toasts.drain(),
    }),
    Err(SubmitError::Invalid(errors)) => Ok(state.outcome(&wizard, &errors)),
    Err(SubmitError::Transport(_)) => Ok(state.outcome(&wizard, &ValidationErrors::default())),
    Err(e @ SubmitError::NotOnFinalStep) => Err(e.to_string()),
  }
}

/// Command: manager dashboard with stats, filtered submissions and booking requests.
pub fn dashboard_overview(state: &AppState, query: DashboardQueryDto) -> Result<DashboardDto, String> {
  let filter = SubmissionFilter::try_from(query)?;
  let dashboard = &state.dashboard;

  Ok(DashboardDto {
    stats: dashboard.stats(state.catalog.all().len()).map_err(|e| e.to_string())?,
    submissions: dashboard.submissions(&filter).map_err(|e| e.to_string())?,
    bookings: dashboard.bookings().map_err(|e| e.to_string())?,
  })
}

/// Command: approves or rejects a pending submission.
pub fn dashboard_review(state: &AppState, id: &str, decision: ReviewDecision) -> Result<ArtistSubmission, String> {
  let uuid = uuid::Uuid::parse_str(id.trim()).map_err(|e| e.to_string())?;
  state.dashboard.review(SubmissionId::from_uuid(uuid), decision).map_err(|e| e.to_string())
}
