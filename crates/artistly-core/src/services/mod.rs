pub mod catalog_service;
pub mod dashboard_service;
pub mod onboarding_service;

pub use catalog_service::CatalogService;
pub use dashboard_service::{DashboardService, ReviewDecision};
pub use onboarding_service::OnboardingService;
