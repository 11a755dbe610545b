pub mod form;
pub mod step;
pub mod validation;
pub mod wizard;

pub use form::{Application, OnboardingForm, ProfileImage, ReviewSummary};
pub use step::WizardStep;
pub use validation::{Field, FieldError, ValidationErrors, validate, validate_fields};
pub use wizard::OnboardingWizard;
