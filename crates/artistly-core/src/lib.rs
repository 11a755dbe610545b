pub mod catalog;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod onboarding;
pub mod ports;
pub mod services;

pub use errors::{CoreError, SubmitError};
