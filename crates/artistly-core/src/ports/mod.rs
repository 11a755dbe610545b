pub mod catalog;
pub mod dashboard;
pub mod notifier;
pub mod submission;

pub use catalog::CatalogSource;
pub use dashboard::{BookingRepository, RepoError, SubmissionRepository};
pub use notifier::{Notification, Notifier, Severity};
pub use submission::{SinkError, SubmissionReceipt, SubmissionSink};
