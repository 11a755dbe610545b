pub mod catalog;
pub mod config;
pub mod dashboard;
mod ids;
pub mod models;
mod seed;
pub mod sinks;

pub use catalog::StaticCatalog;
pub use config::{SinkKind, StorageConfig};
pub use dashboard::{BookingStore, SubmissionStore};
pub use sinks::{ConfiguredSink, JsonlSubmissionSink, LoggingSubmissionSink};
