pub mod filter;

pub use filter::{FilterCriteria, filter_artists, filter_catalog, result_summary};
