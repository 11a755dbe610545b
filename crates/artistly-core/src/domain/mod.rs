pub mod artist;
pub mod booking;
pub mod category;
pub mod facet;
pub mod fee_range;
pub mod ids;
pub mod language;
pub mod price_range;
pub mod rating;
pub mod selection;
pub mod submission;

pub use artist::{ArtistRecord, CATALOG_LOCATIONS};
pub use category::Category;
pub use facet::Facet;
pub use fee_range::FeeRange;
pub use ids::{ArtistId, BookingId, SubmissionId};
pub use language::Language;
pub use price_range::PriceRange;
pub use rating::Rating;
pub use selection::Selection;
