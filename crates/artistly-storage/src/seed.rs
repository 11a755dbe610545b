//! Datos semilla embebidos en el binario.

pub const ARTISTS_JSON: &str = include_str!("../data/artists.json");
pub const SUBMISSIONS_JSON: &str = include_str!("../data/submissions.json");
pub const BOOKINGS_JSON: &str = include_str!("../data/bookings.json");
