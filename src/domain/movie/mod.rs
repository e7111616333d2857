pub mod entity;
pub mod invariants;

pub use entity::{Movie, NO_POSTER, UNKNOWN_YEAR, UNRATED};
pub use invariants::{validate_movie, validate_rating, validate_title, MAX_RATING, MIN_RATING};
