//! Rating statistics are always derived from the store, never stored.
//! Unrated movies (rating sentinel 0) do not participate.

pub mod entity;
pub use entity::{RatingGroup, RatingStatistics};
