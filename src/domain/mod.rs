// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

pub mod movie;
pub mod statistics;

// Movie Domain
pub use movie::{
    validate_movie, validate_rating, validate_title, Movie, MAX_RATING, MIN_RATING, NO_POSTER,
    UNKNOWN_YEAR, UNRATED,
};

// Statistics Domain (Derived Data)
pub use statistics::{RatingGroup, RatingStatistics};

use thiserror::Error;

/// Domain-level errors
/// These represent violations of the record invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Movie title cannot be empty")]
    EmptyTitle,

    #[error("Rating {0} is outside 1-10")]
    InvalidRating(f64),

    #[error("Release year {0} cannot be negative")]
    InvalidYear(i32),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
