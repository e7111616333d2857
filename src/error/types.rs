// src/error/types.rs
use std::path::PathBuf;

use crate::domain::DomainError;
use crate::integrations::LookupError;
use thiserror::Error;

/// Every failure the catalog can report.
///
/// The first four variants are the store's own taxonomy; callers match on
/// them to tell the user which invariant was violated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("'{0}' already exists in the database")]
    DuplicateTitle(String),

    #[error("Movie '{0}' not found")]
    NotFound(String),

    #[error("Invalid rating {0}: must be between 1 and 10")]
    InvalidRating(f64),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid movie: {0}")]
    InvalidMovie(String),

    #[error("Metadata lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidRating(rating) => AppError::InvalidRating(rating),
            other => AppError::InvalidMovie(other.to_string()),
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::StorageUnavailable(format!("database error: {}", err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::StorageUnavailable(format!("connection pool error: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_keeps_its_kind() {
        let err: AppError = DomainError::InvalidRating(11.0).into();
        assert!(matches!(err, AppError::InvalidRating(r) if r == 11.0));
    }

    #[test]
    fn test_other_domain_errors_become_invalid_movie() {
        let err: AppError = DomainError::EmptyTitle.into();
        assert!(matches!(err, AppError::InvalidMovie(_)));
    }

    #[test]
    fn test_sqlite_errors_are_storage_unavailable() {
        let err: AppError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }
}
