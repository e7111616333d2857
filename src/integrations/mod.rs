// src/integrations/mod.rs
//
// External Integrations Module
//
// The catalog talks to one outside service: a movie metadata provider.
// Providers sit behind `MetadataFetcher` so the service layer and tests
// never depend on the network.

pub mod omdb;

pub use omdb::OmdbClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Movie;

/// Normalized metadata for one movie, as returned by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

impl From<MovieMetadata> for Movie {
    fn from(metadata: MovieMetadata) -> Self {
        Movie::new(metadata.title, metadata.year, metadata.rating, metadata.poster)
    }
}

/// Why a lookup produced no metadata
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Movie '{0}' not found")]
    NotFound(String),

    #[error("Could not reach the metadata service: {0}")]
    Unreachable(String),

    #[error("Unexpected response from the metadata service: {0}")]
    MalformedResponse(String),

    #[error("No API key configured for the metadata service")]
    MissingApiKey,
}

/// Looks up a movie by free-text title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, title: &str) -> Result<MovieMetadata, LookupError>;
}
