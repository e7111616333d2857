// src/integrations/omdb/client.rs
//
// OMDb API Integration
//
// ARCHITECTURE:
// - Single-title lookup against the OMDb REST API
// - Maps the external payload to `MovieMetadata` (never touches the store)
// - Missing or unparsable fields collapse to the catalog's sentinels
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Every failure is reported as a `LookupError`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::OmdbConfig;
use crate::domain::{validate_rating, NO_POSTER, UNKNOWN_YEAR, UNRATED};
use crate::error::{AppError, AppResult};
use crate::integrations::{LookupError, MetadataFetcher, MovieMetadata};

/// Raw OMDb response. Every field is optional because failed lookups only
/// carry `Response` and `Error`.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// OMDb API Client
pub struct OmdbClient {
    base_url: String,
    http_client: Client,
    api_key: Option<String>,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http_client,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
        })
    }

    /// Turn a decoded payload into catalog fields.
    fn normalize(query: &str, response: OmdbResponse) -> Result<MovieMetadata, LookupError> {
        if response.response != "True" {
            log::debug!(
                "OMDb has no match for '{}': {}",
                query,
                response.error.as_deref().unwrap_or("no error message")
            );
            return Err(LookupError::NotFound(query.to_string()));
        }

        let title = response
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| query.to_string());

        let year = response
            .year
            .and_then(|y| y.trim().parse::<i32>().ok())
            .filter(|y| *y >= 0)
            .unwrap_or(UNKNOWN_YEAR);

        let rating = response
            .imdb_rating
            .and_then(|r| r.trim().parse::<f64>().ok())
            .filter(|r| validate_rating(*r).is_ok())
            .unwrap_or(UNRATED);

        let poster = response
            .poster
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("N/A"))
            .unwrap_or_else(|| NO_POSTER.to_string());

        Ok(MovieMetadata {
            title,
            year,
            rating,
            poster,
        })
    }
}

#[async_trait]
impl MetadataFetcher for OmdbClient {
    async fn fetch(&self, title: &str) -> Result<MovieMetadata, LookupError> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", api_key), ("t", title)])
            .send()
            .await
            .map_err(|e| LookupError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Unreachable(format!(
                "OMDb returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Unreachable(e.to_string()))?;

        let payload: OmdbResponse = serde_json::from_str(&body)
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        Self::normalize(title, payload)
    }
}
