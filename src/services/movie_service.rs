// src/services/movie_service.rs
use std::sync::Arc;

use rand::Rng;

use crate::domain::{validate_title, Movie, RatingStatistics};
use crate::error::{AppError, AppResult};
use crate::integrations::MetadataFetcher;
use crate::repositories::MovieStore;
use crate::services::catalog_queries::{random_pick, search_titles, sort_by_rating};
use crate::services::statistics_service::calculate_statistics;

/// Single entry point for the menu: store operations, metadata lookups and
/// the read-only catalog views.
pub struct MovieService {
    store: Arc<dyn MovieStore>,
    fetcher: Arc<dyn MetadataFetcher>,
}

impl MovieService {
    pub fn new(store: Arc<dyn MovieStore>, fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self { store, fetcher }
    }

    pub fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.store.list()
    }

    pub fn get_movie(&self, title: &str) -> AppResult<Option<Movie>> {
        self.store.get(title)
    }

    /// Look `query` up with the metadata provider and store the result.
    ///
    /// A title already in the catalog is rejected before any network call.
    /// The provider may return a canonical title that differs from the
    /// query; that title is checked again by `add`.
    pub async fn add_movie_from_lookup(&self, query: &str) -> AppResult<Movie> {
        let query = query.trim();
        validate_title(query)?;

        if self.store.get(query)?.is_some() {
            return Err(AppError::DuplicateTitle(query.to_string()));
        }

        // No store lock is held while the lookup is in flight.
        let metadata = self.fetcher.fetch(query).await.map_err(|e| {
            log::warn!("Lookup for '{}' failed: {}", query, e);
            AppError::Lookup(e)
        })?;

        let movie = Movie::from(metadata);
        self.store.add(&movie)?;
        Ok(movie)
    }

    pub fn add_movie(&self, movie: &Movie) -> AppResult<()> {
        self.store.add(movie)
    }

    pub fn rename_movie(&self, old_title: &str, new_title: &str) -> AppResult<Movie> {
        self.store.rename(old_title, new_title.trim())
    }

    pub fn update_rating(&self, title: &str, rating: f64) -> AppResult<()> {
        self.store.update(title, rating)
    }

    pub fn delete_movie(&self, title: &str) -> AppResult<()> {
        self.store.delete(title)
    }

    pub fn statistics(&self) -> AppResult<Option<RatingStatistics>> {
        let movies = self.store.list()?;
        Ok(calculate_statistics(&movies))
    }

    pub fn movies_by_rating(&self) -> AppResult<Vec<Movie>> {
        let movies = self.store.list()?;
        Ok(sort_by_rating(&movies).into_iter().cloned().collect())
    }

    pub fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        let movies = self.store.list()?;
        Ok(search_titles(&movies, query).into_iter().cloned().collect())
    }

    pub fn random_movie<R>(&self, rng: &mut R) -> AppResult<Option<Movie>>
    where
        R: Rng + ?Sized,
    {
        let movies = self.store.list()?;
        Ok(random_pick(&movies, rng).cloned())
    }
}
