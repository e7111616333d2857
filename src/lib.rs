// src/lib.rs
// MovieDB - Local-first personal movie catalog
//
// Architecture:
// - Domain-centric: the Movie record and its invariants live in `domain`
// - One store: `SqliteMovieStore` is the sole owner of the backing file
// - Explicit: the store is constructed once and passed down, never global
// - Collaborators (metadata lookup, rendering, menu) never hold store locks
//   across I/O

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod presentation;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_movie, validate_rating, validate_title, DomainError, Movie, RatingGroup,
    RatingStatistics, NO_POSTER, UNKNOWN_YEAR, UNRATED,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Store
// ============================================================================

pub use repositories::{MovieStore, SqliteMovieStore};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    calculate_statistics, random_pick, search_titles, sort_by_rating, MovieService,
};

// ============================================================================
// PUBLIC API - Collaborators
// ============================================================================

pub use application::{AppState, Menu};
pub use config::{AppConfig, OmdbConfig};
pub use integrations::{LookupError, MetadataFetcher, MovieMetadata, OmdbClient};
pub use presentation::{escape_html, generate_website, render_page};
