// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_queries;
pub mod movie_service;
pub mod statistics_service;

pub use catalog_queries::{random_pick, search_titles, sort_by_rating};
pub use movie_service::MovieService;
pub use statistics_service::{calculate_statistics, round2};
