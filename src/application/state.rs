// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::MovieService;

/// Everything the menu needs, built once in main.rs and passed in.
/// The store lives inside the service; dropping the state closes it.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub movie_service: Arc<MovieService>,
}
