// src/config/mod.rs
//
// Application configuration
//
// Resolution order (later wins):
// 1. Built-in defaults
// 2. TOML file: explicit path, else ./moviedb.toml, else <config dir>/moviedb/config.toml
// 3. Environment: OMDB_API_KEY, MOVIEDB_DATABASE
// 4. Command-line flags (applied by the binary)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const LOCAL_CONFIG_FILE: &str = "moviedb.toml";
pub const ENV_API_KEY: &str = "OMDB_API_KEY";
pub const ENV_DATABASE: &str = "MOVIEDB_DATABASE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file, relative to the working directory unless absolute
    pub database_path: PathBuf,
    pub pool_size: u32,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub page_title: String,
    pub omdb: OmdbConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("data/movies.db"),
            pool_size: 4,
            template_path: PathBuf::from("_static/index_template.html"),
            output_path: PathBuf::from("index.html"),
            page_title: "My Movie Database".to_string(),
            omdb: OmdbConfig::default(),
        }
    }
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "http://www.omdbapi.com/".to_string(),
            timeout_secs: 5,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// An explicit `path` must exist; the implicit locations are optional.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_locations().into_iter().find(|p| p.is_file()) {
                Some(found) => Self::from_file(&found)?,
                None => {
                    log::debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml(&raw)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> AppResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("moviedb").join("config.toml"));
        }
        locations
    }

    /// Apply environment overrides through `lookup` (injectable for tests).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.omdb.api_key = Some(key);
        }
        if let Some(db) = lookup(ENV_DATABASE).filter(|v| !v.trim().is_empty()) {
            self.database_path = PathBuf::from(db);
        }
    }
}
