// src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use moviedb::application::{AppState, Menu};
use moviedb::config::AppConfig;
use moviedb::integrations::{MetadataFetcher, OmdbClient};
use moviedb::repositories::{MovieStore, SqliteMovieStore};
use moviedb::services::MovieService;

#[derive(Parser)]
#[command(name = "moviedb")]
#[command(about = "A personal movie catalog", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database file path
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// HTML template used by "Generate website"
    #[arg(long)]
    template: Option<PathBuf>,

    /// Where the generated website is written
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// OMDb API key
    #[arg(long)]
    api_key: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(api_key) = self.api_key {
            config.omdb.api_key = Some(api_key);
        }
    }
}

/// `RUST_LOG` when set, `warn` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines do not interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1. CONFIGURATION
    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);
    tracing::debug!(database = %config.database_path.display(), "configuration loaded");

    // 2. STORE
    let store: Arc<dyn MovieStore> = Arc::new(
        SqliteMovieStore::open(&config.database_path, config.pool_size)
            .with_context(|| format!("opening {}", config.database_path.display()))?,
    );

    // 3. COLLABORATORS
    let fetcher: Arc<dyn MetadataFetcher> = Arc::new(OmdbClient::new(&config.omdb)?);
    if config.omdb.api_key.is_none() {
        tracing::warn!("No OMDb API key configured; adding movies will fail");
    }

    // 4. APPLICATION STATE
    let state = AppState {
        config: Arc::new(config),
        movie_service: Arc::new(MovieService::new(store, fetcher)),
    };

    // 5. MENU
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(&state, stdin.lock(), stdout.lock());
    menu.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_honours_rust_log_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("error")).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_log_filter_keeps_target_directives() {
        let filter = log_filter(Some("moviedb=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
