// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Every commit is flushed before the call returns

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Pragmas applied to every pooled connection.
///
/// `synchronous = FULL` makes each committed write durable before
/// the statement returns.
const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL;
     PRAGMA synchronous = FULL;
     PRAGMA busy_timeout = 5000;";

/// Create the parent directory of `db_path` if it does not exist yet.
fn ensure_parent_dir(db_path: &Path) -> AppResult<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::StorageUnavailable(format!(
                "cannot create database directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Open a single, unpooled connection to `db_path`.
///
/// Used to check the file before a pool is built: a damaged file fails
/// here on the first statement instead of inside the pool's retry loop.
pub fn open_connection(db_path: &Path) -> AppResult<Connection> {
    ensure_parent_dir(db_path)?;
    let conn = Connection::open(db_path)?;
    Ok(conn)
}

/// Create a connection pool over the database file at `db_path`.
///
/// The parent directory is created if missing. The file itself is created
/// by SQLite on first connection.
pub fn create_connection_pool(db_path: &Path, max_size: u32) -> AppResult<ConnectionPool> {
    ensure_parent_dir(db_path)?;

    let manager = SqliteConnectionManager::file(db_path)
        .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .connection_timeout(Duration::from_secs(5))
        .build(manager)
        .map_err(|e| {
            AppError::StorageUnavailable(format!(
                "cannot open database {}: {}",
                db_path.display(),
                e
            ))
        })?;

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get().map_err(AppError::from)
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    Ok(conn)
}
