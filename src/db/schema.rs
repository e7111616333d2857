// src/db/schema.rs
//
// Database schema initialization and verification
//
// PRINCIPLES:
// - One table, fixed columns, no version tracking
// - A foreign or damaged file is reported, never repaired
// - Idempotent operations

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

/// Columns of the `movies` table, in declaration order
pub const MOVIE_COLUMNS: [&str; 4] = ["title", "year", "rating", "poster"];

/// The only primary key column
const MOVIE_KEY: &str = "title";

/// Prepare a database for use by the store.
///
/// 1. Checks the file is a healthy SQLite database
/// 2. Creates the `movies` table if missing
/// 3. Verifies the table has exactly the expected columns
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    verify_database_integrity(conn)?;
    apply_schema(conn)?;
    verify_movies_schema(conn)?;
    Ok(())
}

fn apply_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema).map_err(|e| {
        AppError::StorageUnavailable(format!("failed to apply schema: {}", e))
    })?;

    Ok(())
}

/// Reject a `movies` table that was not created by this program.
///
/// Names, `NOT NULL` and the primary key must all match; a loose table
/// would let NULLs or duplicate titles in.
pub fn verify_movies_schema(conn: &Connection) -> AppResult<()> {
    let mut stmt = conn.prepare(
        "SELECT name, \"notnull\", pk FROM pragma_table_info('movies') ORDER BY cid",
    )?;
    let columns: Vec<(String, bool, bool)> = stmt
        .query_map([], |row| {
            let notnull: i64 = row.get(1)?;
            let pk: i64 = row.get(2)?;
            Ok((row.get(0)?, notnull != 0, pk != 0))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let names: Vec<&str> = columns.iter().map(|(name, _, _)| name.as_str()).collect();
    if names != MOVIE_COLUMNS {
        return Err(AppError::StorageUnavailable(format!(
            "unexpected movies table columns {:?}, expected {:?}",
            names, MOVIE_COLUMNS
        )));
    }

    for (name, notnull, pk) in &columns {
        let expected_pk = name == MOVIE_KEY;
        if !notnull || *pk != expected_pk {
            return Err(AppError::StorageUnavailable(format!(
                "movies.{} has unexpected constraints (not null: {}, primary key: {})",
                name, notnull, pk
            )));
        }
    }

    Ok(())
}

/// Runs SQLite's integrity check.
///
/// A file that is not a database fails here with `StorageUnavailable`.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::StorageUnavailable(format!(
            "database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='movies')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists);
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();

        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO movies (title, year, rating, poster) VALUES ('Heat', 1995, 8.3, '')",
            [],
        )
        .unwrap();
        initialize_database(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_foreign_movies_table_rejected() {
        let conn = create_test_connection().unwrap();
        conn.execute_batch("CREATE TABLE movies (id INTEGER PRIMARY KEY, name TEXT);")
            .unwrap();

        let result = initialize_database(&conn);
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    #[test]
    fn test_movies_table_without_constraints_rejected() {
        let conn = create_test_connection().unwrap();
        conn.execute_batch(
            "CREATE TABLE movies (title TEXT, year INTEGER, rating REAL, poster TEXT);",
        )
        .unwrap();

        let result = initialize_database(&conn);
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    #[test]
    fn test_movies_table_with_wrong_key_rejected() {
        let conn = create_test_connection().unwrap();
        conn.execute_batch(
            "CREATE TABLE movies (
                title  TEXT    NOT NULL,
                year   INTEGER NOT NULL PRIMARY KEY,
                rating REAL    NOT NULL,
                poster TEXT    NOT NULL
            );",
        )
        .unwrap();

        let result = initialize_database(&conn);
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    #[test]
    fn test_title_cannot_be_blank_at_sql_level() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let result = conn.execute("INSERT INTO movies (title) VALUES ('   ')", []);
        assert!(result.is_err(), "CHECK constraint should reject blank titles");
    }

    #[test]
    fn test_defaults_fill_sentinels() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        conn.execute("INSERT INTO movies (title) VALUES ('Alien')", [])
            .unwrap();

        let (year, rating, poster): (i32, f64, String) = conn
            .query_row(
                "SELECT year, rating, poster FROM movies WHERE title = 'Alien'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!((year, rating, poster.as_str()), (0, 0.0, ""));
    }

    #[test]
    fn test_integrity_check() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        verify_database_integrity(&conn).unwrap();
    }
}
