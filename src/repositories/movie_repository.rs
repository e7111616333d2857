// src/repositories/movie_repository.rs
//
// Movie persistence
//
// The store is the only reader and writer of the `movies` table.
// Mutations are serialized behind `write_lock` and each one runs in a
// single SQLite transaction, so a failed call leaves the table untouched.

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rusqlite::{params, OptionalExtension, Row, Transaction, TransactionBehavior};

use crate::db::{
    create_connection_pool, get_connection, initialize_database, open_connection, ConnectionPool,
};
use crate::domain::{validate_movie, validate_rating, validate_title, Movie};
use crate::error::{AppError, AppResult};

pub trait MovieStore: Send + Sync {
    /// All movies in insertion order
    fn list(&self) -> AppResult<Vec<Movie>>;
    fn get(&self, title: &str) -> AppResult<Option<Movie>>;
    fn add(&self, movie: &Movie) -> AppResult<()>;
    fn update(&self, title: &str, new_rating: f64) -> AppResult<()>;
    fn delete(&self, title: &str) -> AppResult<()>;
    /// Atomically moves a record to a new title, keeping its other fields
    fn rename(&self, old_title: &str, new_title: &str) -> AppResult<Movie>;
}

pub struct SqliteMovieStore {
    pool: ConnectionPool,
    write_lock: RwLock<()>,
}

impl SqliteMovieStore {
    /// Open (or create) the catalog at `db_path`.
    ///
    /// A file that exists but is not a usable catalog fails with
    /// `StorageUnavailable`; a missing file becomes an empty catalog.
    pub fn open(db_path: &Path, pool_size: u32) -> AppResult<Self> {
        {
            let conn = open_connection(db_path)?;
            initialize_database(&conn)?;
        }
        let pool = create_connection_pool(db_path, pool_size)?;

        log::info!("Opened movie store at {}", db_path.display());

        Ok(Self {
            pool,
            write_lock: RwLock::new(()),
        })
    }

    fn read_guard(&self) -> AppResult<RwLockReadGuard<'_, ()>> {
        self.write_lock
            .read()
            .map_err(|_| AppError::StorageUnavailable("store lock poisoned".to_string()))
    }

    fn write_guard(&self) -> AppResult<RwLockWriteGuard<'_, ()>> {
        self.write_lock
            .write()
            .map_err(|_| AppError::StorageUnavailable("store lock poisoned".to_string()))
    }

    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        Ok(Movie {
            title: row.get("title")?,
            year: row.get("year")?,
            rating: row.get("rating")?,
            poster: row.get("poster")?,
        })
    }

    fn find_in(tx: &Transaction, title: &str) -> AppResult<Option<Movie>> {
        let movie = tx
            .query_row(
                "SELECT title, year, rating, poster FROM movies WHERE title = ?1",
                params![title],
                Self::row_to_movie,
            )
            .optional()?;
        Ok(movie)
    }

    fn insert_in(tx: &Transaction, movie: &Movie) -> AppResult<()> {
        tx.execute(
            "INSERT INTO movies (title, year, rating, poster) VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.year, movie.rating, movie.poster],
        )?;
        Ok(())
    }
}

impl MovieStore for SqliteMovieStore {
    fn list(&self) -> AppResult<Vec<Movie>> {
        let _guard = self.read_guard()?;
        let conn = get_connection(&self.pool)?;

        let mut stmt =
            conn.prepare("SELECT title, year, rating, poster FROM movies ORDER BY rowid")?;

        let movies: Vec<Movie> = stmt
            .query_map([], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn get(&self, title: &str) -> AppResult<Option<Movie>> {
        let _guard = self.read_guard()?;
        let conn = get_connection(&self.pool)?;

        let movie = conn
            .query_row(
                "SELECT title, year, rating, poster FROM movies WHERE title = ?1",
                params![title],
                Self::row_to_movie,
            )
            .optional()?;

        Ok(movie)
    }

    fn add(&self, movie: &Movie) -> AppResult<()> {
        validate_movie(movie)?;

        let _guard = self.write_guard()?;
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if Self::find_in(&tx, &movie.title)?.is_some() {
            return Err(AppError::DuplicateTitle(movie.title.clone()));
        }

        Self::insert_in(&tx, movie)?;
        tx.commit()?;

        log::info!("Added movie '{}' ({})", movie.title, movie.year);
        Ok(())
    }

    fn update(&self, title: &str, new_rating: f64) -> AppResult<()> {
        validate_rating(new_rating)?;

        let _guard = self.write_guard()?;
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn.execute(
            "UPDATE movies SET rating = ?1 WHERE title = ?2",
            params![new_rating, title],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(title.to_string()));
        }

        log::info!("Updated rating of '{}' to {}", title, new_rating);
        Ok(())
    }

    fn delete(&self, title: &str) -> AppResult<()> {
        let _guard = self.write_guard()?;
        let conn = get_connection(&self.pool)?;

        let rows_affected = conn.execute("DELETE FROM movies WHERE title = ?1", params![title])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(title.to_string()));
        }

        log::info!("Deleted movie '{}'", title);
        Ok(())
    }

    fn rename(&self, old_title: &str, new_title: &str) -> AppResult<Movie> {
        validate_title(new_title)?;

        let _guard = self.write_guard()?;
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        // Every early return drops `tx`, which rolls back.
        let original =
            Self::find_in(&tx, old_title)?.ok_or_else(|| AppError::NotFound(old_title.to_string()))?;

        if Self::find_in(&tx, new_title)?.is_some() {
            return Err(AppError::DuplicateTitle(new_title.to_string()));
        }

        let renamed = original.retitled(new_title);

        tx.execute("DELETE FROM movies WHERE title = ?1", params![old_title])?;
        Self::insert_in(&tx, &renamed)?;
        tx.commit()?;

        log::info!("Renamed movie '{}' to '{}'", old_title, new_title);
        Ok(renamed)
    }
}
