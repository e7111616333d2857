// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - The store is the sole owner of the backing file
// - Record invariants are checked again here before any write
// - No network access, no presentation
// - Explicit SQL only

pub mod movie_repository;

pub use movie_repository::{MovieStore, SqliteMovieStore};
