// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization and verification

pub mod connection;
pub mod schema;

pub use connection::{
    create_connection_pool, get_connection, open_connection, ConnectionPool, PooledConn,
};

pub use schema::{
    initialize_database, verify_database_integrity, verify_movies_schema, MOVIE_COLUMNS,
};
