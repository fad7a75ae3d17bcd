// server/src/db/mod.rs

//! Relational storage backend.

pub mod postgres;

pub use postgres::PgStore;
