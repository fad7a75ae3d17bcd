// server/src/lib.rs

//! HTTP service for the puppy catalog: actix-web routes over the `kennel`
//! services, a PostgreSQL store and an ip-api.com geolocation client.

pub mod config;
pub mod db;
pub mod errors;
pub mod geo;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
