// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Memory,
  Postgres,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "memory" => Ok(StorageBackend::Memory),
      "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
      other => Err(AppError::Config(format!(
        "Invalid STORAGE_BACKEND '{}': expected 'memory' or 'postgres'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  pub storage_backend: StorageBackend,
  /// Only required for the postgres backend.
  pub database_url: Option<String>,
  pub database_max_connections: u32,

  // Load the launch listings into an empty catalog on startup
  pub seed_db: bool,

  pub geo_lookup_enabled: bool,
  pub geo_lookup_url: String,
  pub geo_lookup_timeout: Duration,

  pub visitor_log_skip_prefixes: Vec<String>,

  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source. `from_env` passes the process
  /// environment; tests pass a map.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage_backend = get_or("STORAGE_BACKEND", "memory").parse::<StorageBackend>()?;
    let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
    if storage_backend == StorageBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required when STORAGE_BACKEND=postgres)".to_string(),
      ));
    }
    let database_max_connections = get_or("DATABASE_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;

    let seed_db = get_or("SEED_DB", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    let geo_lookup_enabled = get_or("GEO_LOOKUP_ENABLED", "true")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid GEO_LOOKUP_ENABLED value: {}", e)))?;
    let geo_lookup_url = get_or("GEO_LOOKUP_URL", "http://ip-api.com/json")
      .trim_end_matches('/')
      .to_string();
    let geo_lookup_timeout = get_or("GEO_LOOKUP_TIMEOUT_MS", "2000")
      .parse::<u64>()
      .map(Duration::from_millis)
      .map_err(|e| AppError::Config(format!("Invalid GEO_LOOKUP_TIMEOUT_MS: {}", e)))?;

    let visitor_log_skip_prefixes = get_or("VISITOR_LOG_SKIP_PREFIXES", "/api/visitors")
      .split(',')
      .map(str::trim)
      .filter(|prefix| !prefix.is_empty())
      .map(String::from)
      .collect();

    let log_format = match get_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database_url,
      database_max_connections,
      seed_db,
      geo_lookup_enabled,
      geo_lookup_url,
      geo_lookup_timeout,
      visitor_log_skip_prefixes,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
