// server/src/main.rs

use std::io;
use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use kennel::{seed, GeoLocator, MemoryStore, NoopLocator, Store};

use kennel_server::config::{AppConfig, LogFormat, StorageBackend};
use kennel_server::db::PgStore;
use kennel_server::geo::IpApiLocator;
use kennel_server::state::AppState;
use kennel_server::{telemetry, web};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
  tracing::error!(error = %err, "{}", context);
  io::Error::other(format!("{}: {}", context, err))
}

async fn build_store(config: &AppConfig) -> io::Result<Arc<dyn Store>> {
  match config.storage_backend {
    StorageBackend::Memory => {
      tracing::info!("Using in-memory store; data is lost on restart.");
      Ok(Arc::new(MemoryStore::new()))
    }
    StorageBackend::Postgres => {
      // from_lookup guarantees the URL for this backend
      let url = config.database_url.as_deref().unwrap_or_default();
      let store = PgStore::connect(url, config.database_max_connections)
        .await
        .map_err(|e| startup_error("Failed to connect to the database.", e))?;
      tracing::info!("Successfully connected to the database.");
      store
        .migrate()
        .await
        .map_err(|e| startup_error("Failed to apply database schema.", e))?;
      Ok(Arc::new(store))
    }
  }
}

fn build_locator(config: &AppConfig) -> io::Result<Arc<dyn GeoLocator>> {
  if !config.geo_lookup_enabled {
    tracing::info!("Geolocation lookups disabled.");
    return Ok(Arc::new(NoopLocator));
  }
  let locator = IpApiLocator::new(config.geo_lookup_url.clone(), config.geo_lookup_timeout)
    .map_err(|e| startup_error("Failed to build geolocation client.", e))?;
  Ok(Arc::new(locator))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
  // The log format is itself configuration, so load config before tracing.
  let config_result = AppConfig::from_env();
  let log_format = config_result.as_ref().map(|c| c.log_format).unwrap_or(LogFormat::Pretty);
  telemetry::init_tracing(log_format);

  tracing::info!("Starting puppy catalog server...");

  let app_config = match config_result {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => return Err(startup_error("Failed to load application configuration.", e)),
  };
  tracing::info!(
    backend = ?app_config.storage_backend,
    geo_lookup = app_config.geo_lookup_enabled,
    "Application configuration loaded successfully."
  );

  let store = build_store(&app_config).await?;
  let locator = build_locator(&app_config)?;
  let app_state = AppState::new(store, locator, app_config.clone());

  if app_config.seed_db {
    match app_state.catalog.seed_if_empty(seed::default_puppies()).await {
      Ok(inserted) => tracing::info!(inserted, "Database seeding finished."),
      Err(e) => tracing::error!(error = %e, "Failed to seed database."),
    }
  }

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(from_fn(web::log_visits))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
