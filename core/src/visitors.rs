// core/src/visitors.rs

//! Best-effort request log.
//!
//! `log_visit` is attached to every inbound request and therefore must never
//! fail the request it rides on: lookup errors degrade to an unknown location
//! and persistence errors are only reported through tracing.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use crate::error::{KennelError, KennelResult};
use crate::geo::{is_public, GeoLocation, GeoLocator};
use crate::models::{NewVisit, Visitor};
use crate::store::Store;

const ENTITY: &str = "Visitor";

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// Paths not recorded by default, so reading the log does not grow it.
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &["/api/visitors"];

#[derive(Clone)]
pub struct VisitorLog {
  store: Arc<dyn Store>,
  locator: Arc<dyn GeoLocator>,
  lookup_timeout: Duration,
  skip_prefixes: Arc<Vec<String>>,
}

impl VisitorLog {
  pub fn new(store: Arc<dyn Store>, locator: Arc<dyn GeoLocator>) -> Self {
    Self {
      store,
      locator,
      lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
      skip_prefixes: Arc::new(DEFAULT_SKIP_PREFIXES.iter().map(|p| p.to_string()).collect()),
    }
  }

  pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
    self.lookup_timeout = lookup_timeout;
    self
  }

  /// Replaces the skip list. An empty list records every path.
  pub fn with_skip_prefixes(mut self, prefixes: Vec<String>) -> Self {
    self.skip_prefixes = Arc::new(prefixes);
    self
  }

  pub fn should_log(&self, path: &str) -> bool {
    !self.skip_prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
  }

  /// Records one visit. Returns `None` if the record could not be stored.
  #[instrument(name = "visitors::log_visit", skip(self, user_agent))]
  pub async fn log_visit(&self, ip: &str, user_agent: Option<String>, path: &str) -> Option<Visitor> {
    let location = self.resolve(ip).await;
    let visitor = NewVisit::new(ip, user_agent, path)
      .located(location)
      .into_visitor(Uuid::new_v4(), Utc::now());

    match self.store.insert_visitor(visitor.clone()).await {
      Ok(()) => {
        debug!(visitor_id = %visitor.id, country = ?visitor.country, "Visit recorded.");
        Some(visitor)
      }
      Err(e) => {
        error!(error = %e, "Failed to record visit.");
        None
      }
    }
  }

  async fn resolve(&self, ip: &str) -> GeoLocation {
    let addr = match ip.parse::<IpAddr>() {
      Ok(addr) if is_public(&addr) => addr,
      Ok(_) => return GeoLocation::unknown(),
      Err(_) => {
        debug!(ip, "Unparseable client address, skipping geolocation.");
        return GeoLocation::unknown();
      }
    };

    match tokio::time::timeout(self.lookup_timeout, self.locator.locate(addr)).await {
      Ok(Ok(location)) => location,
      Ok(Err(e)) => {
        warn!(error = %e, %addr, "Geolocation lookup failed.");
        GeoLocation::unknown()
      }
      Err(_) => {
        warn!(%addr, timeout_ms = self.lookup_timeout.as_millis() as u64, "Geolocation lookup timed out.");
        GeoLocation::unknown()
      }
    }
  }

  #[instrument(name = "visitors::list_visitors", skip(self), err(Display))]
  pub async fn list_visitors(&self) -> KennelResult<Vec<Visitor>> {
    self.store.list_visitors().await
  }

  #[instrument(name = "visitors::delete_visitor", skip(self), err(Display))]
  pub async fn delete_visitor(&self, id: Uuid) -> KennelResult<()> {
    if !self.store.delete_visitor(id).await? {
      return Err(KennelError::not_found(ENTITY, id));
    }
    Ok(())
  }
}
