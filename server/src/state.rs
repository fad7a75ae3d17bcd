// server/src/state.rs
use crate::config::AppConfig;
use kennel::{Catalog, GeoLocator, Store, VisitorLog};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
  pub visitors: VisitorLog,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Wires both services over the same store.
  pub fn new(store: Arc<dyn Store>, locator: Arc<dyn GeoLocator>, config: Arc<AppConfig>) -> Self {
    let visitors = VisitorLog::new(store.clone(), locator)
      .with_lookup_timeout(config.geo_lookup_timeout)
      .with_skip_prefixes(config.visitor_log_skip_prefixes.clone());
    Self {
      catalog: Catalog::new(store),
      visitors,
      config,
    }
  }
}
