// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset

use async_trait::async_trait;
use kennel::{Catalog, GeoLocation, GeoLocator, Gender, KennelError, KennelResult, MemoryStore, NewPuppy, Puppy, Store, Visitor, VisitorLog};
use std::net::IpAddr;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;

// --- Fixtures ---
pub fn rex() -> NewPuppy {
  NewPuppy::new("Rex", "Lab", "6 weeks", "8 lbs", Gender::Male, 1500, "Black")
}

pub fn memory_catalog() -> (Arc<MemoryStore>, Catalog) {
  let store = Arc::new(MemoryStore::new());
  (store.clone(), Catalog::new(store))
}

// --- Stub locators ---
pub struct FixedLocator {
  pub calls: AtomicUsize,
}

impl FixedLocator {
  pub fn new() -> Self {
    Self { calls: AtomicUsize::new(0) }
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl GeoLocator for FixedLocator {
  async fn locate(&self, _ip: IpAddr) -> anyhow::Result<GeoLocation> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(GeoLocation {
      country: Some("United States".to_string()),
      city: Some("Austin".to_string()),
    })
  }
}

pub struct FailingLocator;

#[async_trait]
impl GeoLocator for FailingLocator {
  async fn locate(&self, _ip: IpAddr) -> anyhow::Result<GeoLocation> {
    anyhow::bail!("lookup service unavailable")
  }
}

pub struct SlowLocator(pub Duration);

#[async_trait]
impl GeoLocator for SlowLocator {
  async fn locate(&self, _ip: IpAddr) -> anyhow::Result<GeoLocation> {
    tokio::time::sleep(self.0).await;
    Ok(GeoLocation {
      country: Some("Too Late".to_string()),
      city: None,
    })
  }
}

// --- A store whose every operation fails ---
pub struct BrokenStore;

fn broken<T>() -> KennelResult<T> {
  Err(KennelError::from(anyhow::anyhow!("connection refused")))
}

#[async_trait]
impl Store for BrokenStore {
  async fn list_puppies(&self) -> KennelResult<Vec<Puppy>> {
    broken()
  }
  async fn get_puppy(&self, _id: Uuid) -> KennelResult<Option<Puppy>> {
    broken()
  }
  async fn count_puppies(&self) -> KennelResult<usize> {
    broken()
  }
  async fn insert_puppy(&self, _puppy: Puppy) -> KennelResult<()> {
    broken()
  }
  async fn replace_puppy(&self, _puppy: &Puppy) -> KennelResult<bool> {
    broken()
  }
  async fn delete_puppy(&self, _id: Uuid) -> KennelResult<bool> {
    broken()
  }
  async fn insert_visitor(&self, _visitor: Visitor) -> KennelResult<()> {
    broken()
  }
  async fn list_visitors(&self) -> KennelResult<Vec<Visitor>> {
    broken()
  }
  async fn delete_visitor(&self, _id: Uuid) -> KennelResult<bool> {
    broken()
  }
}

pub fn visitor_log(store: Arc<dyn Store>, locator: Arc<dyn GeoLocator>) -> VisitorLog {
  VisitorLog::new(store, locator)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
