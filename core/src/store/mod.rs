// core/src/store/mod.rs

//! Persistence seam shared by the catalog and the visitor log.
//!
//! Implementations own both collections outright. The services built on top
//! hold no state of their own, so swapping the backend at startup is the only
//! configuration a deployment needs.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::KennelResult;
use crate::models::{Puppy, Visitor};

pub mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait Store: Send + Sync {
  async fn list_puppies(&self) -> KennelResult<Vec<Puppy>>;

  async fn get_puppy(&self, id: Uuid) -> KennelResult<Option<Puppy>>;

  async fn count_puppies(&self) -> KennelResult<usize>;

  async fn insert_puppy(&self, puppy: Puppy) -> KennelResult<()>;

  /// Overwrites the stored record with the same id. Returns `false` if none exists.
  async fn replace_puppy(&self, puppy: &Puppy) -> KennelResult<bool>;

  /// Returns `false` if no record had this id.
  async fn delete_puppy(&self, id: Uuid) -> KennelResult<bool>;

  async fn insert_visitor(&self, visitor: Visitor) -> KennelResult<()>;

  /// Newest first, by `visit_time`.
  async fn list_visitors(&self) -> KennelResult<Vec<Visitor>>;

  async fn delete_visitor(&self, id: Uuid) -> KennelResult<bool>;
}
