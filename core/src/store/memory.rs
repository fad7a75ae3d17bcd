// core/src/store/memory.rs
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::Store;
use crate::error::KennelResult;
use crate::models::{Puppy, Visitor};

/// Process-local store. Both collections sit behind `parking_lot` locks; no
/// guard is ever held across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  puppies: RwLock<Vec<Puppy>>,
  visitors: RwLock<Vec<Visitor>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn list_puppies(&self) -> KennelResult<Vec<Puppy>> {
    Ok(self.puppies.read().clone())
  }

  async fn get_puppy(&self, id: Uuid) -> KennelResult<Option<Puppy>> {
    Ok(self.puppies.read().iter().find(|p| p.id == id).cloned())
  }

  async fn count_puppies(&self) -> KennelResult<usize> {
    Ok(self.puppies.read().len())
  }

  async fn insert_puppy(&self, puppy: Puppy) -> KennelResult<()> {
    self.puppies.write().push(puppy);
    Ok(())
  }

  async fn replace_puppy(&self, puppy: &Puppy) -> KennelResult<bool> {
    let mut guard = self.puppies.write();
    match guard.iter_mut().find(|p| p.id == puppy.id) {
      Some(slot) => {
        *slot = puppy.clone();
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn delete_puppy(&self, id: Uuid) -> KennelResult<bool> {
    let mut guard = self.puppies.write();
    let before = guard.len();
    guard.retain(|p| p.id != id);
    Ok(guard.len() != before)
  }

  async fn insert_visitor(&self, visitor: Visitor) -> KennelResult<()> {
    self.visitors.write().push(visitor);
    Ok(())
  }

  async fn list_visitors(&self) -> KennelResult<Vec<Visitor>> {
    let mut visitors = self.visitors.read().clone();
    // Stable sort keeps later inserts ahead when timestamps tie.
    visitors.reverse();
    visitors.sort_by(|a, b| b.visit_time.cmp(&a.visit_time));
    Ok(visitors)
  }

  async fn delete_visitor(&self, id: Uuid) -> KennelResult<bool> {
    let mut guard = self.visitors.write();
    let before = guard.len();
    guard.retain(|v| v.id != id);
    Ok(guard.len() != before)
  }
}
