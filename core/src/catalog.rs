// core/src/catalog.rs

//! CRUD operations over puppy listings.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{KennelError, KennelResult};
use crate::models::{NewPuppy, Puppy, PuppyPatch};
use crate::store::Store;

const ENTITY: &str = "Puppy";

#[derive(Clone)]
pub struct Catalog {
  store: Arc<dyn Store>,
}

impl Catalog {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self { store }
  }

  #[instrument(name = "catalog::list_puppies", skip(self), err(Display))]
  pub async fn list_puppies(&self) -> KennelResult<Vec<Puppy>> {
    let puppies = self.store.list_puppies().await?;
    debug!(count = puppies.len(), "Listed puppies.");
    Ok(puppies)
  }

  #[instrument(name = "catalog::get_puppy", skip(self), err(Display))]
  pub async fn get_puppy(&self, id: Uuid) -> KennelResult<Puppy> {
    self
      .store
      .get_puppy(id)
      .await?
      .ok_or_else(|| KennelError::not_found(ENTITY, id))
  }

  /// Validates the input, assigns a fresh id and persists the full record.
  #[instrument(name = "catalog::create_puppy", skip(self, input), fields(name = %input.name), err(Display))]
  pub async fn create_puppy(&self, input: NewPuppy) -> KennelResult<Puppy> {
    input.validate()?;
    let puppy = input.into_puppy(Uuid::new_v4());
    self.store.insert_puppy(puppy.clone()).await?;
    info!(puppy_id = %puppy.id, "Puppy listing created.");
    Ok(puppy)
  }

  /// Merges the supplied fields onto the stored record. The id never changes.
  #[instrument(name = "catalog::update_puppy", skip(self, patch), err(Display))]
  pub async fn update_puppy(&self, id: Uuid, patch: PuppyPatch) -> KennelResult<Puppy> {
    patch.validate()?;
    let mut puppy = self.get_puppy(id).await?;
    patch.apply(&mut puppy);

    if !self.store.replace_puppy(&puppy).await? {
      // Deleted between the read and the write.
      warn!(puppy_id = %id, "Puppy vanished during update.");
      return Err(KennelError::not_found(ENTITY, id));
    }
    info!(puppy_id = %id, "Puppy listing updated.");
    Ok(puppy)
  }

  #[instrument(name = "catalog::delete_puppy", skip(self), err(Display))]
  pub async fn delete_puppy(&self, id: Uuid) -> KennelResult<()> {
    if !self.store.delete_puppy(id).await? {
      return Err(KennelError::not_found(ENTITY, id));
    }
    info!(puppy_id = %id, "Puppy listing deleted.");
    Ok(())
  }

  /// Inserts `listings` only when the catalog is empty. Returns how many were added.
  #[instrument(name = "catalog::seed_if_empty", skip(self, listings), err(Display))]
  pub async fn seed_if_empty(&self, listings: Vec<NewPuppy>) -> KennelResult<usize> {
    let existing = self.store.count_puppies().await?;
    if existing > 0 {
      info!(existing, "Catalog already populated, skipping seed.");
      return Ok(0);
    }
    let mut inserted = 0;
    for listing in listings {
      self.create_puppy(listing).await?;
      inserted += 1;
    }
    info!(inserted, "Catalog seeded.");
    Ok(inserted)
  }
}
