// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KennelError {
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("Store operation failed. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl KennelError {
  pub fn validation(message: impl Into<String>) -> Self {
    KennelError::Validation(message.into())
  }

  pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
    KennelError::NotFound {
      entity,
      id: id.to_string(),
    }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, KennelError::NotFound { .. })
  }
}

// Backends report their own error types through anyhow; anything arriving this
// way is a persistence failure.
impl From<AnyhowError> for KennelError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<KennelError>() {
      Ok(kennel_err) => kennel_err,
      Err(other) => KennelError::Store { source: other },
    }
  }
}

pub type KennelResult<T, E = KennelError> = std::result::Result<T, E>;
