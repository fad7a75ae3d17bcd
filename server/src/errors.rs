// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use kennel::KennelError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {source}")]
  Store {
    #[source]
    source: anyhow::Error,
  },
}

impl From<KennelError> for AppError {
  fn from(err: KennelError) -> Self {
    match err {
      KennelError::Validation(m) => AppError::Validation(m),
      not_found @ KennelError::NotFound { .. } => AppError::NotFound(not_found.to_string()),
      KennelError::Store { source } => AppError::Store { source },
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) => {
        tracing::warn!(application_error = %self, "Rejecting invalid request");
        HttpResponse::BadRequest().json(json!({"message": m}))
      }
      AppError::NotFound(m) => {
        tracing::info!(application_error = %self, "Responding with not found");
        HttpResponse::NotFound().json(json!({"message": m}))
      }
      // Everything below is a server-side failure; log the full error, keep the body generic.
      AppError::Config(_) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"message": "Configuration issue"}))
      }
      AppError::Store { .. } => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"message": "Store operation failed"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
