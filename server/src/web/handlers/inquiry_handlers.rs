// server/src/web/handlers/inquiry_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;

/// Accepts any payload, JSON or not, including an empty body. Inquiries are
/// only logged; nothing is stored or sent.
#[instrument(name = "handler::submit_inquiry", skip(body), fields(payload_bytes = body.len()))]
pub async fn submit_inquiry_handler(body: web::Bytes) -> Result<HttpResponse, AppError> {
  match serde_json::from_slice::<serde_json::Value>(&body) {
    Ok(inquiry) => info!(inquiry = %inquiry, "New inquiry received."),
    Err(_) => {
      let raw = String::from_utf8_lossy(&body);
      info!(inquiry = %raw, "New non-JSON inquiry received.");
    }
  }
  Ok(HttpResponse::Ok().json(json!({ "message": "Inquiry submitted successfully" })))
}
