// server/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{inquiry_handlers, puppy_handlers, visitor_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // Extractor failures go through AppError so every error body has the same shape.
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
    .app_data(web::PathConfig::default().error_handler(|err, _req| AppError::NotFound(err.to_string()).into()));

  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/puppies")
          .route("", web::get().to(puppy_handlers::list_puppies_handler))
          .route("", web::post().to(puppy_handlers::create_puppy_handler))
          .route("/{puppy_id}", web::get().to(puppy_handlers::get_puppy_handler))
          .route("/{puppy_id}", web::patch().to(puppy_handlers::update_puppy_handler))
          .route("/{puppy_id}", web::delete().to(puppy_handlers::delete_puppy_handler)),
      )
      .route("/inquiries", web::post().to(inquiry_handlers::submit_inquiry_handler))
      .service(
        web::scope("/visitors")
          .route("", web::get().to(visitor_handlers::list_visitors_handler))
          .route("/{visitor_id}", web::delete().to(visitor_handlers::delete_visitor_handler)),
      ),
  );
}
