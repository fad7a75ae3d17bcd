// server/src/web/handlers/visitor_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_visitors", skip(app_state))]
pub async fn list_visitors_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let visitors = app_state.visitors.list_visitors().await?;
  info!("Fetched {} visitor entries.", visitors.len());
  Ok(HttpResponse::Ok().json(visitors))
}

#[instrument(name = "handler::delete_visitor", skip(app_state, path), fields(visitor_id = %path.as_ref()))]
pub async fn delete_visitor_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  app_state.visitors.delete_visitor(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
