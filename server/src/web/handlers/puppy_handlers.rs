// server/src/web/handlers/puppy_handlers.rs

use actix_web::{web, HttpResponse};
use kennel::{NewPuppy, PuppyPatch};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_puppies", skip(app_state))]
pub async fn list_puppies_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let puppies = app_state.catalog.list_puppies().await?;
  info!("Successfully fetched {} puppies.", puppies.len());
  Ok(HttpResponse::Ok().json(puppies))
}

#[instrument(name = "handler::get_puppy", skip(app_state, path), fields(puppy_id = %path.as_ref()))]
pub async fn get_puppy_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  let puppy = app_state.catalog.get_puppy(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(puppy))
}

// The body is taken as a raw JSON value so that shape errors (missing fields,
// a non-numeric price) come back as validation messages from the catalog.
#[instrument(name = "handler::create_puppy", skip(app_state, body))]
pub async fn create_puppy_handler(
  app_state: web::Data<AppState>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  let input = NewPuppy::from_value(body.into_inner())?;
  let puppy = app_state.catalog.create_puppy(input).await?;
  info!(puppy_id = %puppy.id, "Puppy created.");
  Ok(HttpResponse::Created().json(puppy))
}

#[instrument(name = "handler::update_puppy", skip(app_state, path, body), fields(puppy_id = %path.as_ref()))]
pub async fn update_puppy_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  let patch = PuppyPatch::from_value(body.into_inner())?;
  let puppy = app_state.catalog.update_puppy(path.into_inner(), patch).await?;
  Ok(HttpResponse::Ok().json(puppy))
}

#[instrument(name = "handler::delete_puppy", skip(app_state, path), fields(puppy_id = %path.as_ref()))]
pub async fn delete_puppy_handler(app_state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
  app_state.catalog.delete_puppy(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
