// tests/catalog_tests.rs
mod common;
use common::*;
use kennel::models::DEFAULT_HEALTH_STATUS;
use kennel::{seed, Catalog, KennelError, NewPuppy, PuppyPatch};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn test_create_fills_documented_defaults() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();

  let puppy = catalog.create_puppy(rex()).await.unwrap();
  assert!(!puppy.id.is_nil());
  assert!(puppy.is_available);
  assert_eq!(puppy.health_status, DEFAULT_HEALTH_STATUS);
  assert!(puppy.is_vaccinated);
  assert!(puppy.is_insured);
  assert!(puppy.free_delivery);
  assert_eq!(puppy.description, None);
}

#[tokio::test]
async fn test_create_keeps_explicit_optional_values() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let mut input = rex().with_description("Loves water");
  input.is_available = Some(false);
  input.health_status = Some("Recovering from a cold".to_string());
  input.free_delivery = Some(false);

  let puppy = catalog.create_puppy(input).await.unwrap();
  assert!(!puppy.is_available);
  assert!(!puppy.free_delivery);
  assert_eq!(puppy.health_status, "Recovering from a cold");
  assert_eq!(puppy.description.as_deref(), Some("Loves water"));
}

#[tokio::test]
async fn test_get_returns_the_created_record() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let created = catalog.create_puppy(rex().with_images(["/a.jpg", "/b.jpg"])).await.unwrap();
  let fetched = catalog.get_puppy(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_price_changes_only_price() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let before = catalog.create_puppy(rex().with_description("Calm")).await.unwrap();

  let patch = PuppyPatch::from_value(json!({ "price": 4000 })).unwrap();
  let after = catalog.update_puppy(before.id, patch).await.unwrap();

  let mut expected = before.clone();
  expected.price = 4000;
  assert_eq!(after, expected);
  assert_eq!(catalog.get_puppy(before.id).await.unwrap(), expected);
}

#[tokio::test]
async fn test_update_ignores_id_in_body() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let before = catalog.create_puppy(rex()).await.unwrap();
  let patch = PuppyPatch::from_value(json!({ "id": Uuid::new_v4(), "name": "Rexy" })).unwrap();

  let after = catalog.update_puppy(before.id, patch).await.unwrap();
  assert_eq!(after.id, before.id);
  assert_eq!(after.name, "Rexy");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let puppy = catalog.create_puppy(rex()).await.unwrap();

  catalog.delete_puppy(puppy.id).await.unwrap();
  let err = catalog.get_puppy(puppy.id).await.unwrap_err();
  assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_and_delete_unknown_id_are_not_found() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let missing = Uuid::new_v4();

  let update_err = catalog.update_puppy(missing, PuppyPatch::default()).await.unwrap_err();
  assert!(update_err.is_not_found());
  let delete_err = catalog.delete_puppy(missing).await.unwrap_err();
  assert!(delete_err.is_not_found());
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();

  let mut blank_name = rex();
  blank_name.name = "  ".to_string();
  assert!(matches!(catalog.create_puppy(blank_name).await, Err(KennelError::Validation(_))));

  let negative = NewPuppy { price: -5, ..rex() };
  assert!(matches!(catalog.create_puppy(negative).await, Err(KennelError::Validation(_))));

  let missing_breed = NewPuppy::from_value(json!({
    "name": "Rex", "age": "6 weeks", "weight": "8 lbs",
    "gender": "Male", "price": 1500, "color": "Black"
  }));
  match missing_breed {
    Err(KennelError::Validation(msg)) => assert!(msg.contains("breed")),
    other => panic!("Expected KennelError::Validation, got {:?}", other),
  }

  let bad_gender = NewPuppy::from_value(json!({
    "name": "Rex", "breed": "Lab", "age": "6 weeks", "weight": "8 lbs",
    "gender": "Unknown", "price": 1500, "color": "Black"
  }));
  assert!(matches!(bad_gender, Err(KennelError::Validation(_))));

  assert!(catalog.list_puppies().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_invalid_patch_without_touching_record() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let puppy = catalog.create_puppy(rex()).await.unwrap();

  let patch = PuppyPatch::from_value(json!({ "price": -1, "name": "Nope" })).unwrap();
  assert!(matches!(catalog.update_puppy(puppy.id, patch).await, Err(KennelError::Validation(_))));
  assert_eq!(catalog.get_puppy(puppy.id).await.unwrap(), puppy);
}

#[tokio::test]
async fn test_list_returns_every_listing() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();
  let first = catalog.create_puppy(rex()).await.unwrap();
  let second = catalog.create_puppy(NewPuppy { name: "Max".to_string(), ..rex() }).await.unwrap();

  let listed = catalog.list_puppies().await.unwrap();
  assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn test_seed_only_populates_an_empty_catalog() {
  setup_tracing();
  let (_store, catalog) = memory_catalog();

  assert_eq!(catalog.seed_if_empty(seed::default_puppies()).await.unwrap(), 3);
  assert_eq!(catalog.seed_if_empty(seed::default_puppies()).await.unwrap(), 0);

  let names: Vec<String> = catalog.list_puppies().await.unwrap().into_iter().map(|p| p.name).collect();
  assert_eq!(names, vec!["Thunder & Storm Twins", "Blaze", "Scout"]);
}

#[tokio::test]
async fn test_store_failures_surface_as_store_errors() {
  setup_tracing();
  let catalog = Catalog::new(Arc::new(BrokenStore));

  assert!(matches!(catalog.list_puppies().await, Err(KennelError::Store { .. })));
  assert!(matches!(catalog.get_puppy(Uuid::new_v4()).await, Err(KennelError::Store { .. })));
  assert!(matches!(catalog.create_puppy(rex()).await, Err(KennelError::Store { .. })));
}
