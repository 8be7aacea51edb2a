// server/src/services/catalog_service.rs

//! Product catalog operations over a whole-collection store.
//!
//! Each mutation is a load, modify, save cycle with no lock held across it.
//! Concurrent admin writes race and the last save wins.

use crate::errors::{AppError, Result};
use crate::models::Product;
use shopfront_core::{generate_id, validate_product, ProductInput, ProductPatch, Store};
use tracing::{info, instrument, warn};

fn not_found(product_id: i64) -> AppError {
  AppError::NotFound(format!("Product with ID {} not found.", product_id))
}

#[instrument(name = "catalog_service::list_products", skip(store))]
pub async fn list_products(store: &dyn Store<Product>) -> Result<Vec<Product>> {
  Ok(store.load().await?)
}

#[instrument(name = "catalog_service::get_product", skip(store))]
pub async fn get_product(store: &dyn Store<Product>, product_id: i64) -> Result<Product> {
  store
    .load()
    .await?
    .into_iter()
    .find(|p| p.id == product_id)
    .ok_or_else(|| not_found(product_id))
}

#[instrument(name = "catalog_service::create_product", skip(store, input))]
pub async fn create_product(store: &dyn Store<Product>, input: &ProductInput) -> Result<Product> {
  let errors = validate_product(Some(input));
  if !errors.is_empty() {
    warn!(?errors, "Rejected product payload.");
    return Err(AppError::Validation(errors));
  }

  let mut products = store.load().await?;
  let product = input.to_product(generate_id(Some(products.as_slice()))?)?;
  products.push(product.clone());
  store.save(&products).await?;

  info!(product_id = product.id, name = %product.name, "Product created.");
  Ok(product)
}

#[instrument(name = "catalog_service::update_product", skip(store, patch))]
pub async fn update_product(store: &dyn Store<Product>, product_id: i64, patch: &ProductPatch) -> Result<Product> {
  let mut products = store.load().await?;
  let slot = products
    .iter_mut()
    .find(|p| p.id == product_id)
    .ok_or_else(|| not_found(product_id))?;

  let candidate = patch.merged_onto(slot);
  let errors = validate_product(Some(&candidate));
  if !errors.is_empty() {
    warn!(?errors, "Rejected product update.");
    return Err(AppError::Validation(errors));
  }
  *slot = candidate.to_product(product_id)?;
  let updated = slot.clone();
  store.save(&products).await?;

  info!(product_id, name = %updated.name, price = updated.price, "Product updated.");
  Ok(updated)
}

/// Cart lines pointing at the removed product are left alone; they price
/// at zero from now on.
#[instrument(name = "catalog_service::delete_product", skip(store))]
pub async fn delete_product(store: &dyn Store<Product>, product_id: i64) -> Result<Product> {
  let mut products = store.load().await?;
  let index = products
    .iter()
    .position(|p| p.id == product_id)
    .ok_or_else(|| not_found(product_id))?;
  let removed = products.remove(index);
  store.save(&products).await?;

  info!(product_id, "Product deleted.");
  Ok(removed)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use shopfront_core::MemoryStore;

  fn seeded() -> MemoryStore<Product> {
    MemoryStore::new(
      "products",
      vec![
        Product { id: 1, name: "Kettle".to_string(), price: 30.0 },
        Product { id: 5, name: "Teapot".to_string(), price: 18.5 },
      ],
    )
  }

  #[actix_rt::test]
  async fn create_assigns_next_id() {
    let store = seeded();
    let created = create_product(&store, &ProductInput::new("Mug", "7.25")).await.unwrap();
    assert_eq!(created, Product { id: 6, name: "Mug".to_string(), price: 7.25 });
    assert_eq!(store.snapshot().len(), 3);
  }

  #[actix_rt::test]
  async fn create_reports_every_validation_error() {
    let store = seeded();
    match create_product(&store, &ProductInput::default()).await {
      Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 2),
      other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(store.snapshot().len(), 2);
  }

  #[actix_rt::test]
  async fn update_merges_and_revalidates() {
    let store = seeded();
    let patch: ProductPatch = serde_json::from_value(json!({"price": 21})).unwrap();
    let updated = update_product(&store, 5, &patch).await.unwrap();
    assert_eq!(updated.name, "Teapot");
    assert_eq!(updated.price, 21.0);

    let bad: ProductPatch = serde_json::from_value(json!({"price": 0})).unwrap();
    assert!(matches!(update_product(&store, 5, &bad).await, Err(AppError::Validation(_))));
    assert_eq!(get_product(&store, 5).await.unwrap().price, 21.0);
  }

  #[actix_rt::test]
  async fn missing_products_are_not_found() {
    let store = seeded();
    assert!(matches!(get_product(&store, 99).await, Err(AppError::NotFound(_))));
    assert!(matches!(delete_product(&store, 99).await, Err(AppError::NotFound(_))));
    let patch = ProductPatch::default();
    assert!(matches!(update_product(&store, 99, &patch).await, Err(AppError::NotFound(_))));
  }

  #[actix_rt::test]
  async fn delete_removes_only_the_target() {
    let store = seeded();
    let removed = delete_product(&store, 1).await.unwrap();
    assert_eq!(removed.id, 1);
    let remaining: Vec<i64> = list_products(&store).await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![5]);
  }
}
