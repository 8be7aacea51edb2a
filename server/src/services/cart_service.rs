// server/src/services/cart_service.rs

//! The per-process shopping cart.
//!
//! There is one cart per running service, shared by every member. Like the
//! catalog, it is rewritten whole on every change (single-writer assumption).

use crate::errors::{AppError, Result};
use crate::models::{CartItem, CartSummary, Product};
use chrono::Utc;
use shopfront_core::validation::{MAX_QUANTITY, QUANTITY_OUT_OF_RANGE};
use shopfront_core::{
  generate_id, load_cart_summary, validate_cart_item, validate_quantity_update, CartItemInput, QuantityInput, Store,
};
use tracing::{info, instrument, warn};

/// Whether an add-to-cart call created a new line or grew an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
  Added,
  Merged,
}

fn line_not_found(item_id: i64) -> AppError {
  AppError::NotFound(format!("Cart item with ID {} not found.", item_id))
}

/// Never fails: an unreadable cart or catalog yields the empty summary.
pub async fn cart_summary(cart: &dyn Store<CartItem>, catalog: &dyn Store<Product>) -> CartSummary {
  load_cart_summary(cart, catalog).await
}

#[instrument(name = "cart_service::add_to_cart", skip(cart, catalog, input))]
pub async fn add_to_cart(
  cart: &dyn Store<CartItem>,
  catalog: &dyn Store<Product>,
  input: &CartItemInput,
) -> Result<(CartItem, CartChange)> {
  let request = validate_cart_item(input).map_err(|errors| {
    warn!(%errors, "Rejected cart item payload.");
    AppError::Validation(errors.into_messages())
  })?;

  let products = catalog.load().await?;
  if !products.iter().any(|p| p.id == request.product_id) {
    warn!(product_id = request.product_id, "Add to cart for unknown product.");
    return Err(AppError::NotFound(format!(
      "Product with ID {} not found.",
      request.product_id
    )));
  }

  let mut items = cart.load().await?;
  let (line, change) = match items.iter().position(|item| item.product_id == request.product_id) {
    Some(index) => {
      let existing = &mut items[index];
      let merged = existing.quantity + f64::from(request.quantity);
      if merged > f64::from(MAX_QUANTITY) {
        warn!(item_id = existing.id, merged, "Cart line would exceed the quantity limit.");
        return Err(AppError::Validation(vec![QUANTITY_OUT_OF_RANGE.to_string()]));
      }
      existing.quantity = merged;
      (existing.clone(), CartChange::Merged)
    }
    None => {
      let line = CartItem {
        id: generate_id(Some(items.as_slice()))?,
        product_id: request.product_id,
        quantity: f64::from(request.quantity),
        added_at: Utc::now(),
      };
      items.push(line.clone());
      (line, CartChange::Added)
    }
  };
  cart.save(&items).await?;

  info!(
    item_id = line.id,
    product_id = line.product_id,
    quantity = line.quantity,
    ?change,
    "Cart updated."
  );
  Ok((line, change))
}

#[instrument(name = "cart_service::update_quantity", skip(cart, input))]
pub async fn update_quantity(cart: &dyn Store<CartItem>, item_id: i64, input: &QuantityInput) -> Result<CartItem> {
  let quantity =
    validate_quantity_update(input).map_err(|errors| AppError::Validation(errors.into_messages()))?;

  let mut items = cart.load().await?;
  let line = items
    .iter_mut()
    .find(|item| item.id == item_id)
    .ok_or_else(|| line_not_found(item_id))?;
  line.quantity = f64::from(quantity);
  let updated = line.clone();
  cart.save(&items).await?;

  info!(item_id, quantity, "Cart line quantity set.");
  Ok(updated)
}

#[instrument(name = "cart_service::remove_item", skip(cart))]
pub async fn remove_item(cart: &dyn Store<CartItem>, item_id: i64) -> Result<CartItem> {
  let mut items = cart.load().await?;
  let index = items
    .iter()
    .position(|item| item.id == item_id)
    .ok_or_else(|| line_not_found(item_id))?;
  let removed = items.remove(index);
  cart.save(&items).await?;

  info!(item_id, "Cart line removed.");
  Ok(removed)
}

#[instrument(name = "cart_service::clear_cart", skip(cart))]
pub async fn clear_cart(cart: &dyn Store<CartItem>) -> Result<()> {
  cart.save(&[]).await?;
  info!("Cart cleared.");
  Ok(())
}
