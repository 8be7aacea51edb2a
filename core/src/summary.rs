// core/src/summary.rs

use crate::models::{CartItem, CartSummary, Product};
use crate::pricing::get_cart_with_details;
use crate::store::Store;
use tracing::{info, instrument, warn};

/// Reads the cart and the catalog and prices the cart.
///
/// Fail-soft: if either source cannot be read, the result is the empty
/// summary. The failure is logged and never reaches the caller.
#[instrument(name = "summary::load_cart_summary", skip_all)]
pub async fn load_cart_summary(
  cart_store: &dyn Store<CartItem>,
  catalog_store: &dyn Store<Product>,
) -> CartSummary {
  let cart_items = match cart_store.load().await {
    Ok(items) => items,
    Err(e) => {
      warn!(store = cart_store.name(), error = %e, "Cart unreadable, returning empty summary.");
      return CartSummary::empty();
    }
  };
  let products = match catalog_store.load().await {
    Ok(products) => products,
    Err(e) => {
      warn!(store = catalog_store.name(), error = %e, "Catalog unreadable, returning empty summary.");
      return CartSummary::empty();
    }
  };

  let summary = get_cart_with_details(&cart_items, &products);
  info!(
    lines = summary.items.len(),
    balance = summary.balance,
    item_count = summary.item_count,
    "Cart summary computed."
  );
  summary
}
