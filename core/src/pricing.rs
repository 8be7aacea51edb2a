// core/src/pricing.rs

//! Cart pricing over an in-memory catalog snapshot.
//!
//! Everything here is pure: inputs are borrowed, never mutated, and the
//! same inputs always give the same outputs. Callers are expected to hand
//! in a snapshot nobody else is writing to (single-writer assumption).

use crate::error::{ShopError, ShopResult};
use crate::models::{CartItem, CartLineDetail, CartSummary, Identified, Product};

/// First catalog entry whose id equals `product_id`. Duplicate ids are not
/// defended against.
fn resolve<'a>(products: &'a [Product], product_id: i64) -> Option<&'a Product> {
  products.iter().find(|product| product.id == product_id)
}

/// Sum of `price * quantity` over every line whose product resolves.
/// Orphaned lines contribute zero. No rounding is applied.
pub fn calculate_balance(cart_items: &[CartItem], products: &[Product]) -> f64 {
  cart_items
    .iter()
    .filter_map(|item| resolve(products, item.product_id).map(|product| product.price * item.quantity))
    .sum()
}

pub fn get_cart_with_details(cart_items: &[CartItem], products: &[Product]) -> CartSummary {
  let items = cart_items
    .iter()
    .map(|item| {
      let product = resolve(products, item.product_id).cloned();
      let subtotal = product.as_ref().map_or(0.0, |p| p.price * item.quantity);
      CartLineDetail {
        item: item.clone(),
        product,
        subtotal,
      }
    })
    .collect();

  CartSummary {
    items,
    balance: calculate_balance(cart_items, products),
    item_count: cart_items.iter().map(|item| item.quantity).sum(),
  }
}

/// Next id for a collection: one past the highest existing id, or 1 when
/// there is nothing to look at.
///
/// This is a watermark, not a distributed generator. Two writers reading the
/// same snapshot will hand out the same id. Fails with `Internal` once the
/// highest id is `i64::MAX`.
pub fn generate_id<T: Identified>(existing: Option<&[T]>) -> ShopResult<i64> {
  match existing.and_then(|items| items.iter().map(Identified::id).max()) {
    None => Ok(1),
    Some(max) => max
      .checked_add(1)
      .ok_or_else(|| ShopError::Internal(format!("id space exhausted after {max}"))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn line(id: i64, product_id: i64, quantity: f64) -> CartItem {
    CartItem {
      id,
      product_id,
      quantity,
      added_at: Utc::now(),
    }
  }

  #[test]
  fn fractional_quantities_are_priced_without_rounding() {
    let products = vec![Product { id: 1, name: "Rope".to_string(), price: 2.0 }];
    let balance = calculate_balance(&[line(1, 1, 1.5)], &products);
    assert_eq!(balance, 3.0);
  }

  #[test]
  fn first_matching_product_wins() {
    let products = vec![
      Product { id: 1, name: "First".to_string(), price: 1.0 },
      Product { id: 1, name: "Second".to_string(), price: 100.0 },
    ];
    assert_eq!(calculate_balance(&[line(1, 1, 2.0)], &products), 2.0);
  }

  #[test]
  fn all_negative_ids_still_advance() {
    let items = vec![line(-5, 1, 1.0), line(-1, 1, 1.0)];
    assert_eq!(generate_id(Some(items.as_slice())).unwrap(), 0);
  }

  #[test]
  fn exhausted_id_space_is_an_error() {
    let items = vec![line(i64::MAX, 1, 1.0)];
    assert!(matches!(generate_id(Some(items.as_slice())), Err(ShopError::Internal(_))));
  }
}
