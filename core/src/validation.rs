// core/src/validation.rs

//! Boundary validation for product and cart payloads.
//!
//! Payload fields are kept loosely typed ([`InputValue`]) so that a single
//! pass can report every broken rule at once instead of failing on the
//! first field serde rejects.

use crate::error::{ShopError, ShopResult, ValidationErrors};
use crate::models::Product;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required and must be a non-empty string";
pub const NAME_TOO_LONG: &str = "Name must be at most 100 characters";
pub const PRICE_REQUIRED: &str = "Price is required and must be a positive number";
pub const PRODUCT_ID_REQUIRED: &str = "Product ID is required and must be a positive integer";
pub const QUANTITY_OUT_OF_RANGE: &str = "Quantity must be an integer between 1 and 1000";

pub const MAX_NAME_CHARS: usize = 100;
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 1000;

/// A raw JSON field value as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
  Number(f64),
  Text(String),
  Other(serde_json::Value),
}

impl InputValue {
  /// Numeric coercion: numbers as-is, strings parsed after trimming.
  pub fn as_number(&self) -> Option<f64> {
    match self {
      InputValue::Number(n) => Some(*n),
      InputValue::Text(s) => {
        let trimmed = s.trim();
        if trimmed.is_empty() {
          None
        } else {
          trimmed.parse::<f64>().ok()
        }
      }
      InputValue::Other(_) => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      InputValue::Text(s) => Some(s),
      _ => None,
    }
  }

  fn as_positive_number(&self) -> Option<f64> {
    self.as_number().filter(|n| n.is_finite() && *n > 0.0)
  }

  fn as_integer(&self) -> Option<i64> {
    self
      .as_number()
      .filter(|n| n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64)
      .map(|n| n as i64)
  }
}

impl From<f64> for InputValue {
  fn from(n: f64) -> Self {
    InputValue::Number(n)
  }
}

impl From<&str> for InputValue {
  fn from(s: &str) -> Self {
    InputValue::Text(s.to_string())
  }
}

impl From<String> for InputValue {
  fn from(s: String) -> Self {
    InputValue::Text(s)
  }
}

/// Body of a product create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
  #[serde(default)]
  pub name: Option<InputValue>,
  #[serde(default)]
  pub price: Option<InputValue>,
}

impl ProductInput {
  pub fn new(name: impl Into<InputValue>, price: impl Into<InputValue>) -> Self {
    Self {
      name: Some(name.into()),
      price: Some(price.into()),
    }
  }

  /// Builds the record to persist. Re-runs validation, so a payload that was
  /// never checked cannot slip through.
  pub fn to_product(&self, id: i64) -> ShopResult<Product> {
    let errors = validate_product(Some(self));
    if !errors.is_empty() {
      return Err(ShopError::Validation(errors.into()));
    }
    let (Some(name), Some(price)) = (
      self.name.as_ref().and_then(InputValue::as_text),
      self.price.as_ref().and_then(InputValue::as_positive_number),
    ) else {
      return Err(ShopError::Internal("validated product input lost a field".to_string()));
    };
    Ok(Product {
      id,
      name: name.trim().to_string(),
      price,
    })
  }
}

impl From<&Product> for ProductInput {
  fn from(product: &Product) -> Self {
    Self::new(product.name.as_str(), product.price)
  }
}

/// Body of a product update request. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
  #[serde(default)]
  pub name: Option<InputValue>,
  #[serde(default)]
  pub price: Option<InputValue>,
}

impl ProductPatch {
  /// The candidate produced by applying this patch to `existing`.
  pub fn merged_onto(&self, existing: &Product) -> ProductInput {
    let base = ProductInput::from(existing);
    ProductInput {
      name: self.name.clone().or(base.name),
      price: self.price.clone().or(base.price),
    }
  }
}

/// Checks a product candidate. Every broken rule is reported; an empty list
/// means the candidate is valid.
pub fn validate_product(candidate: Option<&ProductInput>) -> Vec<String> {
  let mut errors = Vec::new();
  let (name, price) = match candidate {
    Some(input) => (input.name.as_ref(), input.price.as_ref()),
    None => (None, None),
  };

  match name.and_then(InputValue::as_text).map(str::trim) {
    Some(trimmed) if !trimmed.is_empty() => {
      if trimmed.chars().count() > MAX_NAME_CHARS {
        errors.push(NAME_TOO_LONG.to_string());
      }
    }
    _ => errors.push(NAME_REQUIRED.to_string()),
  }

  if price.and_then(InputValue::as_positive_number).is_none() {
    errors.push(PRICE_REQUIRED.to_string());
  }

  errors
}

/// Body of an add-to-cart request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
  #[serde(default)]
  pub product_id: Option<InputValue>,
  #[serde(default)]
  pub quantity: Option<InputValue>,
}

/// A cart item payload that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItemRequest {
  pub product_id: i64,
  pub quantity: u32,
}

pub fn validate_cart_item(input: &CartItemInput) -> Result<CartItemRequest, ValidationErrors> {
  let mut errors = ValidationErrors::new();

  let product_id = input
    .product_id
    .as_ref()
    .and_then(InputValue::as_integer)
    .filter(|id| *id > 0);
  if product_id.is_none() {
    errors.push(PRODUCT_ID_REQUIRED);
  }

  let quantity = match &input.quantity {
    None => Some(MIN_QUANTITY),
    Some(value) => quantity_in_range(value),
  };
  if quantity.is_none() {
    errors.push(QUANTITY_OUT_OF_RANGE);
  }

  match (product_id, quantity) {
    (Some(product_id), Some(quantity)) => Ok(CartItemRequest { product_id, quantity }),
    _ => Err(errors),
  }
}

/// Body of a cart line update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantityInput {
  #[serde(default)]
  pub quantity: Option<InputValue>,
}

/// Unlike add-to-cart, an update must name the new quantity.
pub fn validate_quantity_update(input: &QuantityInput) -> Result<u32, ValidationErrors> {
  input
    .quantity
    .as_ref()
    .and_then(quantity_in_range)
    .ok_or_else(|| vec![QUANTITY_OUT_OF_RANGE.to_string()].into())
}

fn quantity_in_range(value: &InputValue) -> Option<u32> {
  value
    .as_integer()
    .filter(|q| (MIN_QUANTITY as i64..=MAX_QUANTITY as i64).contains(q))
    .map(|q| q as u32)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numeric_strings_coerce_after_trimming() {
    assert_eq!(InputValue::from(" 19.99 ").as_number(), Some(19.99));
    assert_eq!(InputValue::from("").as_number(), None);
    assert_eq!(InputValue::from("abc").as_number(), None);
    assert_eq!(InputValue::Other(serde_json::Value::Bool(true)).as_number(), None);
  }

  #[test]
  fn non_finite_prices_are_rejected() {
    let input = ProductInput::new("Lamp", "inf");
    assert_eq!(validate_product(Some(&input)), vec![PRICE_REQUIRED.to_string()]);
  }

  #[test]
  fn to_product_trims_name_and_coerces_price() {
    let input = ProductInput::new("  Lamp ", "12.50");
    let product = input.to_product(7).unwrap();
    assert_eq!(product, Product { id: 7, name: "Lamp".to_string(), price: 12.5 });
  }

  #[test]
  fn to_product_refuses_invalid_input() {
    let input = ProductInput::new("", 0.0);
    match input.to_product(1) {
      Err(ShopError::Validation(errors)) => assert_eq!(errors.len(), 2),
      other => panic!("Expected validation failure, got {:?}", other),
    }
  }
}
