// tests/validation_tests.rs
mod common;
use common::*;
use serde_json::json;
use shopfront_core::validation::{NAME_REQUIRED, NAME_TOO_LONG, PRICE_REQUIRED, PRODUCT_ID_REQUIRED, QUANTITY_OUT_OF_RANGE};
use shopfront_core::{
  validate_cart_item, validate_product, validate_quantity_update, CartItemInput, CartItemRequest, ProductInput,
  ProductPatch, QuantityInput,
};

fn product_input(body: serde_json::Value) -> ProductInput {
  serde_json::from_value(body).unwrap()
}

fn cart_input(body: serde_json::Value) -> CartItemInput {
  serde_json::from_value(body).unwrap()
}

#[test]
fn test_empty_name_yields_single_name_error() {
  setup_tracing();
  let errors = validate_product(Some(&product_input(json!({"name": "", "price": 19.99}))));
  assert_eq!(errors, vec![NAME_REQUIRED.to_string()]);
}

#[test]
fn test_whitespace_name_is_empty() {
  let errors = validate_product(Some(&product_input(json!({"name": "   ", "price": 5}))));
  assert_eq!(errors, vec![NAME_REQUIRED.to_string()]);
}

#[test]
fn test_negative_price_yields_single_price_error() {
  let errors = validate_product(Some(&product_input(json!({"name": "x", "price": -1}))));
  assert_eq!(errors, vec![PRICE_REQUIRED.to_string()]);
}

#[test]
fn test_zero_and_non_numeric_prices_are_rejected() {
  for price in [json!(0), json!("abc"), json!(""), json!(true), json!([1])] {
    let errors = validate_product(Some(&product_input(json!({"name": "x", "price": price}))));
    assert_eq!(errors, vec![PRICE_REQUIRED.to_string()], "price {:?}", price);
  }
}

#[test]
fn test_empty_object_yields_both_errors() {
  let errors = validate_product(Some(&product_input(json!({}))));
  assert_eq!(errors, vec![NAME_REQUIRED.to_string(), PRICE_REQUIRED.to_string()]);
}

#[test]
fn test_absent_candidate_yields_errors() {
  let errors = validate_product(None);
  assert!(!errors.is_empty());
  assert_eq!(errors.len(), 2);
}

#[test]
fn test_numeric_string_price_is_accepted() {
  let errors = validate_product(Some(&product_input(json!({"name": "x", "price": "19.99"}))));
  assert!(errors.is_empty());
}

#[test]
fn test_non_string_name_is_rejected() {
  let errors = validate_product(Some(&product_input(json!({"name": 42, "price": 3}))));
  assert_eq!(errors, vec![NAME_REQUIRED.to_string()]);
}

#[test]
fn test_null_fields_count_as_missing() {
  let errors = validate_product(Some(&product_input(json!({"name": null, "price": null}))));
  assert_eq!(errors.len(), 2);
}

#[test]
fn test_overlong_name_is_rejected() {
  let name = "n".repeat(101);
  let errors = validate_product(Some(&ProductInput::new(name.as_str(), 1.0)));
  assert_eq!(errors, vec![NAME_TOO_LONG.to_string()]);
  let exact = "n".repeat(100);
  assert!(validate_product(Some(&ProductInput::new(exact.as_str(), 1.0))).is_empty());
}

#[test]
fn test_valid_product_round_trips_through_validation() {
  let inputs = [
    ProductInput::new("Desk", 120.0),
    ProductInput::new(" Chair ", "45.5"),
    ProductInput::new("Pen", 0.01),
  ];
  for (i, input) in inputs.iter().enumerate() {
    assert!(validate_product(Some(input)).is_empty());
    let record = input.to_product(i as i64 + 1).unwrap();
    assert!(validate_product(Some(&ProductInput::from(&record))).is_empty());
  }
}

#[test]
fn test_patch_merges_onto_existing_product() {
  let existing = product(3, 10.0);
  let patch: ProductPatch = serde_json::from_value(json!({"price": "12.5"})).unwrap();
  let merged = patch.merged_onto(&existing);
  assert!(validate_product(Some(&merged)).is_empty());
  let updated = merged.to_product(existing.id).unwrap();
  assert_eq!(updated.name, existing.name);
  assert_eq!(updated.price, 12.5);

  let bad_patch: ProductPatch = serde_json::from_value(json!({"name": ""})).unwrap();
  assert_eq!(validate_product(Some(&bad_patch.merged_onto(&existing))), vec![NAME_REQUIRED.to_string()]);
}

#[test]
fn test_cart_item_quantity_defaults_to_one() {
  let request = validate_cart_item(&cart_input(json!({"productId": 5}))).unwrap();
  assert_eq!(request, CartItemRequest { product_id: 5, quantity: 1 });
}

#[test]
fn test_cart_item_accepts_range_bounds() {
  assert_eq!(validate_cart_item(&cart_input(json!({"productId": 1, "quantity": 1}))).unwrap().quantity, 1);
  assert_eq!(validate_cart_item(&cart_input(json!({"productId": 1, "quantity": 1000}))).unwrap().quantity, 1000);
  assert_eq!(validate_cart_item(&cart_input(json!({"productId": "7", "quantity": "3"}))).unwrap().product_id, 7);
}

#[test]
fn test_cart_item_collects_every_error() {
  let errors = validate_cart_item(&cart_input(json!({"productId": -2, "quantity": 1001}))).unwrap_err();
  assert_eq!(
    errors.into_messages(),
    vec![PRODUCT_ID_REQUIRED.to_string(), QUANTITY_OUT_OF_RANGE.to_string()]
  );
}

#[test]
fn test_cart_item_rejects_fractional_and_missing_values() {
  let errors = validate_cart_item(&cart_input(json!({"productId": 1.5}))).unwrap_err();
  assert_eq!(errors.messages(), &[PRODUCT_ID_REQUIRED.to_string()]);

  let errors = validate_cart_item(&cart_input(json!({}))).unwrap_err();
  assert_eq!(errors.len(), 1);

  let errors = validate_cart_item(&cart_input(json!({"productId": 1, "quantity": 2.5}))).unwrap_err();
  assert_eq!(errors.messages(), &[QUANTITY_OUT_OF_RANGE.to_string()]);

  let errors = validate_cart_item(&cart_input(json!({"productId": 1, "quantity": 0}))).unwrap_err();
  assert_eq!(errors.messages(), &[QUANTITY_OUT_OF_RANGE.to_string()]);
}

#[test]
fn test_quantity_update_requires_a_value() {
  let missing: QuantityInput = serde_json::from_value(json!({})).unwrap();
  assert!(validate_quantity_update(&missing).is_err());
  let ok: QuantityInput = serde_json::from_value(json!({"quantity": 4})).unwrap();
  assert_eq!(validate_quantity_update(&ok).unwrap(), 4);
}
