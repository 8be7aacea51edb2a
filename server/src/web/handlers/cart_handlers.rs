// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use shopfront_core::{CartItemInput, QuantityInput};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::cart_service::{self, CartChange};
use crate::state::AppState;
use crate::web::Member;

#[instrument(name = "handler::view_cart", skip_all, fields(user_id = %member.0.sub))]
pub async fn view_cart_handler(member: Member, app_state: web::Data<AppState>) -> HttpResponse {
  let summary = cart_service::cart_summary(app_state.cart.as_ref(), app_state.products.as_ref()).await;
  HttpResponse::Ok().json(summary)
}

#[instrument(name = "handler::add_to_cart", skip_all, fields(user_id = %member.0.sub))]
pub async fn add_to_cart_handler(
  member: Member,
  app_state: web::Data<AppState>,
  req_payload: web::Json<CartItemInput>,
) -> Result<HttpResponse, AppError> {
  let (cart_item, change) =
    cart_service::add_to_cart(app_state.cart.as_ref(), app_state.products.as_ref(), &req_payload).await?;
  info!(
    "Add to cart successful. Item ID: {}, Product ID: {}, Quantity: {}",
    cart_item.id, cart_item.product_id, cart_item.quantity
  );

  let mut response = match change {
    CartChange::Added => HttpResponse::Created(),
    CartChange::Merged => HttpResponse::Ok(),
  };
  Ok(response.json(json!({
      "message": "Item added to cart successfully.",
      "cartItem": cart_item
  })))
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, path, req_payload, member),
    fields(item_id = %path.as_ref(), user_id = %member.0.sub)
)]
pub async fn update_cart_item_handler(
  member: Member,
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<QuantityInput>,
) -> Result<HttpResponse, AppError> {
  let cart_item = cart_service::update_quantity(app_state.cart.as_ref(), path.into_inner(), &req_payload).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart item updated successfully.",
      "cartItem": cart_item
  })))
}

#[instrument(
    name = "handler::remove_cart_item",
    skip(app_state, path, member),
    fields(item_id = %path.as_ref(), user_id = %member.0.sub)
)]
pub async fn remove_cart_item_handler(
  member: Member,
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let cart_item = cart_service::remove_item(app_state.cart.as_ref(), path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart item removed successfully.",
      "cartItem": cart_item
  })))
}

#[instrument(name = "handler::clear_cart", skip_all, fields(user_id = %member.0.sub))]
pub async fn clear_cart_handler(member: Member, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  cart_service::clear_cart(app_state.cart.as_ref()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart cleared successfully."
  })))
}
