// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use shopfront_core::{ProductInput, ProductPatch};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::catalog_service;
use crate::state::AppState;
use crate::web::Administrator;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = catalog_service::list_products(app_state.products.as_ref()).await?;
  info!("Fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product = catalog_service::get_product(app_state.products.as_ref(), path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product fetched successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::create_product", skip_all, fields(admin = %admin.0.sub))]
pub async fn create_product_handler(
  admin: Administrator,
  app_state: web::Data<AppState>,
  req_payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let product = catalog_service::create_product(app_state.products.as_ref(), &req_payload).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Product created successfully.",
      "product": product
  })))
}

#[instrument(
    name = "handler::update_product",
    skip(app_state, path, req_payload, admin),
    fields(product_id = %path.as_ref(), admin = %admin.0.sub)
)]
pub async fn update_product_handler(
  admin: Administrator,
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product =
    catalog_service::update_product(app_state.products.as_ref(), path.into_inner(), &req_payload).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product updated successfully.",
      "product": product
  })))
}

#[instrument(
    name = "handler::delete_product",
    skip(app_state, path, admin),
    fields(product_id = %path.as_ref(), admin = %admin.0.sub)
)]
pub async fn delete_product_handler(
  admin: Administrator,
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product = catalog_service::delete_product(app_state.products.as_ref(), path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Product deleted successfully.",
      "product": product
  })))
}
