// server/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::UserView;
use crate::services::user_service;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct SignupRequestPayload {
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::signup",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SignupRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let user = user_service::signup(app_state.users.as_ref(), &req_payload.email, &req_payload.password).await?;
  info!(user_id = %user.id, "Signup successful.");

  Ok(HttpResponse::Created().json(json!({
      "message": "User created successfully.",
      "user": UserView::from(&user),
  })))
}

#[instrument(
    name = "handler::signin",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let config = &app_state.config;
  let (user, token) = user_service::signin(
    app_state.users.as_ref(),
    &req_payload.email,
    &req_payload.password,
    &config.jwt_secret,
    config.jwt_ttl_secs,
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Signin successful.",
      "userId": user.id.to_string(),
      "email": user.email,
      "roles": user.roles,
      "token": token,
      "expiresIn": config.jwt_ttl_secs,
  })))
}
