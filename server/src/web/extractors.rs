// server/src/web/extractors.rs

//! Request guards that put the authorization gates in front of handlers.
//!
//! Each extractor runs the claims provider (bearer token verification) and
//! then the matching gate. A request without an `Authorization` header has
//! no claims and is rejected by the gate (403); a header carrying a bad or
//! expired token fails in the provider (401).

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use shopfront_core::{AuthorizationGate, Claims};
use tracing::warn;

/// Claims of a caller holding `user` or `admin`.
#[derive(Debug, Clone)]
pub struct Member(pub Claims);

/// Claims of a caller holding `admin`.
#[derive(Debug, Clone)]
pub struct Administrator(pub Claims);

/// `Ok(None)` when the request carries no credentials at all.
fn bearer_claims(req: &HttpRequest) -> Result<Option<Claims>, AppError> {
  let Some(value) = req.headers().get(header::AUTHORIZATION) else {
    return Ok(None);
  };
  let token = value
    .to_str()
    .ok()
    .and_then(|v| v.trim_start().split_once(' '))
    .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
    .map(|(_, token)| token.trim())
    .filter(|t| !t.is_empty())
    .ok_or_else(|| {
      warn!("Authorization header is not a bearer token.");
      AppError::Auth("Authorization header must be 'Bearer <token>'.".to_string())
    })?;

  let state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;
  auth_service::decode_token(token, &state.config.jwt_secret).map(Some)
}

fn pass_gate(req: &HttpRequest, gate: AuthorizationGate) -> Result<Claims, AppError> {
  let claims = bearer_claims(req)?;
  gate.authorize(claims.as_ref()).into_result()?;
  // An accepting gate has seen claims.
  claims.ok_or_else(|| AppError::Internal("Gate accepted a request without claims.".to_string()))
}

impl FromRequest for Member {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(pass_gate(req, AuthorizationGate::member()).map(Member))
  }
}

impl FromRequest for Administrator {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(pass_gate(req, AuthorizationGate::administrator()).map(Administrator))
  }
}
