// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use shopfront_core::ShopError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Data Store Error: {source}")]
  Store {
    #[source]
    source: ShopError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Gate rejections and validation failures keep their HTTP class; only
// genuine store trouble becomes a 500.
impl From<ShopError> for AppError {
  fn from(err: ShopError) -> Self {
    match err {
      ShopError::Forbidden { reason } => AppError::Forbidden(reason),
      ShopError::Validation(errors) => AppError::Validation(errors.into_messages()),
      ShopError::Internal(m) => AppError::Internal(m),
      err @ ShopError::DataUnavailable { .. } => AppError::Store { source: err },
    }
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Auth(_) => StatusCode::UNAUTHORIZED,
      AppError::Forbidden(_) => StatusCode::FORBIDDEN,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Conflict(_) => StatusCode::CONFLICT,
      AppError::Config(_) | AppError::Store { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self.status_code() {
      status if status.is_server_error() => tracing::error!(application_error = %self, "Responding with error"),
      _ => tracing::warn!(application_error = %self, "Responding with client error"),
    }
    let mut response = HttpResponse::build(self.status_code());
    match self {
      AppError::Validation(errors) => response.json(json!({"error": "Validation failed", "errors": errors})),
      AppError::Auth(m) | AppError::Forbidden(m) | AppError::NotFound(m) | AppError::Conflict(m) => {
        response.json(json!({"error": m}))
      }
      AppError::Config(m) => response.json(json!({"error": "Configuration issue", "detail": m})),
      AppError::Store { .. } => response.json(json!({"error": "Data store operation failed"})),
      AppError::Internal(m) => response.json(json!({"error": "An internal error occurred", "detail": m})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use shopfront_core::ValidationErrors;

  #[test]
  fn shop_errors_keep_their_http_class() {
    let forbidden: AppError = ShopError::Forbidden { reason: "no".into() }.into();
    assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

    let invalid: AppError = ShopError::Validation(ValidationErrors::from(vec!["a".to_string(), "b".to_string()])).into();
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(invalid.to_string(), "Validation Error: a; b");

    let unavailable: AppError = ShopError::data_unavailable("cart", anyhow::anyhow!("disk gone")).into();
    assert_eq!(unavailable.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
