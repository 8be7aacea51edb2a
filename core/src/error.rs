// core/src/error.rs
use anyhow::Error as AnyhowError;
use std::fmt;
use thiserror::Error;

/// Every message produced by a failed validation pass, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
  pub fn new() -> Self {
    Self(Vec::new())
  }

  pub fn push(&mut self, message: impl Into<String>) {
    self.0.push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn messages(&self) -> &[String] {
    &self.0
  }

  pub fn into_messages(self) -> Vec<String> {
    self.0
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0.join("; "))
  }
}

impl From<Vec<String>> for ValidationErrors {
  fn from(messages: Vec<String>) -> Self {
    Self(messages)
  }
}

#[derive(Debug, Error)]
pub enum ShopError {
  #[error("Forbidden: {reason}")]
  Forbidden { reason: String },

  #[error("Validation failed: {0}")]
  Validation(ValidationErrors),

  #[error("Data source '{store}' is unavailable. Source: {source}")]
  DataUnavailable {
    store: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Internal shop error: {0}")]
  Internal(String),
}

impl ShopError {
  pub fn data_unavailable(store: impl Into<String>, source: impl Into<AnyhowError>) -> Self {
    ShopError::DataUnavailable {
      store: store.into(),
      source: source.into(),
    }
  }
}

impl From<ValidationErrors> for ShopError {
  fn from(errors: ValidationErrors) -> Self {
    ShopError::Validation(errors)
  }
}

pub type ShopResult<T, E = ShopError> = std::result::Result<T, E>;
