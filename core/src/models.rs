// core/src/models.rs

//! Records persisted by the catalog and cart stores, the views derived from
//! them, and the identity claims the authorization gate inspects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything carrying a numeric record id. Used by [`crate::pricing::generate_id`].
pub trait Identified {
  fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price: f64,
}

impl Identified for Product {
  fn id(&self) -> i64 {
    self.id
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: i64,
  // Not a foreign key: the product may have been deleted since.
  pub product_id: i64,
  pub quantity: f64,
  pub added_at: DateTime<Utc>,
}

impl Identified for CartItem {
  fn id(&self) -> i64 {
    self.id
  }
}

/// A cart line joined against the catalog. `product` is `None` (and
/// `subtotal` is zero) for orphaned lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineDetail {
  #[serde(flatten)]
  pub item: CartItem,
  pub product: Option<Product>,
  pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
  pub items: Vec<CartLineDetail>,
  pub balance: f64,
  /// Includes the quantities of orphaned lines, unlike `balance`.
  pub item_count: f64,
}

impl CartSummary {
  pub fn empty() -> Self {
    Self {
      items: Vec::new(),
      balance: 0.0,
      item_count: 0.0,
    }
  }
}

impl Default for CartSummary {
  fn default() -> Self {
    Self::empty()
  }
}

/// The `roles` claim as it arrived in the token.
///
/// Anything other than a list of strings lands in `Malformed` and is never
/// treated as a one-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleClaim {
  Listed(Vec<String>),
  Malformed(serde_json::Value),
}

impl RoleClaim {
  pub fn from_roles<I, S>(roles: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    RoleClaim::Listed(roles.into_iter().map(Into::into).collect())
  }
}

/// Decoded identity assertions carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  #[serde(default)]
  pub email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub roles: Option<RoleClaim>,
  #[serde(default)]
  pub iat: u64,
  pub exp: u64,
}
