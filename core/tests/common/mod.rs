// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shopfront_core::{CartItem, Claims, Product, RoleClaim, ShopError, ShopResult, Store};
use tracing::Level;

// --- Fixtures ---
pub fn product(id: i64, price: f64) -> Product {
  Product {
    id,
    name: format!("Product {}", id),
    price,
  }
}

pub fn cart_line(id: i64, product_id: i64, quantity: f64) -> CartItem {
  CartItem {
    id,
    product_id,
    quantity,
    // Fixed timestamp so summaries compare equal across calls.
    added_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
  }
}

pub fn claims_with(roles: Option<RoleClaim>) -> Claims {
  Claims {
    sub: "user-1".to_string(),
    email: "user@example.com".to_string(),
    roles,
    iat: 0,
    exp: u64::MAX,
  }
}

pub fn claims_listing(roles: &[&str]) -> Claims {
  claims_with(Some(RoleClaim::from_roles(roles.iter().copied())))
}

// --- A store whose every operation fails, for fail-soft tests ---
pub struct UnreadableStore {
  pub label: &'static str,
}

#[async_trait]
impl<T: Send + Sync + 'static> Store<T> for UnreadableStore {
  fn name(&self) -> &str {
    self.label
  }

  async fn load(&self) -> ShopResult<Vec<T>> {
    Err(ShopError::data_unavailable(self.label, anyhow::anyhow!("simulated read failure")))
  }

  async fn save(&self, _records: &[T]) -> ShopResult<()> {
    Err(ShopError::data_unavailable(self.label, anyhow::anyhow!("simulated write failure")))
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
