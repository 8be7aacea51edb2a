// server/src/state.rs
use crate::config::AppConfig;
use crate::models::{CartItem, Product, User};
use shopfront_core::{JsonFileStore, Store};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<dyn Store<Product>>,
  pub cart: Arc<dyn Store<CartItem>>,
  pub users: Arc<dyn Store<User>>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// State backed by the JSON files under `config.data_dir`. Missing files
  /// are created empty.
  pub async fn from_data_dir(config: Arc<AppConfig>) -> crate::errors::Result<Self> {
    let products = JsonFileStore::<Product>::new("products", config.products_path());
    let cart = JsonFileStore::<CartItem>::new("cart", config.cart_path());
    let users = JsonFileStore::<User>::new("users", config.users_path());
    products.ensure_exists().await?;
    cart.ensure_exists().await?;
    users.ensure_exists().await?;

    Ok(Self {
      products: Arc::new(products),
      cart: Arc::new(cart),
      users: Arc::new(users),
      config,
    })
  }
}
