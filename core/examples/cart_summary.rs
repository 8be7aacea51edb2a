// examples/cart_summary.rs

//! Prices a small cart, including a line whose product has been deleted.

use chrono::Utc;
use shopfront_core::{load_cart_summary, CartItem, MemoryStore, Product};
use tracing::Level;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(Level::INFO).init();

  let catalog = MemoryStore::new(
    "products",
    vec![
      Product { id: 1, name: "Notebook".to_string(), price: 10.50 },
      Product { id: 2, name: "Fountain pen".to_string(), price: 25.99 },
    ],
  );
  let now = Utc::now();
  let cart = MemoryStore::new(
    "cart",
    vec![
      CartItem { id: 1, product_id: 1, quantity: 2.0, added_at: now },
      CartItem { id: 2, product_id: 2, quantity: 1.0, added_at: now },
      // Product 3 no longer exists: priced at zero, still counted.
      CartItem { id: 3, product_id: 3, quantity: 4.0, added_at: now },
    ],
  );

  let summary = load_cart_summary(&cart, &catalog).await;
  for line in &summary.items {
    let name = line.product.as_ref().map_or("<removed>", |p| p.name.as_str());
    println!("{:>3} x {:<14} {:>8.2}", line.item.quantity, name, line.subtotal);
  }
  println!("items: {}  balance: {:.2}", summary.item_count, summary.balance);
}
