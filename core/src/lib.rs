// core/src/lib.rs

//! Shopfront core: the business rules behind the Shopfront e-commerce API.
//!
//! This crate holds the parts of the backend that carry real invariants:
//!  - A role-based authorization gate with `member` and `administrator` instances.
//!  - Cart pricing: per-line subtotals, balance and item count over a catalog snapshot.
//!  - Validation of product and cart payloads, reporting every broken rule at once.
//!  - Watermark id generation for flat-file collections.
//!  - A `Store` seam for loading and saving whole collections.
//!
//! Everything except the `Store` implementations is synchronous and pure.

pub mod error;
pub mod gate;
pub mod models;
pub mod pricing;
pub mod store;
pub mod summary;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::error::{ShopError, ShopResult, ValidationErrors};
pub use crate::gate::{AuthorizationGate, Decision, Rejection, RejectionKind, RoleBearer, ROLE_ADMIN, ROLE_USER};
pub use crate::models::{CartItem, CartLineDetail, CartSummary, Claims, Identified, Product, RoleClaim};
pub use crate::pricing::{calculate_balance, generate_id, get_cart_with_details};
pub use crate::store::{JsonFileStore, MemoryStore, Store};
pub use crate::summary::load_cart_summary;
pub use crate::validation::{
  validate_cart_item, validate_product, validate_quantity_update, CartItemInput, CartItemRequest, InputValue,
  ProductInput, ProductPatch, QuantityInput,
};
