// server/src/models/mod.rs

//! Records persisted by the service. Catalog and cart records come from the
//! core crate; users only exist at this layer.

pub mod user;

pub use shopfront_core::{CartItem, CartLineDetail, CartSummary, Claims, Product};
pub use user::{User, UserView};
