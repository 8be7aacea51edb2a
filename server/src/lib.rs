// server/src/lib.rs

//! Shopfront HTTP service: JWT-authenticated catalog and cart endpoints on
//! top of `shopfront_core`, persisted to flat JSON files.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
