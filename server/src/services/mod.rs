// server/src/services/mod.rs

//! Operations behind the HTTP handlers. Each takes its stores explicitly so
//! it can run against files in production and memory in tests.

pub mod auth_service;
pub mod cart_service;
pub mod catalog_service;
pub mod user_service;
