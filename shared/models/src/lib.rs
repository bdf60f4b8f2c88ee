//! # SDS Locator Domain Models
//!
//! Core domain models shared between the lookup service and the database
//! layer. Models serialize with serde and map to database rows with sqlx.

pub mod product;

pub use product::*;
