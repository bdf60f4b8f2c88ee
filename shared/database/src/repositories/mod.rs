//! Repository module for database CRUD operations

pub mod product;

pub use product::ProductRepository;
