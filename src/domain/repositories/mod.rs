//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`ProductRepository`] - Catalog search and lookup
//! - [`ApplicationRepository`] - Account-opening application storage

pub mod application_repository;
pub mod product_repository;

pub use application_repository::ApplicationRepository;
pub use product_repository::{ProductFilter, ProductRepository};

#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
