//! In-memory persistence implementations.
//!
//! The portal carries no database: the commercial catalog is deployment-time
//! seed data and applications only need to outlive the hand-off to the
//! background worker. Both repositories therefore live in process memory.

pub mod memory_application_repository;
pub mod memory_product_repository;

pub use memory_application_repository::MemoryApplicationRepository;
pub use memory_product_repository::{MemoryProductRepository, default_catalog};
