//! Repository trait for the savings product catalog.

use crate::domain::entities::{Product, ProductType};
use crate::error::AppError;
use async_trait::async_trait;

/// Search criteria for catalog queries.
///
/// `name` matches as a case-insensitive substring; `product_type` matches
/// exactly. Empty filter returns the whole catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub product_type: Option<ProductType>,
}

/// Repository interface for the product catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryProductRepository`] - seeded
///   in-memory catalog
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns one page of products matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn search(
        &self,
        filter: &ProductFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError>;

    /// Counts products matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self, filter: &ProductFilter) -> Result<i64, AppError>;

    /// Finds a product by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;
}
