//! Catalog search and lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Product;
use crate::domain::repositories::{ProductFilter, ProductRepository};
use crate::error::AppError;

/// One page of catalog results together with the total match count.
#[derive(Debug)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: i64,
}

/// Service for searching and retrieving catalog products.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one page of products matching the filter plus the total count.
    ///
    /// The page query and the count query run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn search(
        &self,
        filter: ProductFilter,
        offset: i64,
        limit: i64,
    ) -> Result<ProductPage, AppError> {
        let (items, total) = tokio::try_join!(
            self.repository.search(&filter, offset, limit),
            self.repository.count(&filter)
        )?;

        Ok(ProductPage { items, total })
    }

    /// Retrieves a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches the id.
    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Total number of products in the catalog, ignoring filters.
    pub async fn count_all(&self) -> Result<i64, AppError> {
        self.repository.count(&ProductFilter::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProductType;
    use crate::domain::repositories::MockProductRepository;
    use rust_decimal_macros::dec;

    fn sample_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Cuenta de Ahorro Flexible".to_string(),
            product_type: ProductType::Ahorro,
            description: "Ahorra a tu ritmo".to_string(),
            interest_rate: 0.065,
            min_amount: dec!(10_000),
            image_url: format!("/images/products/{id}.webp"),
        }
    }

    #[tokio::test]
    async fn test_search_returns_page_and_total() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_search()
            .times(1)
            .returning(|_, _, _| Ok(vec![sample_product("cuenta-ahorro-flexible")]));
        repository.expect_count().times(1).returning(|_| Ok(7));

        let service = ProductService::new(Arc::new(repository));
        let page = service
            .search(ProductFilter::default(), 0, 6)
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 7);
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_product(id))));

        let service = ProductService::new(Arc::new(repository));
        let product = service.get_product("cuenta-ahorro-flexible").await.unwrap();

        assert_eq!(product.id, "cuenta-ahorro-flexible");
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repository));
        let err = service.get_product("no-such-product").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
