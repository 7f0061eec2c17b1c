//! DTOs for the product catalog endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::domain::entities::{Product, ProductType};

/// Query parameters accepted by `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Case-insensitive substring match on the product name.
    pub name: Option<String>,

    /// Exact product type match.
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
}

/// A catalog product as the web client consumes it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub description: String,
    pub interest_rate: f64,
    pub min_amount: Decimal,
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            product_type: product.product_type,
            description: product.description,
            interest_rate: product.interest_rate,
            min_amount: product.min_amount,
            image_url: product.image_url,
        }
    }
}

/// Paginated catalog listing: `{ "data": [...], "meta": { ... } }`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub data: Vec<ProductResponse>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_serializes_like_the_web_client_expects() {
        let product = Product {
            id: "cdt-digital-90".to_string(),
            name: "CDT Digital 90 días".to_string(),
            product_type: ProductType::Inversion,
            description: "Plazo fijo digital".to_string(),
            interest_rate: 0.105,
            min_amount: dec!(500_000),
            image_url: "/images/products/cdt-digital-90.webp".to_string(),
        };

        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();

        assert_eq!(json["type"], "Inversión");
        assert_eq!(json["interestRate"], 0.105);
        assert_eq!(json["minAmount"].as_f64(), Some(500_000.0));
        assert_eq!(json["imageUrl"], "/images/products/cdt-digital-90.webp");
    }
}
