//! Handlers for the product catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::api::dto::products::{ProductListResponse, ProductQueryParams, ProductResponse};
use crate::domain::repositories::ProductFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists catalog products with filtering and pagination.
///
/// # Endpoint
///
/// `GET /products`
///
/// # Query Parameters
///
/// - `name` (optional): Case-insensitive substring match on the product name
/// - `type` (optional): Exact product type (`Ahorro`, `Programado`, `Inversión`)
/// - `page` (optional): Page number (default: 1)
/// - `limit` (optional): Items per page (default: 6, max: 50)
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     {
///       "id": "cuenta-ahorro-flexible",
///       "name": "Cuenta de Ahorro Flexible",
///       "type": "Ahorro",
///       "description": "...",
///       "interestRate": 0.065,
///       "minAmount": 10000,
///       "imageUrl": "/images/products/cuenta-ahorro-flexible.webp"
///     }
///   ],
///   "meta": { "total": 7, "page": 1, "limit": 6, "totalPages": 2 }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn product_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<ProductListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = params.pagination.page.unwrap_or(1);
    let page_limit = params
        .pagination
        .limit
        .unwrap_or(PaginationParams::DEFAULT_LIMIT);

    let filter = ProductFilter {
        name: params.name.filter(|name| !name.trim().is_empty()),
        product_type: params.product_type,
    };

    let result = state.product_service.search(filter, offset, limit).await?;

    Ok(Json(ProductListResponse {
        data: result.items.into_iter().map(ProductResponse::from).collect(),
        meta: PaginationMeta::new(result.total, page, page_limit),
    }))
}

/// Retrieves a single catalog product.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no product matches the id.
pub async fn product_get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(&id).await?;
    Ok(Json(product.into()))
}
