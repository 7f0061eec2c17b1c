//! API route configuration.
//!
//! All endpoints are public: the portal is the marketing surface of the bank
//! and carries no customer session.

use crate::api::handlers::{
    onboarding_handler, product_get_handler, product_list_handler, simulate_handler,
    simulation_defaults_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All portal routes.
///
/// # Endpoints
///
/// - `GET  /products`            - Catalog search with pagination
/// - `GET  /products/{id}`       - Single product lookup
/// - `POST /simulator`           - Savings projection
/// - `GET  /simulator/defaults`  - Pre-filled simulator input for a product
/// - `POST /onboarding`          - Account-opening submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(product_list_handler))
        .route("/products/{id}", get(product_get_handler))
        .route("/simulator", post(simulate_handler))
        .route("/simulator/defaults", get(simulation_defaults_handler))
        .route("/onboarding", post(onboarding_handler))
}
