//! Handlers for the savings simulator endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::simulate::{
    SimulateRequest, SimulateResponse, SimulationDefaultsParams, SimulationDefaultsResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Computes a savings projection.
///
/// # Endpoint
///
/// `POST /simulator`
///
/// # Request Body
///
/// ```json
/// {
///   "initialAmount": 1000000,
///   "monthlyContribution": 100000,
///   "months": 12,
///   "annualInterestRate": 0.12
/// }
/// ```
///
/// Amount fields also accept string-encoded numbers as sent by the monetary
/// input widget (`"1.234.567,89"`).
///
/// # Response
///
/// ```json
/// { "estimatedProfit": 184651.45, "totalBalance": 2384651.45 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the offending field when any parameter is
/// out of range.
pub async fn simulate_handler(
    State(state): State<AppState>,
    Json(payload): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, AppError> {
    payload.validate()?;

    let result = state.simulation_service.simulate(
        payload.initial_amount,
        payload.monthly_contribution,
        payload.months,
        payload.annual_interest_rate,
    )?;

    Ok(Json(result.into()))
}

/// Returns the pre-filled simulator form for a catalog product.
///
/// The product selection travels as an explicit query parameter; nothing is
/// remembered between requests.
///
/// # Endpoint
///
/// `GET /simulator/defaults?product={id}`
///
/// # Errors
///
/// Returns 404 Not Found if the product does not exist.
pub async fn simulation_defaults_handler(
    State(state): State<AppState>,
    Query(params): Query<SimulationDefaultsParams>,
) -> Result<Json<SimulationDefaultsResponse>, AppError> {
    let product = state.product_service.get_product(&params.product).await?;
    let input = state.simulation_service.defaults_for(&product)?;

    Ok(Json(SimulationDefaultsResponse::new(
        product.id,
        product.name,
        &input,
    )))
}
