//! Handler for the account-opening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::onboarding::{OnboardingRequest, OnboardingResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts an account-opening application.
///
/// # Endpoint
///
/// `POST /onboarding`
///
/// # Request Body
///
/// ```json
/// { "name": "Juan Pérez", "document": "1020304050", "email": "juan@example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the reference code the customer can quote later:
///
/// ```json
/// { "id": "SOL-3kTb92Xw", "message": "Tu solicitud fue registrada. ..." }
/// ```
///
/// # Errors
///
/// - 400 Bad Request on validation failures (name, document, email)
/// - 409 Conflict if an application for the same document already exists
pub async fn onboarding_handler(
    State(state): State<AppState>,
    Json(payload): Json<OnboardingRequest>,
) -> Result<(StatusCode, Json<OnboardingResponse>), AppError> {
    payload.validate()?;

    let application = state
        .onboarding_service
        .submit(payload.name, payload.document, payload.email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(OnboardingResponse {
            id: application.code,
            message: "Tu solicitud fue registrada. Un asesor te contactará pronto.".to_string(),
        }),
    ))
}
