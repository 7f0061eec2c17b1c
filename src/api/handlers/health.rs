//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: Product catalog reachable and non-empty
/// 2. **Submission Queue**: Channel to the background worker is open
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state).await;
    let queue_check = check_submission_queue(&state);

    let all_healthy = catalog_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            submission_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the catalog answers queries and is not empty.
async fn check_catalog(state: &AppState) -> CheckStatus {
    match state.product_service.count_all().await {
        Ok(0) => CheckStatus {
            status: "error".to_string(),
            message: Some("Catalog is empty".to_string()),
        },
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} products")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Catalog error: {e}")),
        },
    }
}

/// Checks if the submission hand-off queue is operational.
fn check_submission_queue(state: &AppState) -> CheckStatus {
    if state.submission_tx.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Submission queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.submission_tx.capacity())),
        }
    }
}
