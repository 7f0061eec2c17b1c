mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use savings_portal::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_healthy() {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["catalog"]["status"], "ok");
    assert_eq!(json["checks"]["submission_queue"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degrades_when_queue_closes() {
    let (state, rx) = common::create_test_state();
    drop(rx);

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["submission_queue"]["status"], "error");
}
