mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use savings_portal::api::handlers::onboarding_handler;
use savings_portal::domain::submission_event::SubmissionEvent;
use serde_json::json;
use tokio::sync::mpsc;

fn test_server() -> (TestServer, mpsc::Receiver<SubmissionEvent>) {
    let (state, rx) = common::create_test_state();
    let app = Router::new()
        .route("/onboarding", post(onboarding_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), rx)
}

#[tokio::test]
async fn test_submit_application_success() {
    let (server, mut rx) = test_server();

    let response = server
        .post("/onboarding")
        .json(&json!({
            "name": "Juan Pérez",
            "document": "1020304050",
            "email": "juan@example.com"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert!(id.starts_with("SOL-"));
    assert!(json["message"].as_str().unwrap().contains("solicitud"));

    // The accepted application is queued for the background worker.
    let event = rx.recv().await.unwrap();
    assert_eq!(event.code, id);
    assert_eq!(event.email, "juan@example.com");
}

#[tokio::test]
async fn test_submit_duplicate_document_conflicts() {
    let (server, _rx) = test_server();

    let body = json!({
        "name": "Juan Pérez",
        "document": "1020304050",
        "email": "juan@example.com"
    });

    server.post("/onboarding").json(&body).await.assert_status(
        axum::http::StatusCode::CREATED,
    );

    let response = server
        .post("/onboarding")
        .json(&json!({
            "name": "Juana Pérez",
            "document": "1020304050",
            "email": "juana@example.com"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_submit_short_name_rejected() {
    let (server, _rx) = test_server();

    let response = server
        .post("/onboarding")
        .json(&json!({
            "name": "Jo",
            "document": "1020304050",
            "email": "juan@example.com"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_submit_short_document_rejected() {
    let (server, _rx) = test_server();

    let response = server
        .post("/onboarding")
        .json(&json!({
            "name": "Juan Pérez",
            "document": "1234",
            "email": "juan@example.com"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_submit_invalid_email_rejected() {
    let (server, _rx) = test_server();

    let response = server
        .post("/onboarding")
        .json(&json!({
            "name": "Juan Pérez",
            "document": "1020304050",
            "email": "not-an-email"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_rejected_submission_queues_nothing() {
    let (server, mut rx) = test_server();

    server
        .post("/onboarding")
        .json(&json!({
            "name": "Jo",
            "document": "1020304050",
            "email": "juan@example.com"
        }))
        .await
        .assert_status_bad_request();

    assert!(rx.try_recv().is_err());
}
