mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use savings_portal::api::handlers::{product_get_handler, product_list_handler};

fn test_server() -> TestServer {
    let (state, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/products", get(product_list_handler))
        .route("/products/{id}", get(product_get_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_first_page_with_defaults() {
    let server = test_server();

    let response = server.get("/products").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 6);
    assert_eq!(json["meta"]["total"], 7);
    assert_eq!(json["meta"]["page"], 1);
    assert_eq!(json["meta"]["limit"], 6);
    assert_eq!(json["meta"]["totalPages"], 2);

    let first = &data[0];
    assert!(first["id"].is_string());
    assert!(first["name"].is_string());
    assert!(first["type"].is_string());
    assert!(first["interestRate"].as_f64().unwrap() > 0.0);
    assert!(first["minAmount"].as_f64().unwrap() >= 10_000.0);
    assert!(first["imageUrl"].as_str().unwrap().starts_with("/images/"));
}

#[tokio::test]
async fn test_list_second_page() {
    let server = test_server();

    let response = server
        .get("/products")
        .add_query_param("page", "2")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["meta"]["page"], 2);
}

#[tokio::test]
async fn test_list_filter_by_name_is_case_insensitive() {
    let server = test_server();

    let response = server
        .get("/products")
        .add_query_param("name", "PROGRAMADO")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 2);
    for product in data {
        assert_eq!(product["type"], "Programado");
    }
}

#[tokio::test]
async fn test_list_filter_by_type() {
    let server = test_server();

    let response = server
        .get("/products")
        .add_query_param("type", "Inversión")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(json["meta"]["total"], 2);
    for product in data {
        assert_eq!(product["type"], "Inversión");
    }
}

#[tokio::test]
async fn test_list_no_matches_is_empty_not_error() {
    let server = test_server();

    let response = server
        .get("/products")
        .add_query_param("name", "hipoteca")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["meta"]["total"], 0);
    assert_eq!(json["meta"]["totalPages"], 0);
}

#[tokio::test]
async fn test_list_invalid_pagination_rejected() {
    let server = test_server();

    let response = server.get("/products").add_query_param("page", "0").await;
    response.assert_status_bad_request();

    let response = server
        .get("/products")
        .add_query_param("limit", "51")
        .await;
    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = test_server();

    let response = server.get("/products/cdt-digital-90").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "cdt-digital-90");
    assert_eq!(json["type"], "Inversión");
    assert_eq!(json["minAmount"].as_f64(), Some(500_000.0));
}

#[tokio::test]
async fn test_get_unknown_product_is_404() {
    let server = test_server();

    let response = server.get("/products/no-such-product").await;
    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
