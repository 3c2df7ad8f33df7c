mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;

use shop_api::api::handlers::{product_handler, product_list_handler};

fn test_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/products", get(product_list_handler))
        .route("/api/products/{id}", get(product_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_list_products_empty(pool: PgPool) {
    let server = test_server(pool);

    let response = server.get("/api/products").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[sqlx::test]
async fn test_list_products_returns_fields(pool: PgPool) {
    let category_id = common::create_test_category(&pool, "Books").await;
    common::create_test_product(&pool, "Novel", "12.99", category_id).await;

    let server = test_server(pool);

    let response = server.get("/api/products").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Novel");
    assert_eq!(items[0]["price"], "12.99");
    assert_eq!(items[0]["category_id"].as_i64().unwrap(), category_id);
}

#[sqlx::test]
async fn test_get_product_by_id(pool: PgPool) {
    let category_id = common::create_test_category(&pool, "Books").await;
    let product_id = common::create_test_product(&pool, "Novel", "12.99", category_id).await;

    let server = test_server(pool);

    let response = server.get(&format!("/api/products/{product_id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"].as_i64().unwrap(), product_id);
    assert_eq!(body["price"], "12.99");
}

#[sqlx::test]
async fn test_get_missing_product_is_not_found(pool: PgPool) {
    let server = test_server(pool);

    let response = server.get("/api/products/999").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_list_products_rejects_bad_page_size(pool: PgPool) {
    let server = test_server(pool);

    let response = server.get("/api/products?page_size=5").await;

    response.assert_status_bad_request();
}
