mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use shop_api::AppState;
use shop_api::api::handlers::{send_verification_handler, verify_email_handler};
use shop_api::infrastructure::cache::CacheService;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/auth/verification/send", post(send_verification_handler))
        .route(
            "/api/auth/verification/confirm",
            post(verify_email_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_send_caches_code_for_customer(pool: PgPool) {
    let id = common::create_test_customer(&pool, "jane@gmail.com", "password123", false).await;

    let state = common::create_test_state(pool);
    let server = test_server(state.clone());

    let response = server
        .post("/api/auth/verification/send")
        .json(&json!({ "email": "jane@gmail.com" }))
        .await;

    response.assert_status_ok();

    let code = state.cache.get_code(id).await.unwrap();
    assert!(code.is_some());
    assert_eq!(code.unwrap().len(), 6);
}

#[sqlx::test]
async fn test_send_unknown_email_is_validation_error(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = test_server(state);

    let response = server
        .post("/api/auth/verification/send")
        .json(&json!({ "email": "nobody@gmail.com" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_send_active_account_rejected(pool: PgPool) {
    common::create_test_customer(&pool, "jane@gmail.com", "password123", true).await;

    let state = common::create_test_state(pool);
    let server = test_server(state);

    let response = server
        .post("/api/auth/verification/send")
        .json(&json!({ "email": "jane@gmail.com" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_confirm_correct_code_activates_account(pool: PgPool) {
    let id = common::create_test_customer(&pool, "jane@gmail.com", "password123", false).await;

    let state = common::create_test_state(pool.clone());
    state.cache.set_code(id, "123456", None).await.unwrap();

    let server = test_server(state.clone());

    let response = server
        .post("/api/auth/verification/confirm")
        .json(&json!({ "email": "jane@gmail.com", "code": 123456 }))
        .await;

    response.assert_status_ok();
    assert!(common::customer_is_active(&pool, id).await);

    // The cached code is dropped only on failures; success leaves it to expire.
    assert_eq!(
        state.cache.get_code(id).await.unwrap(),
        Some("123456".to_string())
    );
}

#[sqlx::test]
async fn test_confirm_wrong_code_fails_and_drops_cached_code(pool: PgPool) {
    let id = common::create_test_customer(&pool, "jane@gmail.com", "password123", false).await;

    let state = common::create_test_state(pool.clone());
    state.cache.set_code(id, "123456", None).await.unwrap();

    let server = test_server(state.clone());

    let response = server
        .post("/api/auth/verification/confirm")
        .json(&json!({ "email": "jane@gmail.com", "code": 654321 }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Invalid code.");

    assert!(!common::customer_is_active(&pool, id).await);
    assert_eq!(state.cache.get_code(id).await.unwrap(), None);
}

#[sqlx::test]
async fn test_confirm_active_account_fails_even_with_correct_code(pool: PgPool) {
    let id = common::create_test_customer(&pool, "jane@gmail.com", "password123", true).await;

    let state = common::create_test_state(pool);
    state.cache.set_code(id, "123456", None).await.unwrap();

    let server = test_server(state);

    let response = server
        .post("/api/auth/verification/confirm")
        .json(&json!({ "email": "jane@gmail.com", "code": 123456 }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Invalid code.");
}

#[sqlx::test]
async fn test_activation_happens_exactly_once(pool: PgPool) {
    let id = common::create_test_customer(&pool, "jane@gmail.com", "password123", false).await;

    let state = common::create_test_state(pool.clone());
    state.cache.set_code(id, "123456", None).await.unwrap();

    let server = test_server(state);

    let payload = json!({ "email": "jane@gmail.com", "code": 123456 });

    let first = server
        .post("/api/auth/verification/confirm")
        .json(&payload)
        .await;
    first.assert_status_ok();

    // The account is active now, so a replay of the same code is rejected.
    let second = server
        .post("/api/auth/verification/confirm")
        .json(&payload)
        .await;
    second.assert_status_bad_request();

    assert!(common::customer_is_active(&pool, id).await);
}

#[sqlx::test]
async fn test_confirm_unknown_email_is_validation_error(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = test_server(state);

    let response = server
        .post("/api/auth/verification/confirm")
        .json(&json!({ "email": "nobody@gmail.com", "code": 123456 }))
        .await;

    response.assert_status_bad_request();
}
