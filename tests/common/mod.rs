#![allow(dead_code)]

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use shop_api::infrastructure::cache::MemoryCache;
use shop_api::state::{AppState, StateSettings};
use shop_api::utils::password::hash_password;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub async fn create_test_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_product(pool: &PgPool, name: &str, price: &str, category_id: i64) -> i64 {
    let price: Decimal = price.parse().unwrap();

    sqlx::query_scalar(
        "INSERT INTO products (name, price, category_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_product_price(pool: &PgPool, product_id: i64, price: &str) {
    let price: Decimal = price.parse().unwrap();

    sqlx::query("UPDATE products SET price = $2 WHERE id = $1")
        .bind(product_id)
        .bind(price)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_customer(
    pool: &PgPool,
    email: &str,
    password: &str,
    is_active: bool,
) -> i64 {
    let password_hash = hash_password(password).unwrap();

    sqlx::query_scalar(
        r#"
        INSERT INTO customers (email, full_name, password_hash, is_active)
        VALUES ($1, 'Test User', $2, $3)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_order(pool: &PgPool, customer_id: i64, product_ids: &[i64]) -> i64 {
    let order_id: i64 =
        sqlx::query_scalar("INSERT INTO orders (customer_id) VALUES ($1) RETURNING id")
            .bind(customer_id)
            .fetch_one(pool)
            .await
            .unwrap();

    for product_id in product_ids {
        sqlx::query("INSERT INTO order_products (order_id, product_id) VALUES ($1, $2)")
            .bind(order_id)
            .bind(product_id)
            .execute(pool)
            .await
            .unwrap();
    }

    order_id
}

pub async fn create_realtime_order(
    pool: &PgPool,
    order_id: i64,
    customer_name: &str,
    total_price: &str,
    products: &[&str],
) {
    let total: Decimal = total_price.parse().unwrap();
    let products = serde_json::to_value(products).unwrap();

    sqlx::query(
        r#"
        INSERT INTO realtime_orders (order_id, customer_name, total_price, products)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(order_id)
    .bind(customer_name)
    .bind(total)
    .bind(products)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn customer_is_active(pool: &PgPool, id: i64) -> bool {
    sqlx::query_scalar("SELECT is_active FROM customers WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn customer_password_hash(pool: &PgPool, id: i64) -> String {
    sqlx::query_scalar("SELECT password_hash FROM customers WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Builds an [`AppState`] over the test pool with an in-process code store.
///
/// The cache is reachable through `state.cache`, so tests can read issued
/// verification codes and seed their own.
pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(MemoryCache::new(300)),
        StateSettings {
            allowed_email_domain: "@gmail.com".to_string(),
            verification_code_ttl_seconds: 300,
            token_signing_secret: TEST_SIGNING_SECRET.to_string(),
            reset_token_timeout_seconds: 3600,
        },
    )
}
