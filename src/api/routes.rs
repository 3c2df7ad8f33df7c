//! API route configuration.

use crate::api::handlers::{
    category_list_handler, check_reset_token_handler, customer_orders_handler, order_handler,
    product_handler, product_list_handler, realtime_orders_handler, register_handler,
    reset_password_handler, send_reset_link_handler, send_verification_handler,
    verify_email_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Catalog read endpoints.
///
/// # Endpoints
///
/// - `GET /products`              - List products (paginated)
/// - `GET /products/{id}`         - Single product
/// - `GET /categories`            - Categories with nested products
/// - `GET /orders/realtime`       - Recent real-time order projections
/// - `GET /orders/{id}`           - Order with products and computed total
/// - `GET /customers/{id}/orders` - A customer's orders
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(product_list_handler))
        .route("/products/{id}", get(product_handler))
        .route("/categories", get(category_list_handler))
        .route("/orders/realtime", get(realtime_orders_handler))
        .route("/orders/{id}", get(order_handler))
        .route("/customers/{id}/orders", get(customer_orders_handler))
}

/// Account management endpoints.
///
/// # Endpoints
///
/// - `POST /auth/register`               - Create an inactive account
/// - `POST /auth/verification/send`      - Issue a verification code
/// - `POST /auth/verification/confirm`   - Confirm a code, activate the account
/// - `POST /auth/password-reset/send`    - Issue a reset link payload
/// - `POST /auth/password-reset/check`   - Validate a reset link
/// - `POST /auth/password-reset/confirm` - Perform the reset
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/verification/send", post(send_verification_handler))
        .route("/auth/verification/confirm", post(verify_email_handler))
        .route("/auth/password-reset/send", post(send_reset_link_handler))
        .route("/auth/password-reset/check", post(check_reset_token_handler))
        .route(
            "/auth/password-reset/confirm",
            post(reset_password_handler),
        )
}
