//! Handlers for order endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::order::{OrderResponse, RealtimeOrderResponse};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves an order with nested products and computed total.
///
/// The total is derived from the products' current catalog prices at read
/// time, so a price change is reflected in the totals of existing orders.
///
/// # Endpoint
///
/// `GET /api/orders/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no order matches.
pub async fn order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let summary = state.order_service.get_order(id).await?;

    Ok(Json(summary.into()))
}

/// Lists a customer's orders.
///
/// # Endpoint
///
/// `GET /api/customers/{id}/orders`
pub async fn customer_orders_handler(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let summaries = state.order_service.list_for_customer(customer_id).await?;

    Ok(Json(
        summaries.into_iter().map(OrderResponse::from).collect(),
    ))
}

/// Lists recent real-time order projections.
///
/// # Endpoint
///
/// `GET /api/orders/realtime?page=1&page_size=25`
pub async fn realtime_orders_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<RealtimeOrderResponse>>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request(msg, json!({})))?;

    let orders = state.order_service.list_realtime(offset, limit).await?;

    Ok(Json(
        orders.into_iter().map(RealtimeOrderResponse::from).collect(),
    ))
}
