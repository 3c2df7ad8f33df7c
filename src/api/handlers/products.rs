//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::product::ProductResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists catalog products.
///
/// # Endpoint
///
/// `GET /api/products?page=1&page_size=25`
pub async fn product_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request(msg, json!({})))?;

    let products = state.catalog_service.list_products(offset, limit).await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Retrieves a single product.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no product matches.
pub async fn product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.catalog_service.get_product(id).await?;

    Ok(Json(product.into()))
}
