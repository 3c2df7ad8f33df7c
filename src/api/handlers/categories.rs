//! Handler for category endpoints.

use axum::{Json, extract::State};

use crate::api::dto::category::CategoryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories with their products nested.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.catalog_service.list_categories().await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}
