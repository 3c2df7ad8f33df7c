//! DTOs for category endpoints.

use serde::Serialize;

use crate::api::dto::product::ProductResponse;
use crate::application::services::CategoryWithProducts;

/// A category with its products nested.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub name: String,
    pub products: Vec<ProductResponse>,
}

impl From<CategoryWithProducts> for CategoryResponse {
    fn from(c: CategoryWithProducts) -> Self {
        Self {
            name: c.category.name,
            products: c.products.into_iter().map(ProductResponse::from).collect(),
        }
    }
}
