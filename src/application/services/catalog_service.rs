//! Catalog read service for products and categories.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Category, Product};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::error::AppError;

/// A category with its products attached.
#[derive(Debug, Clone)]
pub struct CategoryWithProducts {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Read-only projections over the product catalog.
pub struct CatalogService<P: ProductRepository, C: CategoryRepository> {
    product_repository: Arc<P>,
    category_repository: Arc<C>,
}

impl<P: ProductRepository, C: CategoryRepository> CatalogService<P, C> {
    /// Creates a new catalog service.
    pub fn new(product_repository: Arc<P>, category_repository: Arc<C>) -> Self {
        Self {
            product_repository,
            category_repository,
        }
    }

    /// Lists products with pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_products(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        self.product_repository.list(offset, limit).await
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product matches.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Counts all products. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn product_count(&self) -> Result<i64, AppError> {
        self.product_repository.count().await
    }

    /// Lists all categories with their products nested.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_categories(&self) -> Result<Vec<CategoryWithProducts>, AppError> {
        let categories = self.category_repository.list().await?;

        let mut result = Vec::with_capacity(categories.len());
        for category in categories {
            let products = self
                .product_repository
                .list_by_category(category.id)
                .await?;
            result.push(CategoryWithProducts { category, products });
        }

        Ok(result)
    }
}
