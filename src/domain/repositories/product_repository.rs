//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for catalog products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a new product. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists products ordered by id with pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError>;

    /// Lists all products in a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Product>, AppError>;

    /// Counts all products.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
