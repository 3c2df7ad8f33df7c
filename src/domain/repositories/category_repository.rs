//! Repository trait for category data access.

use crate::domain::entities::Category;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for product categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a new category. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, name: &str) -> Result<Category, AppError>;

    /// Lists all categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Category>, AppError>;
}
