//! Repository trait for order data access.

use crate::domain::entities::{Order, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for customer orders.
///
/// Orders are written by upstream flows; this service only reads them to
/// build order projections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Finds an order by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Lists all orders placed by a customer, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_customer(&self, customer_id: i64) -> Result<Vec<Order>, AppError>;

    /// Returns the products associated with an order, with their current
    /// catalog prices.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, AppError>;
}
