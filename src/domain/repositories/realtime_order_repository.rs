//! Repository trait for the real-time order read model.

use crate::domain::entities::RealTimeOrder;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for the real-time order projection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RealtimeOrderRepository: Send + Sync {
    /// Lists the most recent projections, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, offset: i64, limit: i64) -> Result<Vec<RealTimeOrder>, AppError>;
}
