//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the transient verification-code store.
///
/// Codes are keyed by customer id and expire on their own; expiry is owned by
/// the backend, not by this service. Implementations must be thread-safe and
/// fail open: a backend error is logged and treated as a miss so it can never
/// take down the request path.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed store with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process store for development and tests
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the pending verification code for a customer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(code))` on cache hit
    /// - `Ok(None)` on miss, expiry, or backend error (fail-open behavior)
    async fn get_code(&self, customer_id: i64) -> CacheResult<Option<String>>;

    /// Stores a verification code for a customer with optional TTL override.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations log errors and
    /// return `Ok(())` to avoid disrupting the request flow.
    async fn set_code(
        &self,
        customer_id: i64,
        code: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes the pending code for a customer.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn remove_code(&self, customer_id: i64) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
