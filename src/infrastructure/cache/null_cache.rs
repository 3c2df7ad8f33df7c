//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// All operations succeed immediately without storing or retrieving data.
/// With this backend no verification code ever matches, so it is only useful
/// for exercising the fail-open behavior of the verification flow.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_code(&self, _customer_id: i64) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_code(
        &self,
        _customer_id: i64,
        _code: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn remove_code(&self, _customer_id: i64) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
