//! In-process cache implementation.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

/// In-process verification-code store with per-entry expiry.
///
/// Entries expire lazily on read. Codes do not survive a restart and are not
/// shared between instances, so this backend is only suitable for development
/// and tests; production deployments use [`super::RedisCache`].
pub struct MemoryCache {
    entries: Mutex<HashMap<i64, (String, Instant)>>,
    default_ttl: Duration,
}

impl MemoryCache {
    pub fn new(default_ttl_seconds: u64) -> Self {
        debug!("Using MemoryCache (codes are process-local)");
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_code(&self, customer_id: i64) -> CacheResult<Option<String>> {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");

        match entries.get(&customer_id) {
            Some((_, expires_at)) if *expires_at <= Instant::now() => {
                entries.remove(&customer_id);
                Ok(None)
            }
            Some((code, _)) => Ok(Some(code.clone())),
            None => Ok(None),
        }
    }

    async fn set_code(
        &self,
        customer_id: i64,
        code: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let ttl = ttl_seconds.map_or(self.default_ttl, Duration::from_secs);
        let expires_at = Instant::now() + ttl;

        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(customer_id, (code.to_string(), expires_at));

        Ok(())
    }

    async fn remove_code(&self, customer_id: i64) -> CacheResult<()> {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .remove(&customer_id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new(60);
        cache.set_code(1, "123456", None).await.unwrap();

        assert_eq!(cache.get_code(1).await.unwrap(), Some("123456".to_string()));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let cache = MemoryCache::new(60);
        assert_eq!(cache.get_code(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_deletes_entry() {
        let cache = MemoryCache::new(60);
        cache.set_code(1, "123456", None).await.unwrap();
        cache.remove_code(1).await.unwrap();

        assert_eq!(cache.get_code(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = MemoryCache::new(60);
        cache.set_code(1, "123456", Some(0)).await.unwrap();

        assert_eq!(cache.get_code(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_code() {
        let cache = MemoryCache::new(60);
        cache.set_code(1, "111111", None).await.unwrap();
        cache.set_code(1, "222222", None).await.unwrap();

        assert_eq!(cache.get_code(1).await.unwrap(), Some("222222".to_string()));
    }
}
