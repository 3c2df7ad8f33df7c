//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis store for pending verification codes.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. All operations are fail-open: errors are logged but don't propagate
/// to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures
    /// the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_code`] is
    ///   called with `ttl_seconds = None`; controlled via
    ///   `VERIFICATION_CODE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "verify:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, customer_id: i64) -> String {
        format!("{}{}", self.key_prefix, customer_id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_code(&self, customer_id: i64) -> CacheResult<Option<String>> {
        let key = self.build_key(customer_id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(code)) => {
                debug!("Cache HIT: customer {}", customer_id);
                Ok(Some(code))
            }
            Ok(None) => {
                debug!("Cache MISS: customer {}", customer_id);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for customer {}: {}", customer_id, e);
                Ok(None)
            }
        }
    }

    async fn set_code(
        &self,
        customer_id: i64,
        code: &str,
        ttl: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(customer_id);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&key, code, ttl_seconds).await {
            Ok(_) => {
                debug!(
                    "Cache SET: customer {} (TTL: {}s)",
                    customer_id, ttl_seconds
                );
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for customer {}: {}", customer_id, e);
                Ok(())
            }
        }
    }

    async fn remove_code(&self, customer_id: i64) -> CacheResult<()> {
        let key = self.build_key(customer_id);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache DEL: customer {}", customer_id);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for customer {}: {}", customer_id, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
