//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AccountService, CatalogService, OrderService, PasswordResetService, ResetTokenGenerator,
};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgCategoryRepository, PgCustomerRepository, PgOrderRepository, PgProductRepository,
    PgRealtimeOrderRepository,
};

/// Settings the services need beyond their repositories.
#[derive(Debug, Clone)]
pub struct StateSettings {
    /// Required email suffix for registration, e.g. `"@gmail.com"`.
    pub allowed_email_domain: String,
    /// Verification code lifetime in the cache.
    pub verification_code_ttl_seconds: u64,
    /// HMAC key for reset tokens.
    pub token_signing_secret: String,
    /// Maximum accepted reset token age.
    pub reset_token_timeout_seconds: u64,
}

/// Shared application state.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<PgProductRepository, PgCategoryRepository>>,
    pub order_service: Arc<OrderService<PgOrderRepository, PgRealtimeOrderRepository>>,
    pub account_service: Arc<AccountService<PgCustomerRepository>>,
    pub password_reset_service: Arc<PasswordResetService<PgCustomerRepository>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Wires repositories and services over a connection pool and cache.
    pub fn new(pool: Arc<PgPool>, cache: Arc<dyn CacheService>, settings: StateSettings) -> Self {
        let product_repo = Arc::new(PgProductRepository::new(pool.clone()));
        let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
        let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));
        let realtime_repo = Arc::new(PgRealtimeOrderRepository::new(pool.clone()));
        let customer_repo = Arc::new(PgCustomerRepository::new(pool));

        let catalog_service = Arc::new(CatalogService::new(product_repo, category_repo));
        let order_service = Arc::new(OrderService::new(order_repo, realtime_repo));
        let account_service = Arc::new(AccountService::new(
            customer_repo.clone(),
            cache.clone(),
            settings.allowed_email_domain,
            settings.verification_code_ttl_seconds,
        ));
        let password_reset_service = Arc::new(PasswordResetService::new(
            customer_repo,
            ResetTokenGenerator::new(
                settings.token_signing_secret,
                settings.reset_token_timeout_seconds,
            ),
        ));

        Self {
            catalog_service,
            order_service,
            account_service,
            password_reset_service,
            cache,
        }
    }
}
