//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Queries use the runtime API with bound parameters, so the crate builds
//! without a live database or prepared query cache.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customer account storage
//! - [`PgProductRepository`] - Catalog products
//! - [`PgCategoryRepository`] - Product categories
//! - [`PgOrderRepository`] - Customer orders
//! - [`PgRealtimeOrderRepository`] - Real-time order projections

pub mod pg_category_repository;
pub mod pg_customer_repository;
pub mod pg_order_repository;
pub mod pg_product_repository;
pub mod pg_realtime_order_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_customer_repository::PgCustomerRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_realtime_order_repository::PgRealtimeOrderRepository;
