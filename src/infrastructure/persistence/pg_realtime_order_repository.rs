//! PostgreSQL implementation of the real-time order read model.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::RealTimeOrder;
use crate::domain::repositories::RealtimeOrderRepository;
use crate::error::AppError;

/// PostgreSQL repository for the real-time order projection.
///
/// Rows are written by the upstream order pipeline; this repository only
/// reads them.
pub struct PgRealtimeOrderRepository {
    pool: Arc<PgPool>,
}

impl PgRealtimeOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RealtimeOrderRow {
    id: i64,
    order_id: i64,
    customer_name: String,
    total_price: Decimal,
    products: Json<Vec<String>>,
    created_at: DateTime<Utc>,
}

impl From<RealtimeOrderRow> for RealTimeOrder {
    fn from(r: RealtimeOrderRow) -> Self {
        RealTimeOrder {
            id: r.id,
            order_id: r.order_id,
            customer_name: r.customer_name,
            total_price: r.total_price,
            products: r.products.0,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl RealtimeOrderRepository for PgRealtimeOrderRepository {
    async fn list_recent(&self, offset: i64, limit: i64) -> Result<Vec<RealTimeOrder>, AppError> {
        let rows = sqlx::query_as::<_, RealtimeOrderRow>(
            r#"
            SELECT id, order_id, customer_name, total_price, products, created_at
            FROM realtime_orders
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RealTimeOrder::from).collect())
    }
}
