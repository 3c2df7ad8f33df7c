//! PostgreSQL implementation of order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Order, Product};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// PostgreSQL repository for customer orders.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order::new(r.id, r.customer_id, r.created_at, r.updated_at)
    }
}

#[derive(sqlx::FromRow)]
struct OrderProductRow {
    id: i64,
    name: String,
    price: Decimal,
    category_id: i64,
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_id, created_at, updated_at FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Order::from))
    }

    async fn list_for_customer(&self, customer_id: i64) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_id, created_at, updated_at
            FROM orders
            WHERE customer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn products_for_order(&self, order_id: i64) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, OrderProductRow>(
            r#"
            SELECT p.id, p.name, p.price, p.category_id
            FROM order_products op
            JOIN products p ON p.id = op.product_id
            WHERE op.order_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Product::new(r.id, r.name, r.price, r.category_id))
            .collect())
    }
}
