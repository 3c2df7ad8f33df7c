//! DTOs for order endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::dto::product::ProductResponse;
use crate::application::services::OrderSummary;
use crate::domain::entities::RealTimeOrder;

/// An order projection with nested products and the derived total.
///
/// The owning customer is a write-side concern and is never serialized.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub products: Vec<ProductResponse>,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderSummary> for OrderResponse {
    fn from(s: OrderSummary) -> Self {
        Self {
            products: s.products.into_iter().map(ProductResponse::from).collect(),
            total_price: s.total_price,
            created_at: s.order.created_at,
            updated_at: s.order.updated_at,
        }
    }
}

/// A real-time order projection row.
#[derive(Debug, Serialize)]
pub struct RealtimeOrderResponse {
    pub order_id: i64,
    pub customer_name: String,
    pub total_price: Decimal,
    pub products: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RealTimeOrder> for RealtimeOrderResponse {
    fn from(o: RealTimeOrder) -> Self {
        Self {
            order_id: o.order_id,
            customer_name: o.customer_name,
            total_price: o.total_price,
            products: o.products,
            created_at: o.created_at,
        }
    }
}
