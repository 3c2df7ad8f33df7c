//! Real-time order projection entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A denormalized order projection written by the upstream order pipeline.
///
/// Unlike [`super::Order`], the total price and product names here are frozen
/// at projection time. This service only reads these rows.
#[derive(Debug, Clone)]
pub struct RealTimeOrder {
    pub id: i64,
    pub order_id: i64,
    pub customer_name: String,
    pub total_price: Decimal,
    pub products: Vec<String>,
    pub created_at: DateTime<Utc>,
}
