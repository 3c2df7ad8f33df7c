//! Order read service.

use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Order, Product, RealTimeOrder};
use crate::domain::repositories::{OrderRepository, RealtimeOrderRepository};
use crate::error::AppError;

/// An order joined with its products and the derived total.
///
/// `total_price` is computed from the products' current catalog prices at
/// read time; it is never stored, so a later price change shows up in the
/// totals of existing orders as well.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub order: Order,
    pub products: Vec<Product>,
    pub total_price: Decimal,
}

/// Read-only projections over customer orders.
pub struct OrderService<O: OrderRepository, R: RealtimeOrderRepository> {
    order_repository: Arc<O>,
    realtime_repository: Arc<R>,
}

impl<O: OrderRepository, R: RealtimeOrderRepository> OrderService<O, R> {
    /// Creates a new order service.
    pub fn new(order_repository: Arc<O>, realtime_repository: Arc<R>) -> Self {
        Self {
            order_repository,
            realtime_repository,
        }
    }

    /// Retrieves an order with products and computed total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no order matches.
    pub async fn get_order(&self, id: i64) -> Result<OrderSummary, AppError> {
        let order = self
            .order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))?;

        self.summarize(order).await
    }

    /// Lists a customer's orders, each with products and computed total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<OrderSummary>, AppError> {
        let orders = self.order_repository.list_for_customer(customer_id).await?;

        let mut summaries = Vec::with_capacity(orders.len());
        for order in orders {
            summaries.push(self.summarize(order).await?);
        }

        Ok(summaries)
    }

    /// Lists recent real-time order projections.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_realtime(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<RealTimeOrder>, AppError> {
        self.realtime_repository.list_recent(offset, limit).await
    }

    async fn summarize(&self, order: Order) -> Result<OrderSummary, AppError> {
        let products = self.order_repository.products_for_order(order.id).await?;
        let total_price: Decimal = products.iter().map(|p| p.price).sum();

        Ok(OrderSummary {
            order,
            products,
            total_price,
        })
    }
}
