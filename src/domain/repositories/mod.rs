//! Repository traits defining the persistence seam.

mod category_repository;
mod customer_repository;
mod order_repository;
mod product_repository;
mod realtime_order_repository;

pub use category_repository::CategoryRepository;
pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use realtime_order_repository::RealtimeOrderRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use realtime_order_repository::MockRealtimeOrderRepository;
