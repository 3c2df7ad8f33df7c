//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod health;
pub mod orders;
pub mod password_reset;
pub mod products;
pub mod register;
pub mod verification;

pub use categories::category_list_handler;
pub use health::health_handler;
pub use orders::{customer_orders_handler, order_handler, realtime_orders_handler};
pub use password_reset::{
    check_reset_token_handler, reset_password_handler, send_reset_link_handler,
};
pub use products::{product_handler, product_list_handler};
pub use register::register_handler;
pub use verification::{send_verification_handler, verify_email_handler};
