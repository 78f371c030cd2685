//! Payment Order Aggregate
//!
//! The PaymentOrder aggregate is the root entity for order lifecycle management.

mod order;

pub use order::{CreateOrderCommand, OrderPatch, PaymentOrder};
