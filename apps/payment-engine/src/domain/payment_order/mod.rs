//! Payment Order Bounded Context
//!
//! Manages the order lifecycle from creation through completion,
//! cancellation, or refund.
//!
//! # Key Concepts
//!
//! - **PaymentOrder Aggregate**: The root entity owning order state transitions
//! - **Status State Machine**: Completed orders can only be refunded;
//!   cancelled orders are terminal; all other transitions are open
//! - **Repository Trait**: Keyed persistence with filter queries and aggregates

pub mod aggregate;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{CreateOrderCommand, OrderPatch, PaymentOrder};
pub use repository::{OrderFilter, OrderRepository};
pub use services::OrderStateMachine;
pub use value_objects::{Beneficiary, OrderStatus, PaymentMethod};
