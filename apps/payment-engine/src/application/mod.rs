//! Application Layer
//!
//! Use-case orchestration over the domain. Services coordinate
//! aggregates, repositories, and the gateway port; they own no
//! business rules beyond sequencing.

pub mod ports;
pub mod services;

pub use ports::{GatewayError, PaymentGatewayPort};
pub use services::{ExecutionService, OrderService};
