//! Payment Execution Bounded Context
//!
//! One execution is one discrete attempt to fulfill an order via the
//! payment gateway. Executions are exclusively owned by their order:
//! they are never deleted independently, and a retry produces a new
//! sibling execution rather than mutating the failed one.

pub mod aggregate;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::PaymentExecution;
pub use repository::ExecutionRepository;
pub use services::ExecutionStateMachine;
pub use value_objects::{ExecutionStatus, GatewayResult};
