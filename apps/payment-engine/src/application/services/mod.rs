//! Application Services

mod execution_service;
mod order_service;

pub use execution_service::ExecutionService;
pub use order_service::OrderService;
