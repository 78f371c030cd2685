//! Payment Execution Aggregate

mod execution;

pub use execution::PaymentExecution;
