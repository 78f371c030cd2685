//! Payment Execution Value Objects

mod execution_status;
mod gateway_result;

pub use execution_status::ExecutionStatus;
pub use gateway_result::GatewayResult;
