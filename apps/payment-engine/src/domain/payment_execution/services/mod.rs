//! Payment Execution Domain Services

mod execution_state_machine;

pub use execution_state_machine::ExecutionStateMachine;
