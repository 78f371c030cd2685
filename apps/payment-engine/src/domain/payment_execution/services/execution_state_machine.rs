//! Execution State Machine Service
//!
//! Validates execution status transitions as driven by the
//! orchestrator. Retrying a failed execution creates a sibling record,
//! not a transition of the same record; the administrative status
//! override bypasses this machine entirely.

use crate::domain::payment_execution::value_objects::ExecutionStatus;
use crate::domain::shared::PaymentError;

/// Execution state machine for validating transitions.
pub struct ExecutionStateMachine;

impl ExecutionStateMachine {
    /// Check if a status transition is valid.
    #[must_use]
    pub const fn is_valid_transition(from: ExecutionStatus, to: ExecutionStatus) -> bool {
        matches!(
            (from, to),
            (ExecutionStatus::Initiated, ExecutionStatus::Processing)
                // An attempt that errors before the gateway call is
                // persisted still has to reach a terminal state.
                | (ExecutionStatus::Initiated, ExecutionStatus::Failed)
                | (ExecutionStatus::Processing, ExecutionStatus::Success)
                | (ExecutionStatus::Processing, ExecutionStatus::Failed)
                | (ExecutionStatus::Success, ExecutionStatus::Settled)
                | (ExecutionStatus::Success, ExecutionStatus::Reversed)
                | (ExecutionStatus::Settled, ExecutionStatus::Reversed)
        )
    }

    /// Validate a status transition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the transition is illegal.
    pub fn validate_transition(
        from: ExecutionStatus,
        to: ExecutionStatus,
    ) -> Result<(), PaymentError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(PaymentError::invalid_operation(format!(
                "Invalid execution transition from {from} to {to}"
            )))
        }
    }
}
