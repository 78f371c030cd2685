//! Order State Machine Service
//!
//! Validates order status transitions. Completed orders can only be
//! refunded and cancelled orders are terminal; transitions between all
//! other states are deliberately left open so operators can override
//! the workflow (e.g., PENDING directly to COMPLETED).

use crate::domain::payment_order::value_objects::OrderStatus;
use crate::domain::shared::PaymentError;

/// Order state machine for validating transitions.
pub struct OrderStateMachine;

impl OrderStateMachine {
    /// Check if a status transition is valid.
    #[must_use]
    pub const fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        match from {
            OrderStatus::Completed => matches!(to, OrderStatus::Refunded),
            OrderStatus::Cancelled => false,
            _ => true,
        }
    }

    /// Validate a status transition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the transition is illegal.
    pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), PaymentError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(PaymentError::invalid_operation(Self::transition_error_reason(
                from, to,
            )))
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: OrderStatus, to: OrderStatus) -> String {
        match from {
            OrderStatus::Completed => {
                format!("Completed orders can only be refunded, not set to {to}")
            }
            OrderStatus::Cancelled => {
                format!("Cannot change status of cancelled order to {to}")
            }
            _ => format!("Invalid transition from {from} to {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(OrderStatus::Pending)]
    #[test_case(OrderStatus::Scheduled)]
    #[test_case(OrderStatus::Processing)]
    #[test_case(OrderStatus::Failed)]
    #[test_case(OrderStatus::Refunded)]
    fn open_states_allow_any_target(from: OrderStatus) {
        for to in [
            OrderStatus::Pending,
            OrderStatus::Scheduled,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Failed,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ] {
            assert!(
                OrderStateMachine::is_valid_transition(from, to),
                "{from} -> {to} should be permitted"
            );
        }
    }

    #[test]
    fn completed_only_transitions_to_refunded() {
        assert!(OrderStateMachine::is_valid_transition(
            OrderStatus::Completed,
            OrderStatus::Refunded
        ));
        for to in [
            OrderStatus::Pending,
            OrderStatus::Scheduled,
            OrderStatus::Processing,
            OrderStatus::Failed,
            OrderStatus::Cancelled,
        ] {
            assert!(!OrderStateMachine::is_valid_transition(
                OrderStatus::Completed,
                to
            ));
        }
    }

    #[test]
    fn cancelled_is_terminal() {
        for to in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Failed,
            OrderStatus::Refunded,
        ] {
            assert!(!OrderStateMachine::is_valid_transition(
                OrderStatus::Cancelled,
                to
            ));
        }
    }

    #[test]
    fn validate_transition_returns_error_for_invalid() {
        let result =
            OrderStateMachine::validate_transition(OrderStatus::Completed, OrderStatus::Failed);
        assert!(matches!(result, Err(PaymentError::InvalidOperation(_))));
    }

    #[test]
    fn pending_directly_to_completed_is_permitted() {
        // Administrative override; intentionally not tightened.
        assert!(
            OrderStateMachine::validate_transition(OrderStatus::Pending, OrderStatus::Completed)
                .is_ok()
        );
    }

    #[test]
    fn transition_error_reason_names_the_gate() {
        let reason = OrderStateMachine::transition_error_reason(
            OrderStatus::Completed,
            OrderStatus::Pending,
        );
        assert!(reason.contains("only be refunded"));

        let reason = OrderStateMachine::transition_error_reason(
            OrderStatus::Cancelled,
            OrderStatus::Pending,
        );
        assert!(reason.contains("cancelled"));
    }
}
