//! Domain errors for the payment engine.

use thiserror::Error;

/// Errors surfaced by the payment lifecycle core.
///
/// Each variant maps to a stable, distinguishable outward signal so
/// that callers can tell "not found" from "illegal for current status"
/// from "malformed input".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Requested order/execution id or reference does not exist.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Entity type (e.g., "payment order").
        entity: &'static str,
        /// Identifier or reference that was looked up.
        key: String,
    },

    /// The requested action is illegal for the entity's current status.
    #[error("{0}")]
    InvalidOperation(String),

    /// Malformed input rejected before persistence.
    #[error("invalid value for '{field}': {message}")]
    Validation {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Persistence failure, including reference uniqueness violations.
    #[error("storage error: {0}")]
    Storage(String),
}

impl PaymentError {
    /// An order was not found by id or reference.
    #[must_use]
    pub fn order_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "payment order",
            key: key.into(),
        }
    }

    /// An execution was not found by id or reference.
    #[must_use]
    pub fn execution_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "payment execution",
            key: key.into(),
        }
    }

    /// A status-gate violation.
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// A field-level validation failure.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = PaymentError::order_not_found("ORD-DEADBEEF");
        let msg = format!("{err}");
        assert!(msg.contains("payment order"));
        assert!(msg.contains("ORD-DEADBEEF"));
    }

    #[test]
    fn invalid_operation_display() {
        let err = PaymentError::invalid_operation("Cannot cancel order in status: COMPLETED");
        assert!(format!("{err}").contains("COMPLETED"));
    }

    #[test]
    fn validation_display() {
        let err = PaymentError::validation("amount", "must be positive");
        let msg = format!("{err}");
        assert!(msg.contains("amount"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn payment_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PaymentError::execution_not_found("42"));
        assert!(!err.to_string().is_empty());
    }
}
