//! Order status in the payment lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a payment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created, awaiting processing.
    Pending,
    /// Order scheduled for future execution.
    Scheduled,
    /// Order is being processed.
    Processing,
    /// Order successfully completed.
    Completed,
    /// Order failed after the latest execution attempt.
    Failed,
    /// Order cancelled by user/system.
    Cancelled,
    /// Order refunded.
    Refunded,
}

impl OrderStatus {
    /// Returns true if a new execution attempt may be started.
    ///
    /// `execute_payment` rejects completed and cancelled orders.
    #[must_use]
    pub const fn can_execute(&self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if the order can still be cancelled.
    #[must_use]
    pub const fn is_cancellable(&self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if field updates (name/email/description) are allowed.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Scheduled => write!(f, "SCHEDULED"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Refunded => write!(f, "REFUNDED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_execute() {
        assert!(OrderStatus::Pending.can_execute());
        assert!(OrderStatus::Scheduled.can_execute());
        assert!(OrderStatus::Processing.can_execute());
        assert!(OrderStatus::Failed.can_execute());
        assert!(OrderStatus::Refunded.can_execute());
        assert!(!OrderStatus::Completed.can_execute());
        assert!(!OrderStatus::Cancelled.can_execute());
    }

    #[test]
    fn is_cancellable() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Processing.is_cancellable());
        assert!(!OrderStatus::Completed.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn only_pending_is_mutable() {
        assert!(OrderStatus::Pending.is_mutable());
        assert!(!OrderStatus::Scheduled.is_mutable());
        assert!(!OrderStatus::Processing.is_mutable());
        assert!(!OrderStatus::Failed.is_mutable());
    }

    #[test]
    fn display_screaming_snake() {
        assert_eq!(format!("{}", OrderStatus::Pending), "PENDING");
        assert_eq!(format!("{}", OrderStatus::Refunded), "REFUNDED");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");

        let parsed: OrderStatus = serde_json::from_str("\"PROCESSING\"").unwrap();
        assert_eq!(parsed, OrderStatus::Processing);
    }
}
