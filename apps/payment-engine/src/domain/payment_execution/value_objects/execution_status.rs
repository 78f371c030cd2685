//! Execution status in the gateway attempt lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a payment execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Execution record created, gateway not yet invoked.
    Initiated,
    /// Waiting for gateway response.
    Pending,
    /// Being processed by the gateway.
    Processing,
    /// Gateway approved the payment.
    Success,
    /// Gateway declined or the attempt errored.
    Failed,
    /// Gateway timed out.
    Timeout,
    /// Payment settled with the gateway.
    Settled,
    /// Payment reversed/refunded.
    Reversed,
}

impl ExecutionStatus {
    /// Returns true if a retry attempt may be created from this execution.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns true if the execution can be settled.
    #[must_use]
    pub const fn can_settle(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if the execution can be reversed.
    #[must_use]
    pub const fn can_reverse(&self) -> bool {
        matches!(self, Self::Success | Self::Settled)
    }

    /// Returns true if this attempt has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Timeout | Self::Settled | Self::Reversed)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initiated => write!(f, "INITIATED"),
            Self::Pending => write!(f, "PENDING"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Failed => write!(f, "FAILED"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Settled => write!(f, "SETTLED"),
            Self::Reversed => write!(f, "REVERSED"),
        }
    }
}
