//! Outcome of one gateway payment attempt.

use serde::{Deserialize, Serialize};

/// Provider metadata returned by a gateway attempt.
///
/// The orchestrator applies this to the execution record, so every
/// attempt ends up with a transaction id, provider name, and
/// human-readable response; declines additionally carry an error code
/// and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResult {
    /// Whether the gateway approved the payment.
    pub approved: bool,
    /// Gateway-assigned transaction identifier (`GW-...`).
    pub transaction_id: String,
    /// Gateway provider name.
    pub provider: String,
    /// Raw human-readable gateway response.
    pub response: String,
    /// Error code on decline.
    pub error_code: Option<String>,
    /// Error message on decline.
    pub error_message: Option<String>,
}

impl GatewayResult {
    /// An approved attempt.
    #[must_use]
    pub fn approved(
        transaction_id: impl Into<String>,
        provider: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            approved: true,
            transaction_id: transaction_id.into(),
            provider: provider.into(),
            response: response.into(),
            error_code: None,
            error_message: None,
        }
    }

    /// A declined attempt.
    #[must_use]
    pub fn declined(
        transaction_id: impl Into<String>,
        provider: impl Into<String>,
        response: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            approved: false,
            transaction_id: transaction_id.into(),
            provider: provider.into(),
            response: response.into(),
            error_code: Some(error_code.into()),
            error_message: Some(error_message.into()),
        }
    }
}
