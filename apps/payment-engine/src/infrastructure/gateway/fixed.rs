//! Fixed-Outcome Gateway
//!
//! Deterministic gateway double: plays back a scripted sequence of
//! outcomes, then keeps approving once the script is exhausted. Used
//! by the lifecycle tests where the random simulator would flake.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{GatewayError, PaymentGatewayPort};
use crate::domain::payment_execution::aggregate::PaymentExecution;
use crate::domain::payment_execution::value_objects::GatewayResult;

const PROVIDER: &str = "FIXED_GATEWAY";

/// One scripted gateway outcome.
#[derive(Debug)]
pub enum Outcome {
    /// The attempt is approved.
    Approve,
    /// The attempt is declined by the provider.
    Decline,
    /// The call fails at transport level.
    Error,
}

/// Gateway adapter with scripted outcomes.
pub struct FixedOutcomeGateway {
    script: Mutex<VecDeque<Outcome>>,
}

impl FixedOutcomeGateway {
    /// A gateway that approves every attempt.
    #[must_use]
    pub fn approving() -> Self {
        Self::with_script([])
    }

    /// A gateway that plays back `script`, then approves.
    #[must_use]
    pub fn with_script(script: impl IntoIterator<Item = Outcome>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    fn transaction_id() -> String {
        format!("GW-{}", uuid::Uuid::new_v4())
    }
}

#[async_trait]
impl PaymentGatewayPort for FixedOutcomeGateway {
    async fn process_payment(
        &self,
        _execution: &PaymentExecution,
    ) -> Result<GatewayResult, GatewayError> {
        let outcome = self
            .script
            .lock()
            .await
            .pop_front()
            .unwrap_or(Outcome::Approve);

        match outcome {
            Outcome::Approve => Ok(GatewayResult::approved(
                Self::transaction_id(),
                PROVIDER,
                "Payment processed successfully",
            )),
            Outcome::Decline => Ok(GatewayResult::declined(
                Self::transaction_id(),
                PROVIDER,
                "Payment declined by gateway",
                "GATEWAY_DECLINED",
                "Insufficient funds or invalid payment method",
            )),
            Outcome::Error => Err(GatewayError::Unreachable(
                "connection refused".to_string(),
            )),
        }
    }

    async fn check_payment_status(
        &self,
        _gateway_transaction_id: &str,
    ) -> Result<String, GatewayError> {
        Ok("COMPLETED".to_string())
    }

    async fn initiate_refund(&self, _gateway_transaction_id: &str) -> Result<bool, GatewayError> {
        Ok(true)
    }
}
