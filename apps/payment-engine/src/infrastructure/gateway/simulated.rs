//! Simulated Payment Gateway
//!
//! Stand-in provider for local runs: waits a configurable latency,
//! then approves a configurable percentage of attempts at random.

use async_trait::async_trait;
use rand::Rng;
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::application::ports::{GatewayError, PaymentGatewayPort};
use crate::config::GatewayConfig;
use crate::domain::payment_execution::aggregate::PaymentExecution;
use crate::domain::payment_execution::value_objects::GatewayResult;

/// Randomized gateway simulator.
pub struct SimulatedGateway {
    config: GatewayConfig,
}

impl SimulatedGateway {
    /// Create a simulator from configuration.
    #[must_use]
    pub const fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    fn transaction_id() -> String {
        format!("GW-{}", uuid::Uuid::new_v4())
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

#[async_trait]
impl PaymentGatewayPort for SimulatedGateway {
    async fn process_payment(
        &self,
        execution: &PaymentExecution,
    ) -> Result<GatewayResult, GatewayError> {
        sleep(Duration::from_millis(self.config.latency_ms)).await;

        let roll = rand::rng().random_range(0..100u8);
        let approved = roll < self.config.success_rate;
        debug!(
            execution_reference = %execution.execution_reference(),
            amount = %execution.amount(),
            roll,
            approved,
            "simulated gateway verdict"
        );

        let result = if approved {
            GatewayResult::approved(
                Self::transaction_id(),
                self.config.provider.clone(),
                "Payment processed successfully",
            )
        } else {
            GatewayResult::declined(
                Self::transaction_id(),
                self.config.provider.clone(),
                "Payment declined by gateway",
                "GATEWAY_DECLINED",
                "Insufficient funds or invalid payment method",
            )
        };
        Ok(result)
    }

    async fn check_payment_status(
        &self,
        gateway_transaction_id: &str,
    ) -> Result<String, GatewayError> {
        debug!(gateway_transaction_id, "checking payment status");
        Ok("COMPLETED".to_string())
    }

    async fn initiate_refund(&self, gateway_transaction_id: &str) -> Result<bool, GatewayError> {
        debug!(gateway_transaction_id, "initiating refund");
        Ok(true)
    }
}
