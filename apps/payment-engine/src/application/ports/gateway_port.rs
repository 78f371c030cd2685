//! Payment Gateway Port
//!
//! Outbound port for driving a single payment attempt through an
//! external provider. Implementations report the business outcome
//! (approved or declined) as an `Ok(GatewayResult)`; `GatewayError` is
//! reserved for transport-level failures where no outcome was
//! obtained. The orchestrator converts those into failed executions
//! rather than propagating them to callers.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment_execution::aggregate::PaymentExecution;
use crate::domain::payment_execution::value_objects::GatewayResult;
use crate::domain::payment_order::aggregate::PaymentOrder;

/// Transport-level gateway failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The provider could not be reached.
    #[error("gateway unreachable: {0}")]
    Unreachable(String),

    /// The provider did not answer in time.
    #[error("gateway request timed out after {0} ms")]
    Timeout(u64),
}

/// Port for submitting one execution attempt to a payment provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Process a payment attempt.
    ///
    /// Returns the provider's verdict with transaction metadata. A
    /// decline is a successful call; only transport failures error.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when no verdict could be obtained.
    async fn process_payment(
        &self,
        execution: &PaymentExecution,
    ) -> Result<GatewayResult, GatewayError>;

    /// Check whether an order carries enough detail for a provider to
    /// accept it: a positive amount and a beneficiary account.
    fn validate_payment_details(&self, order: &PaymentOrder) -> bool {
        order.amount().is_positive() && !order.beneficiary().account.trim().is_empty()
    }

    /// Query the provider for a transaction's current status.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when the provider cannot be reached.
    async fn check_payment_status(
        &self,
        gateway_transaction_id: &str,
    ) -> Result<String, GatewayError>;

    /// Ask the provider to refund a transaction.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when the provider cannot be reached.
    async fn initiate_refund(&self, gateway_transaction_id: &str)
    -> Result<bool, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment_order::aggregate::CreateOrderCommand;
    use crate::domain::payment_order::value_objects::{Beneficiary, PaymentMethod};
    use crate::domain::shared::{Currency, CustomerId, Money};
    use rust_decimal_macros::dec;

    struct NoopGateway;

    #[async_trait]
    impl PaymentGatewayPort for NoopGateway {
        async fn process_payment(
            &self,
            _execution: &PaymentExecution,
        ) -> Result<GatewayResult, GatewayError> {
            Err(GatewayError::Unreachable("noop".to_string()))
        }

        async fn check_payment_status(
            &self,
            _gateway_transaction_id: &str,
        ) -> Result<String, GatewayError> {
            Ok("COMPLETED".to_string())
        }

        async fn initiate_refund(
            &self,
            _gateway_transaction_id: &str,
        ) -> Result<bool, GatewayError> {
            Ok(true)
        }
    }

    fn make_order() -> PaymentOrder {
        PaymentOrder::new(CreateOrderCommand {
            customer_id: CustomerId::new("CUST-001"),
            customer_name: "Jordan Blake".to_string(),
            customer_email: "jordan@example.com".to_string(),
            amount: Money::new(dec!(100)),
            currency: Currency::new("USD").unwrap(),
            payment_method: PaymentMethod::NetBanking,
            beneficiary: Beneficiary::new("Acme Corp", "000123456789", "First National"),
            description: None,
            scheduled_at: None,
        })
        .unwrap()
    }

    #[test]
    fn valid_order_passes_detail_check() {
        assert!(NoopGateway.validate_payment_details(&make_order()));
    }

    #[test]
    fn blank_beneficiary_account_fails_detail_check() {
        // An order deserialized from stored data can carry fields that
        // creation-time validation would have rejected.
        let mut order = make_order();
        let mut value = serde_json::to_value(&order).unwrap();
        value["beneficiary"]["account"] = serde_json::Value::String("  ".to_string());
        order = serde_json::from_value(value).unwrap();
        assert!(!NoopGateway.validate_payment_details(&order));
    }
}
