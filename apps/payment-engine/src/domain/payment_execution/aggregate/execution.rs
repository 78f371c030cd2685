//! Payment Execution Aggregate Root
//!
//! One attempt to realize a payment order's payment. Amount and
//! currency are snapshotted from the order at creation and never
//! change afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::payment_execution::services::ExecutionStateMachine;
use crate::domain::payment_execution::value_objects::{ExecutionStatus, GatewayResult};
use crate::domain::payment_order::aggregate::PaymentOrder;
use crate::domain::shared::{
    Currency, ExecutionId, ExecutionReference, Money, OrderId, OrderReference, PaymentError,
    Timestamp,
};

/// Payment Execution Aggregate Root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentExecution {
    id: ExecutionId,
    execution_reference: ExecutionReference,
    order_id: OrderId,
    order_reference: OrderReference,
    status: ExecutionStatus,
    amount: Money,
    currency: Currency,
    gateway_transaction_id: Option<String>,
    gateway_provider: Option<String>,
    retry_attempt: u32,
    error_code: Option<String>,
    error_message: Option<String>,
    gateway_response: Option<String>,
    remarks: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
    processed_at: Option<Timestamp>,
    settled_at: Option<Timestamp>,
}

impl PaymentExecution {
    /// Create a new execution for an order.
    ///
    /// Snapshots amount/currency from the order; starts in `Initiated`
    /// with a fresh unique reference.
    #[must_use]
    pub fn new(order: &PaymentOrder, retry_attempt: u32) -> Self {
        let now = Timestamp::now();
        Self {
            id: ExecutionId::generate(),
            execution_reference: ExecutionReference::assign(),
            order_id: order.id().clone(),
            order_reference: order.order_reference().clone(),
            status: ExecutionStatus::Initiated,
            amount: order.amount(),
            currency: order.currency().clone(),
            gateway_transaction_id: None,
            gateway_provider: None,
            retry_attempt,
            error_code: None,
            error_message: None,
            gateway_response: None,
            remarks: None,
            created_at: now,
            updated_at: now,
            processed_at: None,
            settled_at: None,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the execution ID.
    #[must_use]
    pub const fn id(&self) -> &ExecutionId {
        &self.id
    }

    /// Get the unique execution reference.
    #[must_use]
    pub const fn execution_reference(&self) -> &ExecutionReference {
        &self.execution_reference
    }

    /// Get the owning order's id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Get the owning order's reference.
    #[must_use]
    pub const fn order_reference(&self) -> &OrderReference {
        &self.order_reference
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> ExecutionStatus {
        self.status
    }

    /// Get the snapshotted amount.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Get the snapshotted currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Get the gateway transaction id.
    #[must_use]
    pub fn gateway_transaction_id(&self) -> Option<&str> {
        self.gateway_transaction_id.as_deref()
    }

    /// Get the gateway provider name.
    #[must_use]
    pub fn gateway_provider(&self) -> Option<&str> {
        self.gateway_provider.as_deref()
    }

    /// Get the retry-attempt counter (0 for the first attempt).
    #[must_use]
    pub const fn retry_attempt(&self) -> u32 {
        self.retry_attempt
    }

    /// Get the error code, if the attempt failed.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Get the error message, if the attempt failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Get the raw gateway response text.
    #[must_use]
    pub fn gateway_response(&self) -> Option<&str> {
        self.gateway_response.as_deref()
    }

    /// Get operator remarks.
    #[must_use]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Get the processing-completion timestamp.
    #[must_use]
    pub const fn processed_at(&self) -> Option<Timestamp> {
        self.processed_at
    }

    /// Get the settlement timestamp.
    #[must_use]
    pub const fn settled_at(&self) -> Option<Timestamp> {
        self.settled_at
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Mark the execution as handed to the gateway.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless the execution is `Initiated`.
    pub fn begin_processing(&mut self) -> Result<(), PaymentError> {
        ExecutionStateMachine::validate_transition(self.status, ExecutionStatus::Processing)?;
        self.status = ExecutionStatus::Processing;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Record an approved gateway attempt.
    ///
    /// Applies the provider metadata, moves to `Success`, and stamps
    /// `processed_at`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless the execution is `Processing`.
    pub fn record_success(&mut self, result: &GatewayResult) -> Result<(), PaymentError> {
        ExecutionStateMachine::validate_transition(self.status, ExecutionStatus::Success)?;
        self.apply_gateway_metadata(result);
        self.status = ExecutionStatus::Success;
        self.updated_at = Timestamp::now();
        self.processed_at = Some(self.updated_at);
        Ok(())
    }

    /// Record a declined gateway attempt.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless the execution is `Processing`.
    pub fn record_decline(&mut self, result: &GatewayResult) -> Result<(), PaymentError> {
        ExecutionStateMachine::validate_transition(self.status, ExecutionStatus::Failed)?;
        self.apply_gateway_metadata(result);
        self.status = ExecutionStatus::Failed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Record an unexpected failure during the gateway call.
    ///
    /// The orchestrator guarantees every attempt reaches a
    /// terminal-for-this-attempt status, so this is reachable from both
    /// `Initiated` and `Processing`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the execution already reached a
    /// terminal status.
    pub fn record_error(
        &mut self,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Result<(), PaymentError> {
        ExecutionStateMachine::validate_transition(self.status, ExecutionStatus::Failed)?;
        self.error_code = Some(error_code.into());
        self.error_message = Some(error_message.into());
        self.status = ExecutionStatus::Failed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Settle a successful execution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless the status is `Success`.
    pub fn settle(&mut self) -> Result<(), PaymentError> {
        if !self.status.can_settle() {
            return Err(PaymentError::invalid_operation(
                "Can only settle successful executions",
            ));
        }
        self.status = ExecutionStatus::Settled;
        self.updated_at = Timestamp::now();
        self.settled_at = Some(self.updated_at);
        Ok(())
    }

    /// Reverse a successful or settled execution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless the status is `Success` or
    /// `Settled`.
    pub fn reverse(&mut self) -> Result<(), PaymentError> {
        if !self.status.can_reverse() {
            return Err(PaymentError::invalid_operation(
                "Can only reverse successful or settled executions",
            ));
        }
        self.status = ExecutionStatus::Reversed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Force a status without a precondition on the current status.
    ///
    /// Administrative override: this can overwrite a `Settled` or
    /// `Reversed` execution. Forcing `Success` stamps `processed_at`.
    pub fn force_status(&mut self, new_status: ExecutionStatus) {
        self.status = new_status;
        self.updated_at = Timestamp::now();
        if new_status == ExecutionStatus::Success {
            self.processed_at = Some(self.updated_at);
        }
    }

    /// Set operator remarks.
    pub fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.remarks = Some(remarks.into());
        self.updated_at = Timestamp::now();
    }

    fn apply_gateway_metadata(&mut self, result: &GatewayResult) {
        self.gateway_transaction_id = Some(result.transaction_id.clone());
        self.gateway_provider = Some(result.provider.clone());
        self.gateway_response = Some(result.response.clone());
        self.error_code = result.error_code.clone();
        self.error_message = result.error_message.clone();
    }
}
