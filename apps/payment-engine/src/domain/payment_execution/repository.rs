//! Execution Repository Trait
//!
//! Persistence abstraction for payment executions. Executions are
//! owned by their order, so there is no standalone delete; removal
//! only happens via the order repository's cascading delete.

use async_trait::async_trait;

use super::aggregate::PaymentExecution;
use super::value_objects::ExecutionStatus;
use crate::domain::payment_order::aggregate::PaymentOrder;
use crate::domain::shared::{
    CustomerId, ExecutionId, ExecutionReference, OrderId, OrderReference, PaymentError,
};

/// Repository trait for PaymentExecution persistence.
#[async_trait]
pub trait ExecutionRepository: Send + Sync {
    /// Save an execution (insert or update).
    ///
    /// # Errors
    ///
    /// Returns `Storage` if persistence fails, including when another
    /// execution already holds the same reference.
    async fn save(&self, execution: &PaymentExecution) -> Result<(), PaymentError>;

    /// Save an execution together with its order in one atomic write.
    ///
    /// Both records become visible together or not at all. This is the
    /// boundary the orchestrator uses whenever an execution outcome
    /// also moves the order.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if persistence fails.
    async fn save_with_order(
        &self,
        execution: &PaymentExecution,
        order: &PaymentOrder,
    ) -> Result<(), PaymentError>;

    /// Find an execution by its id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &ExecutionId)
    -> Result<Option<PaymentExecution>, PaymentError>;

    /// Find an execution by its unique reference.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_reference(
        &self,
        reference: &ExecutionReference,
    ) -> Result<Option<PaymentExecution>, PaymentError>;

    /// List executions for an order, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_order(&self, order_id: &OrderId)
    -> Result<Vec<PaymentExecution>, PaymentError>;

    /// List executions for an order reference, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_order_reference(
        &self,
        order_reference: &OrderReference,
    ) -> Result<Vec<PaymentExecution>, PaymentError>;

    /// List executions with a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_status(
        &self,
        status: ExecutionStatus,
    ) -> Result<Vec<PaymentExecution>, PaymentError>;

    /// List executions across all orders of a customer, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<PaymentExecution>, PaymentError>;
}
