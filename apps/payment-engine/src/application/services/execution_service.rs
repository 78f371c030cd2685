//! Execution Orchestration Service
//!
//! Drives payment attempts through the gateway and keeps order status
//! in sync with execution outcomes. Every attempt reaches a terminal
//! status: a transport failure at the gateway becomes a failed
//! execution, never an error surfaced to the caller.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::ports::PaymentGatewayPort;
use crate::domain::payment_execution::aggregate::PaymentExecution;
use crate::domain::payment_execution::repository::ExecutionRepository;
use crate::domain::payment_execution::value_objects::ExecutionStatus;
use crate::domain::payment_order::aggregate::PaymentOrder;
use crate::domain::payment_order::repository::OrderRepository;
use crate::domain::payment_order::value_objects::OrderStatus;
use crate::domain::shared::{
    CustomerId, ExecutionId, ExecutionReference, OrderId, OrderReference, PaymentError,
};

/// Application service orchestrating payment executions.
pub struct ExecutionService<O, E, G> {
    orders: Arc<O>,
    executions: Arc<E>,
    gateway: Arc<G>,
}

impl<O, E, G> ExecutionService<O, E, G>
where
    O: OrderRepository,
    E: ExecutionRepository,
    G: PaymentGatewayPort,
{
    /// Create a new execution service.
    pub fn new(orders: Arc<O>, executions: Arc<E>, gateway: Arc<G>) -> Self {
        Self {
            orders,
            executions,
            gateway,
        }
    }

    /// Execute the payment for an order.
    ///
    /// Creates a fresh execution attempt, moves the order to
    /// `Processing`, and drives the attempt through the gateway. The
    /// returned execution is terminal for this attempt: `Success` or
    /// `Failed`, with the order moved to `Completed` or `Failed`
    /// accordingly.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist,
    /// `InvalidOperation` if it is completed or cancelled. Gateway
    /// failures do not error; they yield a failed execution.
    #[instrument(skip_all, fields(order_id = %order_id))]
    pub async fn execute_payment(
        &self,
        order_id: &OrderId,
    ) -> Result<PaymentExecution, PaymentError> {
        let mut order = self.load_order(order_id).await?;

        match order.status() {
            OrderStatus::Completed => {
                return Err(PaymentError::invalid_operation("Order is already completed"));
            }
            OrderStatus::Cancelled => {
                return Err(PaymentError::invalid_operation("Cannot execute cancelled order"));
            }
            _ => {}
        }

        let execution = PaymentExecution::new(&order, 0);
        order.transition_to(OrderStatus::Processing)?;
        self.executions.save_with_order(&execution, &order).await?;
        info!(
            execution_reference = %execution.execution_reference(),
            order_reference = %order.order_reference(),
            "payment execution initiated"
        );

        self.drive_through_gateway(execution, order).await
    }

    /// Retry a failed execution.
    ///
    /// The failed record is left untouched; a sibling execution is
    /// created against the same order with the attempt counter bumped.
    /// The order keeps its current status until the attempt resolves.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the execution or its order does not
    /// exist, `InvalidOperation` unless the execution is `Failed`.
    #[instrument(skip_all, fields(execution_id = %execution_id))]
    pub async fn retry_execution(
        &self,
        execution_id: &ExecutionId,
    ) -> Result<PaymentExecution, PaymentError> {
        let failed = self.load_execution(execution_id).await?;
        if !failed.status().is_retryable() {
            return Err(PaymentError::invalid_operation("Can only retry failed executions"));
        }

        let order = self.load_order(failed.order_id()).await?;
        let retry = PaymentExecution::new(&order, failed.retry_attempt() + 1);
        self.executions.save(&retry).await?;
        info!(
            execution_reference = %retry.execution_reference(),
            retry_attempt = retry.retry_attempt(),
            "retrying failed execution"
        );

        self.drive_through_gateway(retry, order).await
    }

    /// Settle a successful execution.
    ///
    /// The order is not touched; it completed when the attempt
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the execution does not exist,
    /// `InvalidOperation` unless it is `Success`.
    #[instrument(skip_all, fields(execution_id = %execution_id))]
    pub async fn settle_execution(
        &self,
        execution_id: &ExecutionId,
    ) -> Result<PaymentExecution, PaymentError> {
        let mut execution = self.load_execution(execution_id).await?;
        execution.settle()?;
        self.executions.save(&execution).await?;
        info!(
            execution_reference = %execution.execution_reference(),
            "execution settled"
        );
        Ok(execution)
    }

    /// Reverse a successful or settled execution.
    ///
    /// The owning order is moved to `Refunded` regardless of its
    /// current status, in the same atomic write.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the execution or its order does not
    /// exist, `InvalidOperation` unless the execution is `Success` or
    /// `Settled`.
    #[instrument(skip_all, fields(execution_id = %execution_id))]
    pub async fn reverse_execution(
        &self,
        execution_id: &ExecutionId,
    ) -> Result<PaymentExecution, PaymentError> {
        let mut execution = self.load_execution(execution_id).await?;
        execution.reverse()?;

        let mut order = self.load_order(execution.order_id()).await?;
        order.force_status(OrderStatus::Refunded);
        self.executions.save_with_order(&execution, &order).await?;
        info!(
            execution_reference = %execution.execution_reference(),
            order_reference = %order.order_reference(),
            "execution reversed, order refunded"
        );
        Ok(execution)
    }

    /// Administrative status override.
    ///
    /// Applies the status without precondition checks. Forcing
    /// `Success` also completes the order; forcing `Failed` also fails
    /// it. Other statuses leave the order alone.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the execution (or, when cascading, its
    /// order) does not exist.
    #[instrument(skip_all, fields(execution_id = %execution_id, to = %new_status))]
    pub async fn update_execution_status(
        &self,
        execution_id: &ExecutionId,
        new_status: ExecutionStatus,
    ) -> Result<PaymentExecution, PaymentError> {
        let mut execution = self.load_execution(execution_id).await?;
        execution.force_status(new_status);

        let cascade = match new_status {
            ExecutionStatus::Success => Some(OrderStatus::Completed),
            ExecutionStatus::Failed => Some(OrderStatus::Failed),
            _ => None,
        };

        if let Some(order_status) = cascade {
            let mut order = self.load_order(execution.order_id()).await?;
            order.force_status(order_status);
            self.executions.save_with_order(&execution, &order).await?;
        } else {
            self.executions.save(&execution).await?;
        }
        warn!(
            execution_reference = %execution.execution_reference(),
            "execution status overridden"
        );
        Ok(execution)
    }

    /// Fetch an execution by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no execution has this id.
    pub async fn get_execution(
        &self,
        execution_id: &ExecutionId,
    ) -> Result<PaymentExecution, PaymentError> {
        self.load_execution(execution_id).await
    }

    /// Fetch an execution by its unique reference.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no execution has this reference.
    pub async fn get_execution_by_reference(
        &self,
        reference: &ExecutionReference,
    ) -> Result<PaymentExecution, PaymentError> {
        self.executions
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| PaymentError::execution_not_found(reference.as_str()))
    }

    /// List executions for an order, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_by_order(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        self.executions.find_by_order(order_id).await
    }

    /// List executions for an order reference, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_by_order_reference(
        &self,
        order_reference: &OrderReference,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        self.executions.find_by_order_reference(order_reference).await
    }

    /// List executions with a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_by_status(
        &self,
        status: ExecutionStatus,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        self.executions.find_by_status(status).await
    }

    /// List executions across all orders of a customer, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        self.executions.find_by_customer(customer_id).await
    }

    /// Run one attempt through the gateway and persist the outcome
    /// together with the order it moves.
    async fn drive_through_gateway(
        &self,
        mut execution: PaymentExecution,
        mut order: PaymentOrder,
    ) -> Result<PaymentExecution, PaymentError> {
        execution.begin_processing()?;
        self.executions.save(&execution).await?;

        match self.gateway.process_payment(&execution).await {
            Ok(result) if result.approved => {
                execution.record_success(&result)?;
                order.force_status(OrderStatus::Completed);
                self.executions.save_with_order(&execution, &order).await?;
                info!(
                    execution_reference = %execution.execution_reference(),
                    transaction_id = result.transaction_id,
                    "payment approved"
                );
            }
            Ok(result) => {
                execution.record_decline(&result)?;
                order.force_status(OrderStatus::Failed);
                self.executions.save_with_order(&execution, &order).await?;
                warn!(
                    execution_reference = %execution.execution_reference(),
                    error_code = result.error_code.as_deref().unwrap_or(""),
                    "payment declined"
                );
            }
            Err(err) => {
                execution.record_error("GATEWAY_ERROR", err.to_string())?;
                order.force_status(OrderStatus::Failed);
                self.executions.save_with_order(&execution, &order).await?;
                warn!(
                    execution_reference = %execution.execution_reference(),
                    error = %err,
                    "gateway call failed"
                );
            }
        }

        Ok(execution)
    }

    async fn load_order(&self, order_id: &OrderId) -> Result<PaymentOrder, PaymentError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| PaymentError::order_not_found(order_id.as_str()))
    }

    async fn load_execution(
        &self,
        execution_id: &ExecutionId,
    ) -> Result<PaymentExecution, PaymentError> {
        self.executions
            .find_by_id(execution_id)
            .await?
            .ok_or_else(|| PaymentError::execution_not_found(execution_id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{GatewayError, MockPaymentGatewayPort};
    use crate::domain::payment_execution::value_objects::GatewayResult;
    use crate::domain::payment_order::aggregate::CreateOrderCommand;
    use crate::domain::payment_order::value_objects::{Beneficiary, PaymentMethod};
    use crate::domain::shared::{Currency, Money};
    use crate::infrastructure::persistence::InMemoryPaymentStore;
    use rust_decimal_macros::dec;

    fn make_command() -> CreateOrderCommand {
        CreateOrderCommand {
            customer_id: CustomerId::new("CUST-001"),
            customer_name: "Jordan Blake".to_string(),
            customer_email: "jordan@example.com".to_string(),
            amount: Money::new(dec!(100.00)),
            currency: Currency::new("USD").unwrap(),
            payment_method: PaymentMethod::CreditCard,
            beneficiary: Beneficiary::new("Acme Corp", "000123456789", "First National"),
            description: None,
            scheduled_at: None,
        }
    }

    async fn seed_order(store: &Arc<InMemoryPaymentStore>) -> PaymentOrder {
        let order = PaymentOrder::new(make_command()).unwrap();
        OrderRepository::save(store.as_ref(), &order).await.unwrap();
        order
    }

    fn service(
        store: &Arc<InMemoryPaymentStore>,
        gateway: MockPaymentGatewayPort,
    ) -> ExecutionService<InMemoryPaymentStore, InMemoryPaymentStore, MockPaymentGatewayPort> {
        ExecutionService::new(Arc::clone(store), Arc::clone(store), Arc::new(gateway))
    }

    #[tokio::test]
    async fn approved_attempt_completes_the_order() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().times(1).returning(|_| {
            Ok(GatewayResult::approved(
                "GW-1",
                "MOCK_GATEWAY",
                "Payment processed successfully",
            ))
        });

        let svc = service(&store, gateway);
        let execution = svc.execute_payment(order.id()).await.unwrap();

        assert_eq!(execution.status(), ExecutionStatus::Success);
        assert_eq!(execution.gateway_transaction_id(), Some("GW-1"));
        assert!(execution.processed_at().is_some());

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Completed);
        assert!(stored_order.completed_at().is_some());
    }

    #[tokio::test]
    async fn declined_attempt_fails_the_order() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().times(1).returning(|_| {
            Ok(GatewayResult::declined(
                "GW-2",
                "MOCK_GATEWAY",
                "Payment declined by gateway",
                "GATEWAY_DECLINED",
                "Insufficient funds or invalid payment method",
            ))
        });

        let svc = service(&store, gateway);
        let execution = svc.execute_payment(order.id()).await.unwrap();

        assert_eq!(execution.status(), ExecutionStatus::Failed);
        assert_eq!(execution.error_code(), Some("GATEWAY_DECLINED"));

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Failed);
    }

    #[tokio::test]
    async fn gateway_transport_failure_becomes_failed_execution() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway
            .expect_process_payment()
            .times(1)
            .returning(|_| Err(GatewayError::Unreachable("connection refused".to_string())));

        let svc = service(&store, gateway);
        // No error propagates to the caller.
        let execution = svc.execute_payment(order.id()).await.unwrap();

        assert_eq!(execution.status(), ExecutionStatus::Failed);
        assert_eq!(execution.error_code(), Some("GATEWAY_ERROR"));
        assert!(execution.error_message().unwrap().contains("connection refused"));

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Failed);
    }

    #[tokio::test]
    async fn completed_and_cancelled_orders_reject_execution() {
        let store = Arc::new(InMemoryPaymentStore::new());

        let mut completed = PaymentOrder::new(make_command()).unwrap();
        completed.transition_to(OrderStatus::Completed).unwrap();
        OrderRepository::save(store.as_ref(), &completed).await.unwrap();

        let mut cancelled = PaymentOrder::new(make_command()).unwrap();
        cancelled.cancel().unwrap();
        OrderRepository::save(store.as_ref(), &cancelled).await.unwrap();

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().never();
        let svc = service(&store, gateway);

        let err = svc.execute_payment(completed.id()).await.unwrap_err();
        assert_eq!(
            err,
            PaymentError::invalid_operation("Order is already completed")
        );

        let err = svc.execute_payment(cancelled.id()).await.unwrap_err();
        assert_eq!(
            err,
            PaymentError::invalid_operation("Cannot execute cancelled order")
        );
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().never();
        let svc = service(&store, gateway);

        let err = svc.execute_payment(&OrderId::generate()).await.unwrap_err();
        assert!(matches!(err, PaymentError::NotFound { .. }));
    }

    #[tokio::test]
    async fn retry_creates_sibling_and_preserves_original() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        let mut calls = 0u32;
        gateway.expect_process_payment().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(GatewayResult::declined(
                    "GW-3",
                    "MOCK_GATEWAY",
                    "Payment declined by gateway",
                    "GATEWAY_DECLINED",
                    "Insufficient funds or invalid payment method",
                ))
            } else {
                Ok(GatewayResult::approved(
                    "GW-4",
                    "MOCK_GATEWAY",
                    "Payment processed successfully",
                ))
            }
        });

        let svc = service(&store, gateway);
        let failed = svc.execute_payment(order.id()).await.unwrap();
        assert_eq!(failed.status(), ExecutionStatus::Failed);

        let retried = svc.retry_execution(failed.id()).await.unwrap();
        assert_ne!(retried.id(), failed.id());
        assert_ne!(retried.execution_reference(), failed.execution_reference());
        assert_eq!(retried.retry_attempt(), 1);
        assert_eq!(retried.status(), ExecutionStatus::Success);

        // The failed record is untouched.
        let original = svc.get_execution(failed.id()).await.unwrap();
        assert_eq!(original.status(), ExecutionStatus::Failed);

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Completed);
    }

    #[tokio::test]
    async fn retry_rejected_unless_failed() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().times(1).returning(|_| {
            Ok(GatewayResult::approved(
                "GW-5",
                "MOCK_GATEWAY",
                "Payment processed successfully",
            ))
        });

        let svc = service(&store, gateway);
        let success = svc.execute_payment(order.id()).await.unwrap();

        let err = svc.retry_execution(success.id()).await.unwrap_err();
        assert_eq!(
            err,
            PaymentError::invalid_operation("Can only retry failed executions")
        );
    }

    #[tokio::test]
    async fn settle_then_reverse_refunds_the_order() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().times(1).returning(|_| {
            Ok(GatewayResult::approved(
                "GW-6",
                "MOCK_GATEWAY",
                "Payment processed successfully",
            ))
        });

        let svc = service(&store, gateway);
        let execution = svc.execute_payment(order.id()).await.unwrap();

        let settled = svc.settle_execution(execution.id()).await.unwrap();
        assert_eq!(settled.status(), ExecutionStatus::Settled);
        assert!(settled.settled_at().is_some());

        let reversed = svc.reverse_execution(execution.id()).await.unwrap();
        assert_eq!(reversed.status(), ExecutionStatus::Reversed);

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Refunded);
    }

    #[tokio::test]
    async fn override_success_cascades_to_order() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().times(1).returning(|_| {
            Ok(GatewayResult::declined(
                "GW-7",
                "MOCK_GATEWAY",
                "Payment declined by gateway",
                "GATEWAY_DECLINED",
                "Insufficient funds or invalid payment method",
            ))
        });

        let svc = service(&store, gateway);
        let failed = svc.execute_payment(order.id()).await.unwrap();

        let overridden = svc
            .update_execution_status(failed.id(), ExecutionStatus::Success)
            .await
            .unwrap();
        assert_eq!(overridden.status(), ExecutionStatus::Success);
        assert!(overridden.processed_at().is_some());

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Completed);
    }

    #[tokio::test]
    async fn override_without_cascade_leaves_order_alone() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let order = seed_order(&store).await;

        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_process_payment().times(1).returning(|_| {
            Ok(GatewayResult::approved(
                "GW-8",
                "MOCK_GATEWAY",
                "Payment processed successfully",
            ))
        });

        let svc = service(&store, gateway);
        let execution = svc.execute_payment(order.id()).await.unwrap();

        svc.update_execution_status(execution.id(), ExecutionStatus::Settled)
            .await
            .unwrap();

        let stored_order = OrderRepository::find_by_id(store.as_ref(), order.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_order.status(), OrderStatus::Completed);
    }
}
