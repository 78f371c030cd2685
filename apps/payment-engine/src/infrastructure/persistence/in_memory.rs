//! In-Memory Payment Store
//!
//! Implements both repository traits over two maps behind one lock, so
//! `save_with_order` really is atomic: readers either see both records
//! updated or neither.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::payment_execution::aggregate::PaymentExecution;
use crate::domain::payment_execution::repository::ExecutionRepository;
use crate::domain::payment_execution::value_objects::ExecutionStatus;
use crate::domain::payment_order::aggregate::PaymentOrder;
use crate::domain::payment_order::repository::{OrderFilter, OrderRepository};
use crate::domain::payment_order::value_objects::OrderStatus;
use crate::domain::shared::{
    CustomerId, ExecutionId, ExecutionReference, Money, OrderId, OrderReference, PaymentError,
};

#[derive(Default)]
struct StoreInner {
    orders: HashMap<OrderId, PaymentOrder>,
    executions: HashMap<ExecutionId, PaymentExecution>,
}

impl StoreInner {
    fn check_order_reference(&self, order: &PaymentOrder) -> Result<(), PaymentError> {
        let taken = self
            .orders
            .values()
            .any(|o| o.order_reference() == order.order_reference() && o.id() != order.id());
        if taken {
            return Err(PaymentError::Storage(format!(
                "order reference already in use: {}",
                order.order_reference()
            )));
        }
        Ok(())
    }

    fn check_execution_reference(&self, execution: &PaymentExecution) -> Result<(), PaymentError> {
        let taken = self.executions.values().any(|e| {
            e.execution_reference() == execution.execution_reference() && e.id() != execution.id()
        });
        if taken {
            return Err(PaymentError::Storage(format!(
                "execution reference already in use: {}",
                execution.execution_reference()
            )));
        }
        Ok(())
    }

    fn executions_newest_first<'a>(
        &'a self,
        mut pred: impl FnMut(&PaymentExecution) -> bool + 'a,
    ) -> Vec<PaymentExecution> {
        let mut found: Vec<PaymentExecution> =
            self.executions.values().filter(|e| pred(e)).cloned().collect();
        found.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        found
    }
}

/// In-memory store for orders and executions.
///
/// Backs both bounded contexts for tests and local runs. Cheap to
/// clone via `Arc`; all methods take `&self`.
#[derive(Default)]
pub struct InMemoryPaymentStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryPaymentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryPaymentStore {
    async fn save(&self, order: &PaymentOrder) -> Result<(), PaymentError> {
        let mut inner = self.inner.write().await;
        inner.check_order_reference(order)?;
        inner.orders.insert(order.id().clone(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<PaymentOrder>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner.orders.get(id).cloned())
    }

    async fn find_by_reference(
        &self,
        reference: &OrderReference,
    ) -> Result<Option<PaymentOrder>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .values()
            .find(|o| o.order_reference() == reference)
            .cloned())
    }

    async fn find_by_filter(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<PaymentOrder>, PaymentError> {
        let inner = self.inner.read().await;
        let mut found: Vec<PaymentOrder> = inner
            .orders
            .values()
            .filter(|o| match filter {
                OrderFilter::All => true,
                OrderFilter::Customer(customer_id) => o.customer_id() == customer_id,
                OrderFilter::Status(status) => o.status() == *status,
                OrderFilter::CustomerAndStatus(customer_id, status) => {
                    o.customer_id() == customer_id && o.status() == *status
                }
                OrderFilter::CreatedBetween(from, to) => {
                    o.created_at() >= *from && o.created_at() <= *to
                }
                OrderFilter::AmountBetween(min, max) => {
                    o.amount() >= *min && o.amount() <= *max
                }
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(found)
    }

    async fn exists_by_reference(
        &self,
        reference: &OrderReference,
    ) -> Result<bool, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner.orders.values().any(|o| o.order_reference() == reference))
    }

    async fn delete(&self, id: &OrderId) -> Result<(), PaymentError> {
        let mut inner = self.inner.write().await;
        if inner.orders.remove(id).is_none() {
            return Err(PaymentError::order_not_found(id.as_str()));
        }
        inner.executions.retain(|_, e| e.order_id() != id);
        Ok(())
    }

    async fn count_by_customer_and_status(
        &self,
        customer_id: &CustomerId,
        status: OrderStatus,
    ) -> Result<u64, PaymentError> {
        let inner = self.inner.read().await;
        let count = inner
            .orders
            .values()
            .filter(|o| o.customer_id() == customer_id && o.status() == status)
            .count();
        Ok(count as u64)
    }

    async fn sum_amount_by_customer_and_status(
        &self,
        customer_id: &CustomerId,
        status: OrderStatus,
    ) -> Result<Money, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .values()
            .filter(|o| o.customer_id() == customer_id && o.status() == status)
            .map(PaymentOrder::amount)
            .sum())
    }
}

#[async_trait]
impl ExecutionRepository for InMemoryPaymentStore {
    async fn save(&self, execution: &PaymentExecution) -> Result<(), PaymentError> {
        let mut inner = self.inner.write().await;
        inner.check_execution_reference(execution)?;
        inner
            .executions
            .insert(execution.id().clone(), execution.clone());
        Ok(())
    }

    async fn save_with_order(
        &self,
        execution: &PaymentExecution,
        order: &PaymentOrder,
    ) -> Result<(), PaymentError> {
        let mut inner = self.inner.write().await;
        inner.check_order_reference(order)?;
        inner.check_execution_reference(execution)?;
        inner.orders.insert(order.id().clone(), order.clone());
        inner
            .executions
            .insert(execution.id().clone(), execution.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ExecutionId,
    ) -> Result<Option<PaymentExecution>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner.executions.get(id).cloned())
    }

    async fn find_by_reference(
        &self,
        reference: &ExecutionReference,
    ) -> Result<Option<PaymentExecution>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner
            .executions
            .values()
            .find(|e| e.execution_reference() == reference)
            .cloned())
    }

    async fn find_by_order(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner.executions_newest_first(|e| e.order_id() == order_id))
    }

    async fn find_by_order_reference(
        &self,
        order_reference: &OrderReference,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner.executions_newest_first(|e| e.order_reference() == order_reference))
    }

    async fn find_by_status(
        &self,
        status: ExecutionStatus,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        let inner = self.inner.read().await;
        Ok(inner.executions_newest_first(|e| e.status() == status))
    }

    async fn find_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<PaymentExecution>, PaymentError> {
        let inner = self.inner.read().await;
        let owned: std::collections::HashSet<&OrderId> = inner
            .orders
            .values()
            .filter(|o| o.customer_id() == customer_id)
            .map(PaymentOrder::id)
            .collect();
        Ok(inner.executions_newest_first(|e| owned.contains(e.order_id())))
    }
}
