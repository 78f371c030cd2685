//! Order Lifecycle Service
//!
//! Use cases for creating, querying, amending, and closing payment
//! orders. Status rules live in the aggregate and its state machine;
//! this service sequences loads and saves around them.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::payment_order::aggregate::{CreateOrderCommand, OrderPatch, PaymentOrder};
use crate::domain::payment_order::repository::{OrderFilter, OrderRepository};
use crate::domain::payment_order::value_objects::OrderStatus;
use crate::domain::shared::{CustomerId, Money, OrderId, OrderReference, PaymentError};

/// Application service for the payment order lifecycle.
pub struct OrderService<R> {
    orders: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    /// Create a new order service.
    pub fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }

    /// Create a new payment order.
    ///
    /// The order is persisted in `Pending` with a freshly assigned
    /// unique reference.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the command is invalid, `Storage` if
    /// persistence fails.
    #[instrument(skip_all, fields(customer_id = %cmd.customer_id))]
    pub async fn create_order(&self, cmd: CreateOrderCommand) -> Result<PaymentOrder, PaymentError> {
        let order = PaymentOrder::new(cmd)?;
        self.orders.save(&order).await?;
        info!(
            order_reference = %order.order_reference(),
            amount = %order.amount(),
            currency = %order.currency(),
            "payment order created"
        );
        Ok(order)
    }

    /// Fetch an order by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no order has this id.
    pub async fn get_order(&self, id: &OrderId) -> Result<PaymentOrder, PaymentError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| PaymentError::order_not_found(id.as_str()))
    }

    /// Fetch an order by its unique reference.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no order has this reference.
    pub async fn get_order_by_reference(
        &self,
        reference: &OrderReference,
    ) -> Result<PaymentOrder, PaymentError> {
        self.orders
            .find_by_reference(reference)
            .await?
            .ok_or_else(|| PaymentError::order_not_found(reference.as_str()))
    }

    /// List orders matching a filter.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<PaymentOrder>, PaymentError> {
        self.orders.find_by_filter(filter).await
    }

    /// Amend the mutable fields of a pending order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist,
    /// `InvalidOperation` if it is no longer pending.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn update_order(
        &self,
        id: &OrderId,
        patch: OrderPatch,
    ) -> Result<PaymentOrder, PaymentError> {
        let mut order = self.get_order(id).await?;
        order.apply_patch(patch)?;
        self.orders.save(&order).await?;
        Ok(order)
    }

    /// Move an order to a new status through the validated state
    /// machine.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist,
    /// `InvalidOperation` on an illegal transition.
    #[instrument(skip_all, fields(order_id = %id, to = %new_status))]
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        new_status: OrderStatus,
    ) -> Result<PaymentOrder, PaymentError> {
        let mut order = self.get_order(id).await?;
        let from = order.status();
        order.transition_to(new_status)?;
        self.orders.save(&order).await?;
        info!(
            order_reference = %order.order_reference(),
            %from,
            "order status updated"
        );
        Ok(order)
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist,
    /// `InvalidOperation` if it is already completed or cancelled.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn cancel_order(&self, id: &OrderId) -> Result<PaymentOrder, PaymentError> {
        let mut order = self.get_order(id).await?;
        order.cancel()?;
        self.orders.save(&order).await?;
        info!(order_reference = %order.order_reference(), "order cancelled");
        Ok(order)
    }

    /// Hard-delete an order and all its executions.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn delete_order(&self, id: &OrderId) -> Result<(), PaymentError> {
        self.orders.delete(id).await?;
        info!("order deleted");
        Ok(())
    }

    /// Count a customer's orders in a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn count_orders(
        &self,
        customer_id: &CustomerId,
        status: OrderStatus,
    ) -> Result<u64, PaymentError> {
        self.orders
            .count_by_customer_and_status(customer_id, status)
            .await
    }

    /// Sum a customer's order amounts in a given status.
    ///
    /// Returns zero when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    pub async fn total_amount(
        &self,
        customer_id: &CustomerId,
        status: OrderStatus,
    ) -> Result<Money, PaymentError> {
        self.orders
            .sum_amount_by_customer_and_status(customer_id, status)
            .await
    }
}
