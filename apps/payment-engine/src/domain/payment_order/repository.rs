//! Order Repository Trait
//!
//! Defines the persistence abstraction for payment orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::PaymentOrder;
use super::value_objects::OrderStatus;
use crate::domain::shared::{CustomerId, Money, OrderId, OrderReference, PaymentError, Timestamp};

/// Predicate for listing orders.
///
/// Results come back in store-defined order; no ordering contract
/// beyond "stable for a given snapshot".
#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// All orders.
    All,
    /// Orders for one customer.
    Customer(CustomerId),
    /// Orders with a given status.
    Status(OrderStatus),
    /// Orders for one customer with a given status.
    CustomerAndStatus(CustomerId, OrderStatus),
    /// Orders created within an inclusive time range.
    CreatedBetween(Timestamp, Timestamp),
    /// Orders with amount within an inclusive range.
    AmountBetween(Money, Money),
}

/// Repository trait for PaymentOrder persistence.
///
/// The store enforces uniqueness of order references; `save` is
/// insert-or-update keyed by id.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save an order (insert or update).
    ///
    /// # Errors
    ///
    /// Returns `Storage` if persistence fails, including when another
    /// order already holds the same reference.
    async fn save(&self, order: &PaymentOrder) -> Result<(), PaymentError>;

    /// Find an order by its id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<PaymentOrder>, PaymentError>;

    /// Find an order by its unique reference.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_reference(
        &self,
        reference: &OrderReference,
    ) -> Result<Option<PaymentOrder>, PaymentError>;

    /// List orders matching a filter.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_filter(&self, filter: &OrderFilter)
    -> Result<Vec<PaymentOrder>, PaymentError>;

    /// Check whether a reference is already taken.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn exists_by_reference(&self, reference: &OrderReference)
    -> Result<bool, PaymentError>;

    /// Hard-delete an order, cascading to its executions.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist.
    async fn delete(&self, id: &OrderId) -> Result<(), PaymentError>;

    /// Count orders for a customer in a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn count_by_customer_and_status(
        &self,
        customer_id: &CustomerId,
        status: OrderStatus,
    ) -> Result<u64, PaymentError>;

    /// Sum order amounts for a customer in a given status.
    ///
    /// Returns `Money::ZERO` when no rows match.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn sum_amount_by_customer_and_status(
        &self,
        customer_id: &CustomerId,
        status: OrderStatus,
    ) -> Result<Money, PaymentError>;
}
