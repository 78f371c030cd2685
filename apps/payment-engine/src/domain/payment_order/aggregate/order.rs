//! Payment Order Aggregate Root
//!
//! The PaymentOrder aggregate manages the lifecycle of a customer's
//! request to move funds, from creation through completion,
//! cancellation, or refund. Every status change is routed through the
//! transition methods; fields are never assigned from outside.

use serde::{Deserialize, Serialize};

use crate::domain::payment_order::services::OrderStateMachine;
use crate::domain::payment_order::value_objects::{Beneficiary, OrderStatus, PaymentMethod};
use crate::domain::shared::{Currency, CustomerId, Money, OrderId, OrderReference, PaymentError, Timestamp};

/// Command to create a new payment order.
///
/// Field presence/format checks beyond the core invariants are the
/// boundary validation layer's responsibility; this command enforces
/// only what must hold before persistence.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Customer placing the order.
    pub customer_id: CustomerId,
    /// Customer display name.
    pub customer_name: String,
    /// Customer contact email.
    pub customer_email: String,
    /// Amount to pay (must be > 0).
    pub amount: Money,
    /// 3-letter currency code.
    pub currency: Currency,
    /// Funding method.
    pub payment_method: PaymentMethod,
    /// Receiving party.
    pub beneficiary: Beneficiary,
    /// Free-text description.
    pub description: Option<String>,
    /// Optional future execution time (read by an external poller).
    pub scheduled_at: Option<Timestamp>,
}

impl CreateOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if required parameters are missing or invalid.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.customer_id.as_str().trim().is_empty() {
            return Err(PaymentError::validation("customer_id", "must not be blank"));
        }
        if self.customer_name.trim().is_empty() {
            return Err(PaymentError::validation("customer_name", "must not be blank"));
        }
        if self.customer_email.trim().is_empty() {
            return Err(PaymentError::validation("customer_email", "must not be blank"));
        }
        self.amount.validate_for_order()?;
        self.beneficiary.validate()?;
        Ok(())
    }
}

/// Mutable fields of a pending order.
///
/// `None` leaves the corresponding field unchanged.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    /// Replacement customer name.
    pub customer_name: Option<String>,
    /// Replacement customer email.
    pub customer_email: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
}

/// Payment Order Aggregate Root.
///
/// A customer's request to pay a beneficiary a fixed amount in a given
/// currency. The reference is globally unique and immutable once
/// assigned; `completed_at` is set if and only if the status is
/// `Completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOrder {
    id: OrderId,
    order_reference: OrderReference,
    customer_id: CustomerId,
    customer_name: String,
    customer_email: String,
    amount: Money,
    currency: Currency,
    payment_method: PaymentMethod,
    status: OrderStatus,
    beneficiary: Beneficiary,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
    scheduled_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
}

impl PaymentOrder {
    /// Create a new order from a command.
    ///
    /// Assigns a fresh unique reference and forces the initial status
    /// to `Pending`.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(cmd: CreateOrderCommand) -> Result<Self, PaymentError> {
        cmd.validate()?;

        let now = Timestamp::now();
        Ok(Self {
            id: OrderId::generate(),
            order_reference: OrderReference::assign(),
            customer_id: cmd.customer_id,
            customer_name: cmd.customer_name,
            customer_email: cmd.customer_email,
            amount: cmd.amount,
            currency: cmd.currency,
            payment_method: cmd.payment_method,
            status: OrderStatus::Pending,
            beneficiary: cmd.beneficiary,
            description: cmd.description,
            created_at: now,
            updated_at: now,
            scheduled_at: cmd.scheduled_at,
            completed_at: None,
        })
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the unique order reference.
    #[must_use]
    pub const fn order_reference(&self) -> &OrderReference {
        &self.order_reference
    }

    /// Get the customer ID.
    #[must_use]
    pub const fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Get the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Get the customer email.
    #[must_use]
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Get the order amount.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Get the currency code.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Get the payment method.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the beneficiary details.
    #[must_use]
    pub const fn beneficiary(&self) -> &Beneficiary {
        &self.beneficiary
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
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

    /// Get the scheduled execution timestamp.
    #[must_use]
    pub const fn scheduled_at(&self) -> Option<Timestamp> {
        self.scheduled_at
    }

    /// Get the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Apply a field patch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` unless the order is `Pending`.
    pub fn apply_patch(&mut self, patch: OrderPatch) -> Result<(), PaymentError> {
        if !self.status.is_mutable() {
            return Err(PaymentError::invalid_operation(format!(
                "Cannot update order in status: {}",
                self.status
            )));
        }

        if let Some(name) = patch.customer_name {
            self.customer_name = name;
        }
        if let Some(email) = patch.customer_email {
            self.customer_email = email;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Transition to a new status through the validated state machine.
    ///
    /// Entering `Completed` stamps `completed_at`; entering any other
    /// status clears it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` on an illegal transition.
    pub fn transition_to(&mut self, new_status: OrderStatus) -> Result<(), PaymentError> {
        OrderStateMachine::validate_transition(self.status, new_status)?;
        self.set_status(new_status);
        Ok(())
    }

    /// Cancel the order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the order is already completed or
    /// cancelled.
    pub fn cancel(&mut self) -> Result<(), PaymentError> {
        if !self.status.is_cancellable() {
            return Err(PaymentError::invalid_operation(format!(
                "Cannot cancel order in status: {}",
                self.status
            )));
        }
        self.set_status(OrderStatus::Cancelled);
        Ok(())
    }

    /// Force a status, bypassing the transition table.
    ///
    /// Used by the execution orchestrator for reversal (the order is
    /// refunded from whatever state it is in) and for administrative
    /// execution-status overrides that cascade to the order.
    pub fn force_status(&mut self, new_status: OrderStatus) {
        self.set_status(new_status);
    }

    fn set_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
        self.updated_at = Timestamp::now();
        self.completed_at = if new_status == OrderStatus::Completed {
            Some(self.updated_at)
        } else {
            None
        };
    }
}
