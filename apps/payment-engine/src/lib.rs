// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Payment Engine - Rust Core Library
//!
//! Tracks payment orders from creation through settlement or reversal,
//! coordinating one-or-more execution attempts against an external
//! payment gateway.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, state machines)
//!   - `payment_order`: PaymentOrder aggregate, status lifecycle, queries
//!   - `payment_execution`: PaymentExecution aggregate, gateway outcomes
//!
//! - **Application**: Services and orchestration
//!   - `ports`: Interfaces for external systems (`PaymentGatewayPort`)
//!   - `services`: `OrderService` (order lifecycle), `ExecutionService`
//!     (execution orchestration: execute, retry, settle, reverse)
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory store implementing both repository traits
//!   - `gateway`: Simulated gateway and a deterministic test double

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Services and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration types for the engine.
pub mod config;

/// Logging initialization.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::payment_execution::{
    ExecutionRepository, ExecutionStateMachine, ExecutionStatus, GatewayResult, PaymentExecution,
};
pub use domain::payment_order::{
    Beneficiary, CreateOrderCommand, OrderFilter, OrderPatch, OrderRepository, OrderStateMachine,
    OrderStatus, PaymentMethod, PaymentOrder,
};
pub use domain::shared::{
    Currency, CustomerId, ExecutionId, ExecutionReference, Money, OrderId, OrderReference,
    PaymentError, Timestamp,
};

// Application re-exports
pub use application::ports::{GatewayError, PaymentGatewayPort};
pub use application::services::{ExecutionService, OrderService};

// Infrastructure re-exports
pub use infrastructure::gateway::{FixedOutcomeGateway, Outcome, SimulatedGateway};
pub use infrastructure::persistence::InMemoryPaymentStore;
