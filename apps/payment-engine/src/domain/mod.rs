//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless state-machine validation
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`payment_order`]: Order lifecycle management (creation through refund)
//! - [`payment_execution`]: Gateway execution attempts (retry, settlement, reversal)

pub mod payment_execution;
pub mod payment_order;
pub mod shared;
