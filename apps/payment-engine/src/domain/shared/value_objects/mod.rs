//! Shared Value Objects
//!
//! Immutable types used by both bounded contexts.

mod currency;
mod identifiers;
mod money;
mod timestamp;

pub use currency::Currency;
pub use identifiers::{CustomerId, ExecutionId, ExecutionReference, OrderId, OrderReference};
pub use money::Money;
pub use timestamp::Timestamp;
