//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod errors;
pub mod value_objects;

pub use errors::PaymentError;
pub use value_objects::{
    Currency, CustomerId, ExecutionId, ExecutionReference, Money, OrderId, OrderReference,
    Timestamp,
};
