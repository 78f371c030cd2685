//! Infrastructure Layer
//!
//! Adapters implementing the domain repository traits and the gateway
//! port.

pub mod gateway;
pub mod persistence;

pub use gateway::{FixedOutcomeGateway, Outcome, SimulatedGateway};
pub use persistence::InMemoryPaymentStore;
