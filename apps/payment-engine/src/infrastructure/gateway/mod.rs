//! Gateway Adapters

mod fixed;
mod simulated;

pub use fixed::{FixedOutcomeGateway, Outcome};
pub use simulated::SimulatedGateway;
