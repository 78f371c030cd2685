//! Application Ports
//!
//! Outbound interfaces implemented by infrastructure adapters.

mod gateway_port;

pub use gateway_port::{GatewayError, PaymentGatewayPort};

#[cfg(test)]
pub use gateway_port::MockPaymentGatewayPort;
