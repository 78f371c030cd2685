//! Payment Order Value Objects

mod beneficiary;
mod order_status;
mod payment_method;

pub use beneficiary::Beneficiary;
pub use order_status::OrderStatus;
pub use payment_method::PaymentMethod;
