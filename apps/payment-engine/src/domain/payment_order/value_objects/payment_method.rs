//! Payment method for an order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer funds the payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Credit card.
    CreditCard,
    /// Debit card.
    DebitCard,
    /// Direct bank transfer.
    BankTransfer,
    /// Unified Payments Interface.
    Upi,
    /// Digital wallet.
    Wallet,
    /// Net banking.
    NetBanking,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "CREDIT_CARD"),
            Self::DebitCard => write!(f, "DEBIT_CARD"),
            Self::BankTransfer => write!(f, "BANK_TRANSFER"),
            Self::Upi => write!(f, "UPI"),
            Self::Wallet => write!(f, "WALLET"),
            Self::NetBanking => write!(f, "NET_BANKING"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(format!("{}", PaymentMethod::BankTransfer), "BANK_TRANSFER");
        assert_eq!(format!("{}", PaymentMethod::Upi), "UPI");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"CREDIT_CARD\"");

        let parsed: PaymentMethod = serde_json::from_str("\"WALLET\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Wallet);
    }
}
