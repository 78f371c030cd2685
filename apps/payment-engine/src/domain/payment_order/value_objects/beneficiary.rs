//! Beneficiary details for a payment order.

use serde::{Deserialize, Serialize};

use crate::domain::shared::PaymentError;

/// The party receiving the funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Beneficiary name.
    pub name: String,
    /// Beneficiary account number.
    pub account: String,
    /// Beneficiary bank name.
    pub bank: String,
    /// Optional bank routing/IFSC code.
    pub bank_code: Option<String>,
}

impl Beneficiary {
    /// Create beneficiary details.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        account: impl Into<String>,
        bank: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account: account.into(),
            bank: bank.into(),
            bank_code: None,
        }
    }

    /// Set the bank code.
    #[must_use]
    pub fn with_bank_code(mut self, code: impl Into<String>) -> Self {
        self.bank_code = Some(code.into());
        self
    }

    /// Validate that the required fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns error if name, account, or bank is blank.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.name.trim().is_empty() {
            return Err(PaymentError::validation("beneficiary_name", "must not be blank"));
        }
        if self.account.trim().is_empty() {
            return Err(PaymentError::validation(
                "beneficiary_account",
                "must not be blank",
            ));
        }
        if self.bank.trim().is_empty() {
            return Err(PaymentError::validation("beneficiary_bank", "must not be blank"));
        }
        Ok(())
    }
}
