//! Strongly-typed identifiers and reference codes for domain entities.
//!
//! These prevent mixing up ids and references from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

macro_rules! define_reference {
    ($name:ident, $prefix:expr, $doc:expr) => {
        define_id!($name, $doc);

        impl $name {
            /// Reference prefix (e.g., `"ORD"`).
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh reference: prefix + 8 uppercase alphanumerics.
            ///
            /// Collision probability is treated as negligible; the store's
            /// uniqueness constraint is the authority.
            #[must_use]
            pub fn assign() -> Self {
                let token = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
                Self(format!("{}-{token}", Self::PREFIX))
            }
        }
    };
}

define_id!(OrderId, "Unique identifier for a payment order.");
define_id!(ExecutionId, "Unique identifier for a payment execution.");
define_id!(CustomerId, "Identifier for the customer who placed an order.");
define_reference!(
    OrderReference,
    "ORD",
    "Human-readable unique reference for a payment order (`ORD-XXXXXXXX`)."
);
define_reference!(
    ExecutionReference,
    "EXE",
    "Human-readable unique reference for a payment execution (`EXE-XXXXXXXX`)."
);
