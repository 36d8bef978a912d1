use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the shopper chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    PayPal,
}

impl PaymentMethod {
    /// Parses the payment-method radio value. `"paypal"` selects PayPal;
    /// every other value is treated as a card payment.
    pub fn from_form_value(value: &str) -> Self {
        if value == "paypal" {
            PaymentMethod::PayPal
        } else {
            PaymentMethod::Card
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::PayPal => "paypal",
        }
    }
}

/// A confirmation number shown on the order-complete page.
///
/// Format: `FP-` followed by a 5-digit number in `[10000, 99999]`. Generated
/// fresh for every finalized checkout; never persisted and never checked for
/// collisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn generate() -> Self {
        let n: u32 = rand::rng().random_range(10_000..=99_999);
        Self(format!("FP-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
