//! Enumeration types for the Coinbase Pro API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order type specifying how the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute immediately at the best available price
    Market,
}

/// Side of the book an order takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Spend quote currency to acquire the base asset
    Buy,
}

/// Linked payment source a deposit may be drawn from.
///
/// The accepted set is closed; new variants map one-to-one onto the
/// exchange's payment method `type` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FundingMethod {
    /// ACH-linked bank account
    #[value(name = "ach_bank_account")]
    AchBankAccount,
}

impl FundingMethod {
    /// The payment method `type` value the exchange uses for this source.
    pub fn as_api_type(&self) -> &'static str {
        match self {
            FundingMethod::AchBankAccount => "ach_bank_account",
        }
    }
}

impl fmt::Display for FundingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"market\"");
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"buy\"");
    }

    #[test]
    fn test_funding_method_api_type() {
        assert_eq!(FundingMethod::AchBankAccount.as_api_type(), "ach_bank_account");
        let parsed: FundingMethod = serde_json::from_str("\"ach_bank_account\"").unwrap();
        assert_eq!(parsed, FundingMethod::AchBankAccount);
    }
}
