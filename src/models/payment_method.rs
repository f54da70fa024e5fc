//! Payment method models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::PaymentMethodId;

/// A linked funding source as listed by `GET /payment-methods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Unique identifier used when depositing
    pub id: PaymentMethodId,
    /// Kind of source (e.g. `ach_bank_account`)
    #[serde(rename = "type")]
    pub method_type: String,
    /// Human-readable name, usually bank name plus masked account number
    pub name: String,
    /// Currency the method is denominated in
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether deposits are allowed from this method
    #[serde(default)]
    pub allow_deposit: Option<bool>,
    /// Transfer limits
    #[serde(default)]
    pub limits: Option<PaymentMethodLimits>,
}

impl PaymentMethod {
    /// Remaining amount that may still be deposited in the current limit
    /// period, taken from the first deposit limit the exchange lists.
    pub fn remaining_deposit_limit(&self) -> Option<Decimal> {
        self.limits
            .as_ref()
            .and_then(|limits| limits.deposit.first())
            .map(|limit| limit.remaining.amount)
    }
}

/// Limits attached to a payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentMethodLimits {
    /// Deposit limits, one per limit period
    #[serde(default)]
    pub deposit: Vec<TransferLimit>,
}

/// A single rolling transfer limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferLimit {
    /// Length of the rolling window
    #[serde(default)]
    pub period_in_days: Option<u32>,
    /// Total allowed in the window
    #[serde(default)]
    pub total: Option<Money>,
    /// Still available in the window
    pub remaining: Money,
}

/// An amount paired with its currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    /// Amount
    pub amount: Decimal,
    /// Currency code
    pub currency: String,
}
