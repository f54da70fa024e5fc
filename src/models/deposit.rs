//! Deposit models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{Currency, PaymentMethodId};

/// Body of `POST /deposits/payment-method`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDeposit {
    /// Fiat amount to move into the trading wallet
    pub amount: Decimal,
    /// Currency of the amount
    pub currency: Currency,
    /// Source payment method
    pub payment_method_id: PaymentMethodId,
}

/// Successful deposit reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositReceipt {
    /// Transfer identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Amount echoed back by the exchange
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Currency echoed back by the exchange
    #[serde(default)]
    pub currency: Option<String>,
    /// When the funds become available for trading
    pub payout_at: DateTime<Utc>,
}
