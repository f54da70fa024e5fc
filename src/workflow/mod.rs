//! The two one-shot actions: deposit fiat, or buy a pair with it.
//!
//! Inputs arrive as immutable request values built by the caller (the CLI
//! in the binary). Each action runs against any [`Exchange`] and either
//! returns its outcome or fails with the first error; nothing is retried
//! except the built-in extra settlement check of [`buy`].
//!
//! ```no_run
//! use cbpro_recurring_buy::workflow::{Action, BuyRequest};
//! use cbpro_recurring_buy::{CoinbaseProClient, Credentials, Currency, Environment, ProductId, SettlementPolicy};
//! use rust_decimal_macros::dec;
//!
//! # async fn example() -> cbpro_recurring_buy::Result<()> {
//! let client = CoinbaseProClient::new(Credentials::from_env()?, Environment::Sandbox)?;
//! let action = Action::Buy(BuyRequest::new(
//!     ProductId::new("BTC-USD")?,
//!     dec!(20),
//!     Currency::new("USD")?,
//! )?);
//! let outcome = action.run(&client, &SettlementPolicy::default()).await?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

mod buy;
mod funding;

use rust_decimal::Decimal;
use std::fmt;

pub use buy::buy;
pub use funding::{deposit, deposit_from, locate_payment_method};

use crate::client::SettlementPolicy;
use crate::exchange::Exchange;
use crate::models::{Currency, DepositReceipt, FillReport, FundingMethod, ProductId};
use crate::{Error, Result};

/// A request to move fiat from a linked payment method into the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    /// Fiat amount
    pub amount: Decimal,
    /// Fiat currency
    pub currency: Currency,
    /// Which kind of linked source to draw from
    pub funding_method: FundingMethod,
}

impl DepositRequest {
    /// Create a deposit request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `amount` is not positive.
    pub fn new(amount: Decimal, currency: Currency, funding_method: FundingMethod) -> Result<Self> {
        ensure_positive(amount)?;
        Ok(Self {
            amount,
            currency,
            funding_method,
        })
    }
}

/// A request to market-buy a pair, spending a fiat amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyRequest {
    /// Pair to buy
    pub product_id: ProductId,
    /// Fiat amount to spend
    pub amount: Decimal,
    /// Fiat currency of `amount`
    pub currency: Currency,
}

impl BuyRequest {
    /// Create a buy request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `amount` is not positive.
    pub fn new(product_id: ProductId, amount: Decimal, currency: Currency) -> Result<Self> {
        ensure_positive(amount)?;
        Ok(Self {
            product_id,
            amount,
            currency,
        })
    }
}

fn ensure_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidInput(format!(
            "Amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

/// Exactly one action per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Deposit fiat
    Deposit(DepositRequest),
    /// Market buy
    Buy(BuyRequest),
}

/// What a completed action produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Deposit accepted
    Deposited(DepositReceipt),
    /// Buy submitted and observed
    Bought(FillReport),
}

impl Action {
    /// Run the action against an exchange.
    pub async fn run<E: Exchange + ?Sized>(
        &self,
        exchange: &E,
        policy: &SettlementPolicy,
    ) -> Result<Outcome> {
        match self {
            Action::Deposit(request) => deposit(exchange, request).await.map(Outcome::Deposited),
            Action::Buy(request) => buy(exchange, request, policy).await.map(Outcome::Bought),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Deposited(receipt) => {
                write!(f, "Deposit will be available at {}", receipt.payout_at)
            }
            Outcome::Bought(report) => write!(f, "{}", report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_requests_reject_non_positive_amounts() {
        let usd = Currency::default();
        assert!(DepositRequest::new(dec!(0), usd.clone(), FundingMethod::AchBankAccount).is_err());
        assert!(BuyRequest::new(ProductId::new("BTC-USD").unwrap(), dec!(-1), usd.clone()).is_err());
        assert!(BuyRequest::new(ProductId::new("BTC-USD").unwrap(), dec!(10), usd).is_ok());
    }
}
