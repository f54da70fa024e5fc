//! # cbpro-recurring-buy
//!
//! Scheduled fiat deposits and market buys against the Coinbase Pro API,
//! meant to run from a periodic job instead of paying the platform's
//! recurring-buy fee.
//!
//! Each invocation performs exactly one action:
//!
//! - **Deposit**: find the linked payment method of the requested type and
//!   move a fiat amount from it into the trading wallet.
//! - **Buy**: place a market order spending a fiat amount on a pair, then
//!   wait a bounded time for it to settle and report the fill.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cbpro_recurring_buy::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> cbpro_recurring_buy::Result<()> {
//!     let client = CoinbaseProClient::new(Credentials::from_env()?, Environment::Sandbox)?;
//!
//!     let request = BuyRequest::new(ProductId::new("BTC-USD")?, dec!(25), Currency::new("USD")?)?;
//!     let report = buy(&client, &request, &SettlementPolicy::default()).await?;
//!
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure handling
//!
//! Every exchange reply passes through [`classify`], which maps the
//! exchange's free-text errors onto [`Error`]. Failures are never retried;
//! the only repeated call is the read-only settlement check.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod classify;
pub mod cli;
pub mod client;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod models;
pub mod workflow;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ClientConfig, CoinbaseProClient, SettlementPolicy};
pub use error::{Error, Result};
pub use exchange::Exchange;
pub use models::{Currency, Environment, FundingMethod, OrderId, PaymentMethodId, ProductId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use cbpro_recurring_buy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, CoinbaseProClient, SettlementPolicy};
    pub use crate::error::{Error, Result};
    pub use crate::exchange::Exchange;
    pub use crate::models::{
        // Primitives
        Currency, Environment, OrderId, PaymentMethodId, ProductId,
        // Enums
        FundingMethod, OrderSide, OrderType,
        // Models
        DepositReceipt, FillReport, NewDeposit, NewMarketOrder, PaymentMethod,
        SettlementRecord,
    };
    pub use crate::workflow::{
        buy, deposit, locate_payment_method, Action, BuyRequest, DepositRequest, Outcome,
    };
}
