//! HTTP client and service layer for the Coinbase Pro API.
//!
//! This module provides the authenticated client handle
//! [`CoinbaseProClient`] and the [`SettlementPolicy`] used when waiting for
//! an order to settle.
//!
//! # Example
//!
//! ```no_run
//! use cbpro_recurring_buy::{ClientConfig, CoinbaseProClient, Credentials, Environment};
//!
//! # fn example() -> cbpro_recurring_buy::Result<()> {
//! let config = ClientConfig::default().with_environment(Environment::Sandbox);
//! let client = CoinbaseProClient::with_config(Credentials::from_env()?, config)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, SettlementPolicy};
pub use http::CoinbaseProClient;
pub(crate) use http::ClientInner;
