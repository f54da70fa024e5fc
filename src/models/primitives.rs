//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up order ids, payment method ids and product ids at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A strongly-typed order ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new order ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed payment method ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodId(String);

impl PaymentMethodId {
    /// Create a new payment method ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the payment method ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tradable pair in `BASE-QUOTE` form (e.g. `BTC-USD`).
///
/// # Example
///
/// ```
/// use cbpro_recurring_buy::ProductId;
///
/// let pair: ProductId = "btc-usd".parse().unwrap();
/// assert_eq!(pair.as_str(), "BTC-USD");
/// assert_eq!(pair.base(), "BTC");
/// assert_eq!(pair.quote(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID, validating the `BASE-QUOTE` shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] unless the value is two non-empty
    /// alphanumeric symbols joined by a single `-`.
    pub fn new(pair: &str) -> Result<Self> {
        let pair = pair.trim().to_ascii_uppercase();
        let valid = match pair.split_once('-') {
            Some((base, quote)) => is_symbol(base) && is_symbol(quote),
            None => false,
        };
        if !valid {
            return Err(Error::InvalidInput(format!(
                "Invalid pair: {}. Expected BASE-QUOTE, e.g. BTC-USD",
                pair
            )));
        }
        Ok(Self(pair))
    }

    /// Get the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The asset being bought.
    pub fn base(&self) -> &str {
        self.0.split_once('-').map(|(base, _)| base).unwrap_or(&self.0)
    }

    /// The asset being spent.
    pub fn quote(&self) -> &str {
        self.0.split_once('-').map(|(_, quote)| quote).unwrap_or("")
    }
}

impl FromStr for ProductId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<ProductId> for String {
    fn from(pair: ProductId) -> Self {
        pair.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ISO-4217-like currency code (e.g. `USD`, `EUR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a currency code, upper-casing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the code is empty or not
    /// alphanumeric.
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim().to_ascii_uppercase();
        if !is_symbol(&code) {
            return Err(Error::InvalidInput(format!("Invalid currency code: {:?}", code)));
        }
        Ok(Self(code))
    }

    /// Get the currency code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self("USD".to_string())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_symbol(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Environment configuration for the Coinbase Pro API.
///
/// # Example
///
/// ```
/// use cbpro_recurring_buy::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - real money moves.
    #[default]
    Production,
    /// Public sandbox with fake balances.
    Sandbox,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.pro.coinbase.com",
            Environment::Sandbox => "https://api-public.sandbox.pro.coinbase.com",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id() {
        let id = OrderId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn test_product_id_valid() {
        let pair = ProductId::new("eth-eur").unwrap();
        assert_eq!(pair.as_str(), "ETH-EUR");
        assert_eq!(pair.base(), "ETH");
        assert_eq!(pair.quote(), "EUR");
    }

    #[test]
    fn test_product_id_invalid() {
        assert!(ProductId::new("BTC").is_err());
        assert!(ProductId::new("BTC-").is_err());
        assert!(ProductId::new("-USD").is_err());
        assert!(ProductId::new("BTC-USD-X").is_err());
        assert!(ProductId::new("").is_err());
        assert!(serde_json::from_str::<ProductId>("\"BTCUSD\"").is_err());
    }

    #[test]
    fn test_currency() {
        assert_eq!(Currency::new("usd").unwrap().as_str(), "USD");
        assert_eq!(Currency::default().as_str(), "USD");
        assert!(Currency::new("").is_err());
        assert!(Currency::new("U$D").is_err());
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Production.api_base_url(),
            "https://api.pro.coinbase.com"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api-public.sandbox.pro.coinbase.com"
        );
        assert!(!Environment::Sandbox.is_production());
    }
}
