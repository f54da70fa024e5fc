//! The exchange operations the deposit and buy workflows depend on.
//!
//! The workflows only see this trait, never the transport, so they can be
//! driven by [`CoinbaseProClient`] in production and by an in-memory script
//! in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::CoinbaseProClient;
use crate::models::{NewDeposit, NewMarketOrder, OrderId};
use crate::Result;

/// Authenticated exchange operations.
///
/// Every method returns the exchange's raw, unclassified reply. `Err` is
/// reserved for transport failures; exchange-reported failures come back as
/// reply bodies and are interpreted by [`crate::classify`].
#[async_trait]
pub trait Exchange: Send + Sync {
    /// List linked payment methods.
    async fn payment_methods(&self) -> Result<Value>;

    /// Deposit fiat from a payment method. Not idempotent.
    async fn deposit(&self, deposit: &NewDeposit) -> Result<Value>;

    /// Submit a market order. Not idempotent.
    async fn place_market_order(&self, order: &NewMarketOrder) -> Result<Value>;

    /// Fetch an order's current state. Read-only.
    async fn order(&self, order_id: &OrderId) -> Result<Value>;
}

#[async_trait]
impl Exchange for CoinbaseProClient {
    async fn payment_methods(&self) -> Result<Value> {
        CoinbaseProClient::payment_methods(self).list().await
    }

    async fn deposit(&self, deposit: &NewDeposit) -> Result<Value> {
        self.deposits().from_payment_method(deposit).await
    }

    async fn place_market_order(&self, order: &NewMarketOrder) -> Result<Value> {
        self.orders().place(order).await
    }

    async fn order(&self, order_id: &OrderId) -> Result<Value> {
        self.orders().get(order_id).await
    }
}
