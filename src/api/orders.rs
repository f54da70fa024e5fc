//! Orders service for order placement and lookup.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{NewMarketOrder, OrderId};
use crate::Result;

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// use cbpro_recurring_buy::models::NewMarketOrder;
/// use cbpro_recurring_buy::{OrderId, ProductId};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: cbpro_recurring_buy::CoinbaseProClient) -> cbpro_recurring_buy::Result<()> {
/// let order = NewMarketOrder::buy(ProductId::new("BTC-USD")?, dec!(25))?;
/// let placed = client.orders().place(&order).await?;
///
/// if let Some(id) = placed.get("id").and_then(|id| id.as_str()) {
///     let status = client.orders().get(&OrderId::new(id)).await?;
///     println!("settled: {}", status["settled"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Place a new order.
    pub async fn place(&self, order: &NewMarketOrder) -> Result<Value> {
        self.inner.post("/orders", order).await
    }

    /// Get a specific order by ID. Read-only.
    pub async fn get(&self, order_id: &OrderId) -> Result<Value> {
        self.inner.get(&format!("/orders/{}", order_id)).await
    }
}
