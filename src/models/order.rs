//! Order models for placing a market buy and observing its settlement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::enums::{OrderSide, OrderType};
use super::primitives::{Currency, OrderId, ProductId};

/// A market order sized by the amount of quote currency to spend.
///
/// # Example
///
/// ```
/// use cbpro_recurring_buy::models::NewMarketOrder;
/// use cbpro_recurring_buy::ProductId;
/// use rust_decimal_macros::dec;
///
/// let order = NewMarketOrder::buy(ProductId::new("BTC-USD").unwrap(), dec!(50)).unwrap();
/// assert_eq!(order.funds, dec!(50));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMarketOrder {
    /// Always [`OrderType::Market`]
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order side
    pub side: OrderSide,
    /// Pair to trade
    pub product_id: ProductId,
    /// Quote currency to spend; the filled size is only known at settlement
    pub funds: Decimal,
}

impl NewMarketOrder {
    /// Build a market buy spending `funds` of the pair's quote currency.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `funds` is not positive.
    pub fn buy(product_id: ProductId, funds: Decimal) -> crate::Result<Self> {
        if funds <= Decimal::ZERO {
            return Err(crate::Error::InvalidInput(format!(
                "Order funds must be positive, got {}",
                funds
            )));
        }
        Ok(Self {
            order_type: OrderType::Market,
            side: OrderSide::Buy,
            product_id,
            funds,
        })
    }
}

/// Order state as returned by `GET /orders/{id}`.
///
/// The exchange flips `settled` asynchronously; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Order ID
    #[serde(default)]
    pub id: Option<OrderId>,
    /// Whether the trade has fully executed and fees are final
    pub settled: bool,
    /// Base asset quantity filled so far; zero while the exchange omits it
    #[serde(default)]
    pub filled_size: Decimal,
    /// Fees charged so far, in quote currency; zero while omitted
    #[serde(default)]
    pub fill_fees: Decimal,
    /// Quote currency actually spent
    #[serde(default)]
    pub executed_value: Option<Decimal>,
    /// Exchange status string (`pending`, `open`, `done`)
    #[serde(default)]
    pub status: Option<String>,
    /// Why the order is done (`filled`, `canceled`)
    #[serde(default)]
    pub done_reason: Option<String>,
}

/// Final outcome of a buy, produced after the bounded settlement wait.
///
/// A report is produced even when `record.settled` is still `false` after
/// the last scheduled fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FillReport {
    /// The submitted order
    pub order_id: OrderId,
    /// Pair bought
    pub product_id: ProductId,
    /// Fiat amount requested, as given by the caller
    pub funds: Decimal,
    /// Fiat currency, as given by the caller
    pub currency: Currency,
    /// Last observed settlement record
    pub record: SettlementRecord,
    /// Number of status fetches performed
    pub fetches: usize,
}

impl FillReport {
    /// Whether settlement was actually observed.
    pub fn is_settled(&self) -> bool {
        self.record.settled
    }
}

impl fmt::Display for FillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bought {} {} of {}, resulting in {} {} (fees: {} {})",
            self.funds,
            self.currency,
            self.product_id.base(),
            self.record.filled_size,
            self.product_id.base(),
            self.record.fill_fees,
            self.currency,
        )?;
        if !self.record.settled {
            write!(f, " [unsettled after {} checks]", self.fetches)?;
        }
        Ok(())
    }
}
