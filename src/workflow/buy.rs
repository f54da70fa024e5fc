//! Market buy submission and bounded settlement polling.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::BuyRequest;
use crate::classify;
use crate::client::SettlementPolicy;
use crate::exchange::Exchange;
use crate::models::{FillReport, NewMarketOrder, OrderId, SettlementRecord};
use crate::{Error, Result};

/// Submit a market buy and wait, within `policy`, for it to settle.
///
/// The order is placed exactly once. Its status is then fetched after each
/// delay of the policy schedule until a fetch reports `settled`, or until
/// the schedule is exhausted. In the latter case the last observation is
/// reported anyway: the returned [`FillReport`] may describe an order that
/// had not settled yet.
///
/// # Errors
///
/// Before any status fetch:
/// - [`Error::Authentication`] if the exchange rejects the credentials
/// - [`Error::InsufficientFunds`] if the balance cannot cover `amount`
/// - [`Error::Rejected`] for any other exchange-reported refusal
/// - [`Error::Integration`] if a success reply carries no order id
///
/// During polling, a status reply that cannot be read fails the run the
/// same way; the order itself stands.
pub async fn buy<E: Exchange + ?Sized>(
    exchange: &E,
    request: &BuyRequest,
    policy: &SettlementPolicy,
) -> Result<FillReport> {
    if request.product_id.quote() != request.currency.as_str() {
        warn!(
            "Pair {} is not quoted in {}; funds are spent in {}",
            request.product_id,
            request.currency,
            request.product_id.quote()
        );
    }

    let order = NewMarketOrder::buy(request.product_id.clone(), request.amount)?;
    let reply = classify::classify(exchange.place_market_order(&order).await?)?;
    let order_id = classify::order_id(&reply)?;

    info!(
        "Placed market buy {} for {} {} of {}",
        order_id, request.amount, request.currency, request.product_id
    );

    let (record, fetches) = await_settlement(exchange, &order_id, policy).await?;

    let report = FillReport {
        order_id,
        product_id: request.product_id.clone(),
        funds: request.amount,
        currency: request.currency.clone(),
        record,
        fetches,
    };

    if report.is_settled() {
        info!("{}", report);
    } else {
        warn!(
            "Order {} still unsettled after {:?}; reporting last observation",
            report.order_id,
            policy.total_wait()
        );
        info!("{}", report);
    }
    info!("Fees: {} {}", report.record.fill_fees, report.currency);

    Ok(report)
}

/// Poll the order on the policy schedule. Read-only: never re-submits.
async fn await_settlement<E: Exchange + ?Sized>(
    exchange: &E,
    order_id: &OrderId,
    policy: &SettlementPolicy,
) -> Result<(SettlementRecord, usize)> {
    let mut last = None;

    for (attempt, delay) in policy.schedule().iter().enumerate() {
        tokio::time::sleep(*delay).await;

        let reply = classify::classify(exchange.order(order_id).await?)?;
        let record = read_settlement(reply)?;
        let fetches = attempt + 1;

        if record.settled {
            debug!("Order {} settled after {} check(s)", order_id, fetches);
            return Ok((record, fetches));
        }

        debug!(
            "Order {} not settled after check {} of {}",
            order_id,
            fetches,
            policy.max_fetches()
        );
        last = Some((record, fetches));
    }

    last.ok_or_else(|| Error::InvalidInput("Settlement schedule is empty".to_string()))
}

/// Decode a status reply.
///
/// Pending orders may omit their fill fields, which then read as zero. A
/// settled order must carry both.
fn read_settlement(reply: Value) -> Result<SettlementRecord> {
    let settled = reply.get("settled").and_then(Value::as_bool) == Some(true);
    if settled {
        if let Some(field) = ["filled_size", "fill_fees"]
            .into_iter()
            .find(|field| reply.get(*field).map_or(true, Value::is_null))
        {
            return Err(Error::Integration(format!(
                "Settled order reply has no {}: {}",
                field, reply
            )));
        }
    }
    classify::decode(reply, "order status")
}
