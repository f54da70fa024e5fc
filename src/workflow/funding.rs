//! Locating a funding source and depositing from it.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::DepositRequest;
use crate::classify;
use crate::exchange::Exchange;
use crate::models::{Currency, DepositReceipt, FundingMethod, NewDeposit, PaymentMethod};
use crate::{Error, Result};

/// Pick the payment method to deposit from.
///
/// The first method whose type equals `wanted`, in the order the exchange
/// listed them, is returned. Several methods of the same type are not told
/// apart: the first one always wins.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if no method matches. The account needs
/// a linked source of that type; retrying will not help.
pub fn locate_payment_method(
    methods: &[PaymentMethod],
    wanted: FundingMethod,
) -> Result<&PaymentMethod> {
    let method = methods
        .iter()
        .find(|method| method.method_type == wanted.as_api_type())
        .ok_or_else(|| {
            Error::Configuration(format!(
                "no matching payment method of type {} among {} linked methods",
                wanted,
                methods.len()
            ))
        })?;

    debug!("Payment method name: {}", method.name);
    debug!("Payment method ID: {}", method.id);
    match method.remaining_deposit_limit() {
        Some(remaining) => debug!("Payment method remaining limit: {}", remaining),
        None => debug!("Payment method remaining limit: unknown"),
    }
    if method.allow_deposit == Some(false) {
        warn!(
            "Payment method {} is flagged as not allowing deposits; the exchange may refuse it",
            method.name
        );
    }

    Ok(method)
}

/// Deposit `amount` from an already located payment method.
///
/// Called exactly once per run; a failed deposit is reported, never
/// retried, since a duplicate would move money twice.
pub async fn deposit_from<E: Exchange + ?Sized>(
    exchange: &E,
    method: &PaymentMethod,
    amount: Decimal,
    currency: &Currency,
) -> Result<DepositReceipt> {
    let body = NewDeposit {
        amount,
        currency: currency.clone(),
        payment_method_id: method.id.clone(),
    };

    let reply = classify::classify(exchange.deposit(&body).await?)?;
    let receipt: DepositReceipt = classify::decode(reply, "deposit")?;

    info!(
        "Deposited {} {} to Coinbase Pro from payment method {}",
        amount, currency, method.name
    );
    info!("Deposit will be available at {}", receipt.payout_at);

    Ok(receipt)
}

/// Find the requested funding source and deposit from it.
///
/// No deposit is attempted if the payment method list cannot be read or
/// holds no method of the requested type.
pub async fn deposit<E: Exchange + ?Sized>(
    exchange: &E,
    request: &DepositRequest,
) -> Result<DepositReceipt> {
    let reply = classify::classify(exchange.payment_methods().await?)?;
    let methods: Vec<PaymentMethod> = classify::decode(reply, "payment methods")?;

    let method = locate_payment_method(&methods, request.funding_method)?;

    if let Some(remaining) = method.remaining_deposit_limit() {
        if request.amount > remaining {
            warn!(
                "Requested {} {} exceeds the remaining deposit limit of {}; the exchange may refuse it",
                request.amount, request.currency, remaining
            );
        }
    }

    deposit_from(exchange, method, request.amount, &request.currency).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn method(id: &str, method_type: &str) -> PaymentMethod {
        serde_json::from_value(json!({
            "id": id,
            "type": method_type,
            "name": format!("{} account", id),
        }))
        .unwrap()
    }

    #[test]
    fn test_single_match_found_at_any_position() {
        for position in 0..3 {
            let mut methods = vec![
                method("wallet", "fiat_account"),
                method("card", "credit_card"),
            ];
            methods.insert(position, method("bank", "ach_bank_account"));

            let found = locate_payment_method(&methods, FundingMethod::AchBankAccount).unwrap();
            assert_eq!(found.id.as_str(), "bank");
        }
    }

    #[test]
    fn test_no_match_is_configuration_error() {
        let methods = vec![method("wallet", "fiat_account")];
        let err = locate_payment_method(&methods, FundingMethod::AchBankAccount).unwrap_err();
        assert!(matches!(err, Error::Configuration(ref m) if m.contains("no matching payment method")));

        let err = locate_payment_method(&[], FundingMethod::AchBankAccount).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_deposit_flag_does_not_change_selection() {
        let mut blocked = method("bank-a", "ach_bank_account");
        blocked.allow_deposit = Some(false);
        let methods = vec![blocked, method("bank-b", "ach_bank_account")];

        let found = locate_payment_method(&methods, FundingMethod::AchBankAccount).unwrap();
        assert_eq!(found.id.as_str(), "bank-a");
        assert_eq!(found.allow_deposit, Some(false));
    }

    #[test]
    fn test_first_of_several_matches_wins() {
        let methods = vec![
            method("wallet", "fiat_account"),
            method("bank-a", "ach_bank_account"),
            method("bank-b", "ach_bank_account"),
        ];
        for _ in 0..3 {
            let found = locate_payment_method(&methods, FundingMethod::AchBankAccount).unwrap();
            assert_eq!(found.id.as_str(), "bank-a");
        }
    }
}
