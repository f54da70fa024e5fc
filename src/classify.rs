//! Classification of raw exchange replies.
//!
//! Coinbase Pro has no structured error discriminant: failures arrive as a
//! JSON object with a free-text `message`, or occasionally as a bare string.
//! All substring matching against that text lives here, so the rest of the
//! crate only ever sees either a reply that looks successful or a typed
//! [`Error`].
//!
//! ```
//! use cbpro_recurring_buy::{classify, Error};
//! use serde_json::json;
//!
//! let err = classify::classify(json!({"message": "Insufficient funds"})).unwrap_err();
//! assert!(matches!(err, Error::InsufficientFunds(_)));
//!
//! let ok = classify::classify(json!({"id": "abc123"})).unwrap();
//! assert_eq!(classify::order_id(&ok).unwrap().as_str(), "abc123");
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::OrderId;
use crate::{Error, Result};

/// Failure kinds recognisable from reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Key, passphrase or signature rejected
    InvalidCredentials,
    /// Not enough fiat to cover the order
    InsufficientFunds,
}

/// Lower-case needles and what they mean. First match wins.
const INDICATORS: &[(&str, Indicator)] = &[
    ("invalid api key", Indicator::InvalidCredentials),
    ("invalid passphrase", Indicator::InvalidCredentials),
    ("invalid signature", Indicator::InvalidCredentials),
    ("insufficient funds", Indicator::InsufficientFunds),
];

/// Find a known failure indicator in a reply.
///
/// Only error-shaped content is inspected: a bare string reply, or an
/// object's `message`/`error` values and its keys. Successful payloads are
/// never searched, so a payment method named "Insufficient Funds Savings"
/// cannot trip it.
pub fn detect(reply: &Value) -> Option<Indicator> {
    let haystack = error_text(reply)?.to_lowercase();
    INDICATORS
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, indicator)| *indicator)
}

/// Classify a raw reply.
///
/// # Errors
///
/// - [`Error::Authentication`] for an invalid key, passphrase or signature
/// - [`Error::InsufficientFunds`] when the balance cannot cover the order
/// - [`Error::Rejected`] for any other exchange message, surfaced verbatim
///
/// Otherwise the reply is handed back unchanged for decoding.
pub fn classify(reply: Value) -> Result<Value> {
    if let Some(indicator) = detect(&reply) {
        let message = message(&reply);
        return Err(match indicator {
            Indicator::InvalidCredentials => Error::Authentication(message),
            Indicator::InsufficientFunds => Error::InsufficientFunds(message),
        });
    }

    match &reply {
        Value::String(text) => Err(Error::Rejected {
            reason: text.clone(),
        }),
        Value::Object(map) if map.get("id").is_none() => match map.get("message") {
            Some(Value::String(text)) => Err(Error::Rejected {
                reason: text.clone(),
            }),
            _ => Ok(reply),
        },
        _ => Ok(reply),
    }
}

/// Decode a classified reply into a model.
///
/// # Errors
///
/// Returns [`Error::Integration`] when the reply does not have the expected
/// shape; `what` names the reply in the message.
pub fn decode<T: DeserializeOwned>(reply: Value, what: &str) -> Result<T> {
    serde_json::from_value(reply)
        .map_err(|e| Error::Integration(format!("Unexpected {} reply: {}", what, e)))
}

/// Extract the order id from a classified order placement reply.
///
/// # Errors
///
/// Returns [`Error::Integration`] if there is no string `id`.
pub fn order_id(reply: &Value) -> Result<OrderId> {
    reply
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(OrderId::new)
        .ok_or_else(|| {
            Error::Integration(format!("Order reply has no order id: {}", reply))
        })
}

fn error_text(reply: &Value) -> Option<String> {
    match reply {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => {
            let mut parts: Vec<&str> = map.keys().map(String::as_str).collect();
            for field in ["message", "error"] {
                if let Some(Value::String(text)) = map.get(field) {
                    parts.push(text);
                }
            }
            Some(parts.join(" "))
        }
        _ => None,
    }
}

fn message(reply: &Value) -> String {
    match reply {
        Value::String(text) => text.clone(),
        _ => reply
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| reply.to_string()),
    }
}
