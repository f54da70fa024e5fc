//! Deposits service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::NewDeposit;
use crate::Result;

/// Service for moving fiat into the trading wallet.
pub struct DepositsService {
    inner: Arc<ClientInner>,
}

impl DepositsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Deposit from a linked payment method.
    ///
    /// Moves real money; callers must not retry blindly.
    pub async fn from_payment_method(&self, deposit: &NewDeposit) -> Result<Value> {
        self.inner.post("/deposits/payment-method", deposit).await
    }
}
