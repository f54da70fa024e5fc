//! Payment methods service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::Result;

/// Service for listing linked funding sources.
///
/// # Example
///
/// ```no_run
/// use cbpro_recurring_buy::classify;
/// use cbpro_recurring_buy::models::PaymentMethod;
///
/// # async fn example(client: cbpro_recurring_buy::CoinbaseProClient) -> cbpro_recurring_buy::Result<()> {
/// let reply = client.payment_methods().list().await?;
/// let methods: Vec<PaymentMethod> = classify::decode(classify::classify(reply)?, "payment methods")?;
/// for method in &methods {
///     println!("{} ({})", method.name, method.method_type);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaymentMethodsService {
    inner: Arc<ClientInner>,
}

impl PaymentMethodsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all payment methods linked to the account, in the order the
    /// exchange returns them.
    pub async fn list(&self) -> Result<Value> {
        self.inner.get("/payment-methods").await
    }
}
