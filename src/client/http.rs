//! HTTP client implementation for the Coinbase Pro API.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{DepositsService, OrdersService, PaymentMethodsService};
use crate::auth::{Credentials, RequestSigner};
use crate::{Environment, Error, Result};

use super::config::ClientConfig;

/// The authenticated client handle for the Coinbase Pro API.
///
/// Services are reached through method calls that return service structs.
/// The client signs every request and hands replies back unclassified: the
/// exchange reports failures as free-text bodies, which the
/// [`classify`](crate::classify) module interprets.
///
/// # Example
///
/// ```no_run
/// use cbpro_recurring_buy::{CoinbaseProClient, Credentials, Environment};
///
/// # async fn example() -> cbpro_recurring_buy::Result<()> {
/// let credentials = Credentials::from_env()?;
/// let client = CoinbaseProClient::new(credentials, Environment::Sandbox)?;
///
/// let reply = client.payment_methods().list().await?;
/// println!("{}", reply);
/// # Ok(())
/// # }
/// ```
pub struct CoinbaseProClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) signer: RequestSigner,
    pub(crate) config: ClientConfig,
    pub(crate) base_url: Url,
}

impl CoinbaseProClient {
    /// Create a client for the given environment with default settings.
    pub fn new(credentials: Credentials, env: Environment) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default().with_environment(env))
    }

    /// Create a client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let base_url = Url::parse(config.environment.api_base_url())?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                signer: RequestSigner::new(credentials),
                config,
                base_url,
            }),
        })
    }

    /// Get the payment methods service.
    pub fn payment_methods(&self) -> PaymentMethodsService {
        PaymentMethodsService::new(self.inner.clone())
    }

    /// Get the deposits service.
    pub fn deposits(&self) -> DepositsService {
        DepositsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the current environment.
    pub fn environment(&self) -> Environment {
        self.inner.config.environment
    }
}

impl ClientInner {
    /// Make a signed GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, String::new()).await
    }

    /// Make a signed POST request with a JSON body.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_string(body)?;
        self.send(Method::POST, path, body).await
    }

    async fn send(&self, method: Method, path: &str, body: String) -> Result<Value> {
        let url = self.base_url.join(path)?;
        let headers = self.signer.headers(method.as_str(), path, &body)?;

        let mut request = self.http.request(method.clone(), url).headers(headers);
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        tracing::debug!(%method, path, status = response.status().as_u16(), "Exchange replied");

        Self::read_reply(response).await
    }

    /// Read a reply body without judging it.
    ///
    /// Error statuses are returned as bodies, like successes, so the
    /// classifier sees the exchange's own message. A body that is not JSON
    /// is wrapped as a JSON string.
    async fn read_reply(response: reqwest::Response) -> Result<Value> {
        if response.status().as_u16() == 429 {
            return Err(Error::RateLimited);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

impl Clone for CoinbaseProClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for CoinbaseProClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseProClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(env: Environment) -> CoinbaseProClient {
        let creds = Credentials::new("key", "c2VjcmV0", "pass").unwrap();
        CoinbaseProClient::new(creds, env).unwrap()
    }

    #[test]
    fn test_client_environment() {
        assert_eq!(client(Environment::Sandbox).environment(), Environment::Sandbox);
        assert_eq!(
            client(Environment::Production).inner.base_url.as_str(),
            "https://api.pro.coinbase.com/"
        );
    }

    #[test]
    fn test_debug_omits_credentials() {
        let debug_str = format!("{:?}", client(Environment::Sandbox));
        assert!(debug_str.contains("CoinbaseProClient"));
        assert!(!debug_str.contains("pass"));
    }
}
