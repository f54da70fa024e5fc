//! Client configuration options.

use std::time::Duration;

use crate::{Environment, Error, Result};

/// Configuration for the Coinbase Pro client.
///
/// # Example
///
/// ```
/// use cbpro_recurring_buy::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Sandbox)
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which API to talk to
    pub environment: Environment,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!(
                "cbpro-recurring-buy/{} (Rust)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// How long to wait for a submitted order to settle.
///
/// Each entry of the schedule is the delay before one status fetch. The
/// poller stops at the first settled observation, or after the last entry,
/// reporting whatever it saw last. Fetching status never re-submits the
/// order.
///
/// The default is a short wait for the matching engine followed by one long
/// fallback for an overloaded exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementPolicy {
    schedule: Vec<Duration>,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            schedule: vec![Duration::from_secs(5), Duration::from_secs(30)],
        }
    }
}

impl SettlementPolicy {
    /// Create a policy from explicit per-fetch delays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the schedule is empty; at least one
    /// status fetch is required to produce a report.
    pub fn new(schedule: Vec<Duration>) -> Result<Self> {
        if schedule.is_empty() {
            return Err(Error::InvalidInput(
                "Settlement schedule needs at least one fetch".to_string(),
            ));
        }
        Ok(Self { schedule })
    }

    /// A short wait then a single long wait.
    pub fn short_then_long(short: Duration, long: Duration) -> Self {
        Self {
            schedule: vec![short, long],
        }
    }

    /// Delays before each status fetch, in order.
    pub fn schedule(&self) -> &[Duration] {
        &self.schedule
    }

    /// Upper bound on status fetches.
    pub fn max_fetches(&self) -> usize {
        self.schedule.len()
    }

    /// Longest the poller can wait in total.
    pub fn total_wait(&self) -> Duration {
        self.schedule.iter().sum()
    }
}
