//! Error types for the Coinbase Pro recurring-buy client.
//!
//! Every failure the deposit and buy workflows can hit is mapped into the
//! closed [`Error`] taxonomy. Errors are propagated to the binary's single
//! top-level handler, which picks the process exit code with
//! [`Error::exit_code`].

use thiserror::Error;

/// A specialized `Result` type for recurring-buy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all deposit and buy operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading a local file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Credentials file is not valid TOML
    #[error("Credentials file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Account or invocation is set up in a way the run cannot proceed with
    /// (no matching payment method, missing credentials).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Locally supplied credentials are malformed (e.g. the secret is not
    /// valid Base64).
    #[error("Credential error: {0}")]
    Credential(String),

    /// The exchange rejected the API key, passphrase or signature
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The exchange reported an insufficient fiat balance for the order
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// A success-shaped reply is missing a field the workflow depends on
    #[error("Integration error: {0}")]
    Integration(String),

    /// The exchange refused the request for a reason not covered above
    #[error("Request rejected by exchange: {reason}")]
    Rejected {
        /// The exchange's own message
        reason: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rate limited by the API
    #[error("Rate limited by exchange")]
    RateLimited,
}

impl Error {
    /// Returns `true` if this error is potentially transient.
    ///
    /// Nothing in the workflows retries automatically; this only shapes
    /// [`Error::summary`] for whoever schedules the next run.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Http(_) | Error::RateLimited)
    }

    /// One-line failure summary for stderr.
    ///
    /// Transient failures get a rerun hint. A transport error may have hit
    /// after the exchange accepted the request, so the hint asks for a
    /// check first.
    pub fn summary(&self) -> String {
        if self.is_retryable() {
            format!(
                "{} failure: {} (transient; check the account before rerunning)",
                self.kind(),
                self
            )
        } else {
            format!("{} failure: {}", self.kind(), self)
        }
    }

    /// Returns `true` if this is a credential or authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::Credential(_))
    }

    /// Short, stable name of the failure kind, used in the terminal log line.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration(_) | Error::InvalidInput(_) | Error::Toml(_) => "configuration",
            Error::Credential(_) | Error::Authentication(_) => "credential",
            Error::InsufficientFunds(_) => "insufficient_funds",
            Error::Integration(_) => "integration",
            Error::Rejected { .. } => "rejected",
            Error::RateLimited => "rate_limited",
            Error::Http(_) | Error::UrlParse(_) => "transport",
            Error::Json(_) => "decode",
            Error::Io(_) => "io",
        }
    }

    /// Process exit code for this error.
    ///
    /// | code | kind |
    /// |---|---|
    /// | 2 | configuration / invalid input |
    /// | 3 | credential / authentication |
    /// | 4 | insufficient funds |
    /// | 5 | integration |
    /// | 6 | exchange rejection |
    /// | 1 | anything else |
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            "configuration" => 2,
            "credential" => 3,
            "insufficient_funds" => 4,
            "integration" => 5,
            "rejected" => 6,
            _ => 1,
        }
    }
}
