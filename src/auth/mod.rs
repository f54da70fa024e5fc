//! Authentication for the Coinbase Pro API.
//!
//! Coinbase Pro authenticates every request with an API key, a passphrase
//! and an HMAC-SHA256 signature keyed by the Base64-decoded API secret.
//!
//! ```no_run
//! use cbpro_recurring_buy::Credentials;
//!
//! # fn example() -> cbpro_recurring_buy::Result<()> {
//! // From CBPRO_API_KEY / CBPRO_API_SECRET / CBPRO_API_PASSPHRASE
//! let credentials = Credentials::from_env()?;
//!
//! // Or from a TOML file
//! let credentials = Credentials::from_file("credentials.toml")?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod signer;

pub use credentials::{Credentials, API_KEY_VAR, API_PASSPHRASE_VAR, API_SECRET_VAR};
pub(crate) use signer::RequestSigner;
