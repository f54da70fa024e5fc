//! API key credentials.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretSlice, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "CBPRO_API_KEY";
/// Environment variable holding the Base64-encoded API secret.
pub const API_SECRET_VAR: &str = "CBPRO_API_SECRET";
/// Environment variable holding the API passphrase.
pub const API_PASSPHRASE_VAR: &str = "CBPRO_API_PASSPHRASE";

/// Coinbase Pro API key, secret and passphrase.
///
/// The secret is Base64-decoded once, at construction, so a malformed
/// secret fails before any request is sent.
///
/// # Example
///
/// ```
/// use cbpro_recurring_buy::Credentials;
///
/// let creds = Credentials::new("key", "c2VjcmV0", "passphrase").unwrap();
/// assert_eq!(creds.key(), "key");
///
/// assert!(Credentials::new("key", "not base64!", "passphrase").is_err());
/// ```
pub struct Credentials {
    key: String,
    secret: SecretSlice<u8>,
    passphrase: SecretString,
}

#[derive(Deserialize)]
struct CredentialsFile {
    api_key: String,
    api_secret: String,
    api_passphrase: String,
}

impl Credentials {
    /// Create credentials from their raw parts.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] if any part is empty
    /// - [`Error::Credential`] if `secret` is not valid Base64
    pub fn new(
        key: impl Into<String>,
        secret: &str,
        passphrase: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let passphrase = passphrase.into();

        if key.trim().is_empty() || secret.trim().is_empty() || passphrase.is_empty() {
            return Err(Error::Configuration(
                "API key, secret and passphrase must all be set".to_string(),
            ));
        }

        let decoded = BASE64.decode(secret.trim()).map_err(|e| {
            Error::Credential(format!("API secret is not in proper Base64 format: {}", e))
        })?;

        Ok(Self {
            key: key.trim().to_string(),
            secret: SecretSlice::from(decoded),
            passphrase: SecretString::from(passphrase),
        })
    }

    /// Read credentials from `CBPRO_API_KEY`, `CBPRO_API_SECRET` and
    /// `CBPRO_API_PASSPHRASE`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| Error::Configuration(format!("{} is not set", name)))
        };
        Self::new(
            var(API_KEY_VAR)?,
            &var(API_SECRET_VAR)?,
            var(API_PASSPHRASE_VAR)?,
        )
    }

    /// Read credentials from a TOML file with `api_key`, `api_secret` and
    /// `api_passphrase` entries.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Cannot read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse credentials from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: CredentialsFile = toml::from_str(contents)?;
        Self::new(file.api_key, &file.api_secret, file.api_passphrase)
    }

    /// Load from `path` if given, otherwise from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading credentials from file");
                Self::from_file(path)
            }
            None => Self::from_env(),
        }
    }

    /// The public API key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.secret.expose_secret()
    }

    pub(crate) fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_decoded() {
        let creds = Credentials::new("key", &BASE64.encode(b"raw-secret"), "pass").unwrap();
        assert_eq!(creds.secret(), b"raw-secret");
        assert_eq!(creds.passphrase(), "pass");
    }

    #[test]
    fn test_malformed_secret_is_credential_error() {
        let err = Credentials::new("key", "%%%not-base64%%%", "pass").unwrap_err();
        assert!(matches!(err, Error::Credential(_)));
    }

    #[test]
    fn test_empty_part_is_configuration_error() {
        let err = Credentials::new("", "c2VjcmV0", "pass").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_from_toml() {
        let creds = Credentials::from_toml(
            r#"
            api_key = "my-key"
            api_secret = "c2VjcmV0"
            api_passphrase = "my-pass"
            "#,
        )
        .unwrap();
        assert_eq!(creds.key(), "my-key");
        assert_eq!(creds.secret(), b"secret");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(
            &path,
            "api_key = \"k\"\napi_secret = \"c2VjcmV0\"\napi_passphrase = \"p\"\n",
        )
        .unwrap();

        let creds = Credentials::load(Some(path.as_path())).unwrap();
        assert_eq!(creds.key(), "k");

        let missing = Credentials::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(missing, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("key", "c3VwZXItc2VjcmV0", "super-pass").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("super-pass"));
        assert!(!debug_str.contains("c3VwZXItc2VjcmV0"));
        assert!(debug_str.contains("REDACTED"));
    }
}
