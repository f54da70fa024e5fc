//! HMAC request signing.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use sha2::Sha256;

use super::Credentials;
use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with the `CB-ACCESS-*` header set.
pub(crate) struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub(crate) fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Prehash string: timestamp, upper-case method, request path, body.
    fn build_message(timestamp: i64, method: &str, path: &str, body: &str) -> String {
        format!("{}{}{}{}", timestamp, method.to_uppercase(), path, body)
    }

    fn sign(&self, message: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.secret())
            .map_err(|e| Error::Credential(format!("HMAC init failed: {}", e)))?;
        mac.update(message.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Build authentication headers for a request.
    pub(crate) fn headers(&self, method: &str, path: &str, body: &str) -> Result<HeaderMap> {
        self.headers_at(Utc::now().timestamp(), method, path, body)
    }

    fn headers_at(&self, timestamp: i64, method: &str, path: &str, body: &str) -> Result<HeaderMap> {
        let signature = self.sign(&Self::build_message(timestamp, method, path, body))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("CB-ACCESS-SIGN", header_value(&signature)?);
        headers.insert("CB-ACCESS-TIMESTAMP", header_value(&timestamp.to_string())?);
        headers.insert("CB-ACCESS-KEY", header_value(self.credentials.key())?);
        headers.insert(
            "CB-ACCESS-PASSPHRASE",
            header_value(self.credentials.passphrase())?,
        );
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Credential("Credential contains characters not allowed in a header".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> RequestSigner {
        let creds = Credentials::new("test-key", &BASE64.encode(b"test-secret"), "test-pass")
            .unwrap();
        RequestSigner::new(creds)
    }

    #[test]
    fn test_build_message() {
        let msg = RequestSigner::build_message(
            1704067200,
            "post",
            "/orders",
            r#"{"type":"market"}"#,
        );
        assert_eq!(msg, r#"1704067200POST/orders{"type":"market"}"#);

        let no_body = RequestSigner::build_message(1704067200, "GET", "/payment-methods", "");
        assert_eq!(no_body, "1704067200GET/payment-methods");
    }

    #[test]
    fn test_sign_is_deterministic_base64() {
        let signer = signer();
        let a = signer.sign("1704067200GET/orders/abc").unwrap();
        let b = signer.sign("1704067200GET/orders/abc").unwrap();
        assert_eq!(a, b);
        assert_eq!(BASE64.decode(&a).unwrap().len(), 32);
    }

    #[test]
    fn test_headers() {
        let headers = signer().headers_at(1704067200, "GET", "/orders/abc", "").unwrap();
        assert_eq!(headers["CB-ACCESS-KEY"], "test-key");
        assert_eq!(headers["CB-ACCESS-PASSPHRASE"], "test-pass");
        assert_eq!(headers["CB-ACCESS-TIMESTAMP"], "1704067200");
        assert!(headers.contains_key("CB-ACCESS-SIGN"));
    }
}
