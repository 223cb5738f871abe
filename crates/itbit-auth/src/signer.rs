//! Request signing for itBit private endpoints
//!
//! Implements the two-stage SHA-256 / HMAC-SHA512 construction itBit
//! verifies server-side. The canonical message and the byte-level handling
//! of the intermediate digest are load-bearing: any deviation (whitespace,
//! field order, re-encoding the digest as hex or base64) produces a
//! signature the server rejects.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::AuthResult;
use crate::nonce::{unix_millis, NonceCounter};

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the request timestamp in epoch milliseconds
pub const HEADER_TIMESTAMP: &str = "X-Auth-Timestamp";

/// Header carrying the request nonce as a decimal string
pub const HEADER_NONCE: &str = "X-Auth-Nonce";

/// Signed headers for one private request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// `Authorization` value: `{api_key}:{base64 signature}`
    pub authorization: String,
    /// `X-Auth-Timestamp` value: epoch milliseconds
    pub timestamp: String,
    /// `X-Auth-Nonce` value: decimal nonce
    pub nonce: String,
}

/// Produces authentication headers for private requests
///
/// Owns the client's nonce counter; every signed request consumes exactly
/// one nonce. A signer is constructed once per client so nonces stay
/// strictly increasing for the client's lifetime.
#[derive(Debug)]
pub struct RequestSigner {
    credentials: Credentials,
    nonce: NonceCounter,
}

impl RequestSigner {
    /// Create a signer with the nonce counter seeded from the system clock
    pub fn new(credentials: Credentials) -> AuthResult<Self> {
        Ok(Self {
            credentials,
            nonce: NonceCounter::from_clock()?,
        })
    }

    /// Create a signer with an explicit initial nonce
    pub fn starting_at(credentials: Credentials, initial_nonce: u64) -> Self {
        Self {
            credentials,
            nonce: NonceCounter::starting_at(initial_nonce),
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign a request, consuming one nonce and stamping the current time
    ///
    /// `post_data` is the exact body string the request will carry, or `""`
    /// for bodiless methods. `uri` must be the full URI including any query
    /// string — the server recomputes the signature from the URI it receives.
    pub fn sign_request(&self, method: &str, uri: &str, post_data: &str) -> AuthResult<AuthHeaders> {
        let timestamp_ms = unix_millis()?;
        let nonce = self.nonce.next();
        self.sign_at(method, uri, post_data, nonce, timestamp_ms)
    }

    /// Deterministic signing core with caller-supplied nonce and timestamp
    ///
    /// Split out from [`sign_request`](Self::sign_request) so fixed inputs
    /// produce byte-for-byte reproducible signatures.
    pub fn sign_at(
        &self,
        method: &str,
        uri: &str,
        post_data: &str,
        nonce: u64,
        timestamp_ms: u64,
    ) -> AuthResult<AuthHeaders> {
        let timestamp = timestamp_ms.to_string();
        let message = canonical_message(method, uri, post_data, nonce, &timestamp)?;

        let mut sha256 = Sha256::new();
        sha256.update(message.as_bytes());
        let digest = sha256.finalize();

        // The MAC input is uri bytes followed by the raw 32-byte digest,
        // not a hex or base64 rendering of it.
        let mut mac = HmacSha512::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(uri.as_bytes());
        mac.update(&digest);
        let signature = BASE64.encode(mac.finalize().into_bytes());

        debug!(nonce, %method, "signed private request");

        Ok(AuthHeaders {
            authorization: format!("{}:{}", self.credentials.api_key(), signature),
            timestamp,
            nonce: nonce.to_string(),
        })
    }
}

/// Build the canonical message the signature commits to
///
/// The nonce's decimal text is concatenated, with no separator, onto the
/// compact JSON array `[method, uri, post_data, nonce, timestamp]` in which
/// nonce and timestamp appear as strings.
fn canonical_message(
    method: &str,
    uri: &str,
    post_data: &str,
    nonce: u64,
    timestamp: &str,
) -> Result<String, serde_json::Error> {
    let nonce_str = nonce.to_string();
    let envelope =
        serde_json::to_string(&[method, uri, post_data, nonce_str.as_str(), timestamp])?;
    Ok(format!("{nonce_str}{envelope}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> RequestSigner {
        let creds = Credentials::new("test-key", "test-secret").unwrap();
        RequestSigner::starting_at(creds, 5000)
    }

    #[test]
    fn test_canonical_message_exact_bytes() {
        let message = canonical_message(
            "GET",
            "https://api.itbit.com/v1/wallets?userId=123",
            "",
            5000,
            "1405385860202",
        )
        .unwrap();

        assert_eq!(
            message,
            "5000[\"GET\",\"https://api.itbit.com/v1/wallets?userId=123\",\"\",\"5000\",\"1405385860202\"]"
        );
    }

    #[test]
    fn test_canonical_message_escapes_body_quotes() {
        let message = canonical_message(
            "POST",
            "https://api.itbit.com/v1/wallets/w1/orders",
            "{\"side\":\"buy\"}",
            42,
            "1405385860202",
        )
        .unwrap();

        assert_eq!(
            message,
            "42[\"POST\",\"https://api.itbit.com/v1/wallets/w1/orders\",\"{\\\"side\\\":\\\"buy\\\"}\",\"42\",\"1405385860202\"]"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let s = signer();
        let a = s
            .sign_at("GET", "https://api.itbit.com/v1/wallets", "", 5000, 1_405_385_860_202)
            .unwrap();
        let b = s
            .sign_at("GET", "https://api.itbit.com/v1/wallets", "", 5000, 1_405_385_860_202)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_is_base64_of_sha512_mac() {
        let headers = signer()
            .sign_at("GET", "https://api.itbit.com/v1/wallets", "", 5000, 1_405_385_860_202)
            .unwrap();

        let signature = headers.authorization.strip_prefix("test-key:").unwrap();
        let raw = BASE64.decode(signature).unwrap();
        assert_eq!(raw.len(), 64);
    }

    #[test]
    fn test_signature_varies_with_inputs() {
        let s = signer();
        let base = s
            .sign_at("GET", "https://api.itbit.com/v1/wallets", "", 5000, 1_405_385_860_202)
            .unwrap();

        let other_nonce = s
            .sign_at("GET", "https://api.itbit.com/v1/wallets", "", 5001, 1_405_385_860_202)
            .unwrap();
        let other_uri = s
            .sign_at("GET", "https://api.itbit.com/v1/wallets/w1", "", 5000, 1_405_385_860_202)
            .unwrap();
        let other_body = s
            .sign_at("GET", "https://api.itbit.com/v1/wallets", "{}", 5000, 1_405_385_860_202)
            .unwrap();

        assert_ne!(base.authorization, other_nonce.authorization);
        assert_ne!(base.authorization, other_uri.authorization);
        assert_ne!(base.authorization, other_body.authorization);
    }

    #[test]
    fn test_sign_request_consumes_sequential_nonces() {
        let s = signer();
        let first = s.sign_request("GET", "https://api.itbit.com/v1/wallets", "").unwrap();
        let second = s.sign_request("GET", "https://api.itbit.com/v1/wallets", "").unwrap();
        let third = s.sign_request("GET", "https://api.itbit.com/v1/wallets", "").unwrap();

        assert_eq!(first.nonce, "5000");
        assert_eq!(second.nonce, "5001");
        assert_eq!(third.nonce, "5002");
    }

    #[test]
    fn test_headers_carry_nonce_and_timestamp_strings() {
        let headers = signer()
            .sign_at("PUT", "https://api.itbit.com/v1/wallets/w1", "{}", 7, 99)
            .unwrap();
        assert_eq!(headers.nonce, "7");
        assert_eq!(headers.timestamp, "99");
        assert!(headers.authorization.starts_with("test-key:"));
    }
}
