//! API credentials for authenticated requests
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};

/// API credentials for itBit private endpoints
///
/// The secret is automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Errors
    /// Returns [`AuthError::MissingApiKey`] or [`AuthError::MissingApiSecret`]
    /// if either value is empty.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.into();

        if api_key.is_empty() {
            return Err(AuthError::MissingApiKey);
        }
        if secret.is_empty() {
            return Err(AuthError::MissingApiSecret);
        }

        Ok(Self {
            api_key,
            secret: SecretString::from(secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `ITBIT_API_KEY` and `ITBIT_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("ITBIT_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("ITBIT_API_KEY".to_string()))?;
        let secret = std::env::var("ITBIT_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("ITBIT_API_SECRET".to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret for signing
    ///
    /// Only use this as HMAC key material. Never log the return value.
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretString::from(self.secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::MissingApiKey)
        ));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            Credentials::new("key", ""),
            Err(AuthError::MissingApiSecret)
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "super_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_clone_preserves_values() {
        let creds = Credentials::new("key", "secret").unwrap();
        let cloned = creds.clone();
        assert_eq!(cloned.api_key(), "key");
        assert_eq!(cloned.expose_secret(), "secret");
    }
}
