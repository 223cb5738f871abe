//! Error types for REST API operations

use itbit_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Every variant produced while executing a request carries the attempted
/// method and URI so failures can be diagnosed without re-issuing the call.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Invalid client or request configuration (e.g. bad API version)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing API credentials for a private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Failed to produce authentication material
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The request never completed (connection, DNS, timeout)
    #[error("{method} request to {uri} failed: {source}")]
    Transport {
        /// HTTP method of the attempted request
        method: String,
        /// Full URI of the attempted request
        uri: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The API rejected the request with an application error code
    #[error("{method} request to {uri} failed with code {code}: {description}")]
    Api {
        /// HTTP method of the attempted request
        method: String,
        /// Full URI of the attempted request
        uri: String,
        /// itBit error code
        code: i64,
        /// Error description from the response body
        description: String,
    },

    /// Unexpected HTTP status with no structured error body
    #[error("{method} request to {uri} returned status {status}")]
    HttpStatus {
        /// HTTP method of the attempted request
        method: String,
        /// Full URI of the attempted request
        uri: String,
        /// Response status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Success status but the body could not be decoded
    #[error("Failed to decode response from {method} {uri}: {message}")]
    Parse {
        /// HTTP method of the attempted request
        method: String,
        /// Full URI of the attempted request
        uri: String,
        /// Decode failure detail
        message: String,
    },
}

impl RestError {
    /// Check if this error is worth retrying
    ///
    /// Only transport failures qualify; an application rejection will not
    /// change without changing the request, and a blind retry needs a fresh
    /// nonce and signature anyway.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this error is a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
