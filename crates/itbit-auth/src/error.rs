//! Error types for authentication operations

/// Errors that can occur while building authentication material
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// API key is empty or missing
    #[error("Missing API key")]
    MissingApiKey,

    /// API secret is empty or missing
    #[error("Missing API secret")]
    MissingApiSecret,

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// System clock is before the unix epoch
    #[error("System clock error: time went backwards")]
    SystemClock,

    /// Failed to encode the canonical signing message
    #[error("Failed to encode signing message: {0}")]
    Message(#[from] serde_json::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("ITBIT_API_KEY".to_string());
        assert!(err.to_string().contains("ITBIT_API_KEY"));
    }
}
