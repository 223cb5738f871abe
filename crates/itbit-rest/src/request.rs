//! Request assembly helpers
//!
//! Turns a logical endpoint call into the pieces the client dispatches:
//! version-selected base URL, URL-encoded query string, JSON body.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{RestError, RestResult};

/// Public API version, selecting which base URL a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// `https://api.itbit.com/v1` by default; also hosts all private endpoints
    V1,
    /// `https://www.itbit.com/api/v2` by default
    V2,
}

impl ApiVersion {
    /// The version path segment as the API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            other => Err(RestError::Configuration(format!(
                "API version must be v1 or v2, got {other}"
            ))),
        }
    }
}

/// URL-encode `args` onto `uri` as a query string
///
/// Empty argument lists leave the URI untouched; private GET signatures
/// cover the URI exactly as sent, so no dangling `?` is ever produced.
pub(crate) fn append_query(uri: &mut String, args: &[(&str, &str)]) -> RestResult<()> {
    if args.is_empty() {
        return Ok(());
    }
    let query = serde_urlencoded::to_string(args)
        .map_err(|e| RestError::Configuration(format!("failed to encode query string: {e}")))?;
    uri.push('?');
    uri.push_str(&query);
    Ok(())
}

/// Serialize a request payload to the exact JSON string that is both
/// signed and sent as the body
pub(crate) fn encode_body<B: Serialize>(payload: &B) -> RestResult<String> {
    serde_json::to_string(payload)
        .map_err(|e| RestError::Configuration(format!("failed to encode request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_versions_parse() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_unknown_version_is_configuration_error() {
        let err = "v3".parse::<ApiVersion>().unwrap_err();
        assert!(matches!(err, RestError::Configuration(_)));
        assert!(err.to_string().contains("v3"));
    }

    #[test]
    fn test_append_query_empty_args_leaves_uri_alone() {
        let mut uri = "https://api.itbit.com/v1/wallets/w1".to_string();
        append_query(&mut uri, &[]).unwrap();
        assert_eq!(uri, "https://api.itbit.com/v1/wallets/w1");
    }

    #[test]
    fn test_append_query_encodes_args() {
        let mut uri = "https://api.itbit.com/v1/wallets".to_string();
        append_query(&mut uri, &[("userId", "user 1"), ("status", "open")]).unwrap();
        assert_eq!(
            uri,
            "https://api.itbit.com/v1/wallets?userId=user+1&status=open"
        );
    }
}
