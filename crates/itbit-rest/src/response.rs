//! Response normalization
//!
//! Classifies the outcome of an HTTP exchange into a decoded value or a
//! [`RestError`]. Precedence is fixed: transport failure, then an
//! application error envelope in the body, then the HTTP status, then body
//! decoding — a 500 carrying an error code reports as [`RestError::Api`],
//! not [`RestError::HttpStatus`].

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{RestError, RestResult};

/// Statuses the API uses for successful responses
const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// Application error envelope returned by the API on rejected requests
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: i64,
    #[serde(default)]
    description: String,
}

/// Interpret a transport outcome as a decoded `T` or a classified error
pub(crate) async fn interpret<T: DeserializeOwned>(
    method: Method,
    uri: String,
    outcome: Result<Response, reqwest::Error>,
) -> RestResult<T> {
    let response = match outcome {
        Ok(response) => response,
        Err(source) => {
            return Err(RestError::Transport {
                method: method.to_string(),
                uri,
                source,
            })
        }
    };

    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(source) => {
            return Err(RestError::Transport {
                method: method.to_string(),
                uri,
                source,
            })
        }
    };

    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
        return Err(RestError::Api {
            method: method.to_string(),
            uri,
            code: envelope.code,
            description: envelope.description,
        });
    }

    if !SUCCESS_STATUSES.contains(&status) {
        return Err(RestError::HttpStatus {
            method: method.to_string(),
            uri,
            status,
            body,
        });
    }

    // Cancellations answer 202 with an empty body; decode it as JSON null
    // so unit-result endpoints work without a special case.
    let payload = if body.trim().is_empty() { "null" } else { body.as_str() };
    serde_json::from_str(payload).map_err(|e| RestError::Parse {
        method: method.to_string(),
        uri,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: String,
    }

    fn response(status: u16, body: &str) -> Response {
        http::Response::builder()
            .status(status)
            .body(body.to_string())
            .unwrap()
            .into()
    }

    fn uri() -> String {
        "https://api.itbit.com/v1/wallets/w1".to_string()
    }

    #[tokio::test]
    async fn test_success_decodes_body() {
        let result: Payload = interpret(Method::GET, uri(), Ok(response(200, r#"{"value":"ok"}"#)))
            .await
            .unwrap();
        assert_eq!(result.value, "ok");
    }

    #[tokio::test]
    async fn test_error_code_body_wins_over_status() {
        let err = interpret::<Payload>(
            Method::GET,
            uri(),
            Ok(response(
                500,
                r#"{"code":81001,"description":"The wallet could not be located"}"#,
            )),
        )
        .await
        .unwrap_err();

        match err {
            RestError::Api { code, description, .. } => {
                assert_eq!(code, 81001);
                assert!(description.contains("wallet"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_code_detected_on_success_status() {
        let err = interpret::<Payload>(
            Method::POST,
            uri(),
            Ok(response(200, r#"{"code":10002,"description":"Invalid amount"}"#)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RestError::Api { code: 10002, .. }));
    }

    #[tokio::test]
    async fn test_unexpected_status_without_envelope() {
        let err = interpret::<Payload>(Method::GET, uri(), Ok(response(404, "not found")))
            .await
            .unwrap_err();

        match err {
            RestError::HttpStatus { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accepted_statuses() {
        for status in [200, 201, 202] {
            let result: Payload =
                interpret(Method::POST, uri(), Ok(response(status, r#"{"value":"ok"}"#)))
                    .await
                    .unwrap();
            assert_eq!(result.value, "ok");
        }
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_unit() {
        interpret::<()>(Method::DELETE, uri(), Ok(response(202, "")))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_parse_error() {
        let err = interpret::<Payload>(Method::GET, uri(), Ok(response(200, "<html>")))
            .await
            .unwrap_err();
        assert!(matches!(err, RestError::Parse { .. }));
    }
}
