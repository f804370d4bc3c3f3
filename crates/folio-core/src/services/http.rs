//! Shared HTTP plumbing for the remote content sources.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Builds the client shared by every remote loader.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder =
        reqwest::Client::builder().user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}

/// Failure category, used to pick the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Non-success HTTP status other than 403.
    HttpStatus,
    /// 403 reporting an exhausted API quota.
    QuotaExceeded,
    /// 403 for any other reason (bad key, rate limit, private resource).
    Forbidden,
    /// Request or connection timeout.
    Timeout,
    /// Connection or transport failure.
    Network,
    /// Body is not the expected JSON.
    Parse,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::HttpStatus => write!(f, "http_status"),
            FetchErrorKind::QuotaExceeded => write!(f, "quota_exceeded"),
            FetchErrorKind::Forbidden => write!(f, "forbidden"),
            FetchErrorKind::Timeout => write!(f, "timeout"),
            FetchErrorKind::Network => write!(f, "network"),
            FetchErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Error from a remote content source.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    /// Classifies a non-success response.
    pub fn http_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|e| e.get("message").or(Some(e)))
                    .and_then(Value::as_str)
                    .or_else(|| json.get("message").and_then(Value::as_str))
                    .map(str::to_string)
            });
        let kind = match status {
            403 if body.contains("quotaExceeded") => FetchErrorKind::QuotaExceeded,
            403 => FetchErrorKind::Forbidden,
            _ => FetchErrorKind::HttpStatus,
        };
        let message = match detail {
            Some(detail) => format!("HTTP {status}: {detail}"),
            None => format!("HTTP {status}"),
        };
        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Parse, message)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FetchError {}

pub fn classify_reqwest_error(e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::new(FetchErrorKind::Timeout, format!("Request timed out: {e}"))
    } else if e.is_decode() {
        FetchError::parse(format!("Invalid response body: {e}"))
    } else {
        FetchError::new(FetchErrorKind::Network, format!("Network error: {e}"))
    }
}

/// Sends `request` and decodes a JSON body.
pub async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| classify_reqwest_error(&e))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| classify_reqwest_error(&e))?;
    if !status.is_success() {
        return Err(FetchError::http_status(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| FetchError::parse(format!("Invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exceeded_is_distinct_from_forbidden() {
        let body = r#"{"error": {"code": 403, "message": "Quota used up",
                       "errors": [{"reason": "quotaExceeded"}]}}"#;
        let err = FetchError::http_status(403, body);
        assert_eq!(err.kind, FetchErrorKind::QuotaExceeded);
        assert_eq!(err.message, "HTTP 403: Quota used up");

        let err = FetchError::http_status(403, r#"{"message": "API rate limit exceeded"}"#);
        assert_eq!(err.kind, FetchErrorKind::Forbidden);
        assert_eq!(err.message, "HTTP 403: API rate limit exceeded");
    }

    #[test]
    fn test_plain_status_error() {
        let err = FetchError::http_status(500, "oops");
        assert_eq!(err.kind, FetchErrorKind::HttpStatus);
        assert_eq!(err.status, Some(500));
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
