//! Error types for the Web API client

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during Web API communication
#[derive(Debug, Error)]
pub enum WebApiError {
    /// Network or connection level failure
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Response body is not valid JSON
    #[error("JSON parsing error: {0}")]
    Parse(String),

    /// Envelope reported `success: false` (or omitted `success`)
    ///
    /// `code` is taken from `error.code` when present; `body` is the complete
    /// response for diagnostics.
    #[error("Web API request failed: error code {code:?}")]
    Failed { code: Option<i64>, body: Value },
}

impl WebApiError {
    /// Error code reported by the remote service, if any
    pub fn code(&self) -> Option<i64> {
        match self {
            WebApiError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WebApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            WebApiError::Timeout
        } else if let Some(status) = error.status() {
            WebApiError::HttpStatus(status.as_u16())
        } else {
            WebApiError::Network(error.to_string())
        }
    }
}
