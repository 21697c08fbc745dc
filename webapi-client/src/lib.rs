//! Private Web API client for Surveillance Station communication
//!
//! This crate provides a minimal blocking client for JSON-over-HTTP APIs that
//! wrap every response in a `{success, data, error}` envelope. All requests
//! are `GET` with query-string parameters. Raw (non-JSON) bodies such as
//! snapshot images can be fetched with [`WebApiClient::get_raw`].

mod error;

pub use error::WebApiError;

use std::time::Duration;

use serde_json::Value;
use tracing::trace;

/// A minimal Web API client over a blocking HTTP agent
#[derive(Debug, Clone)]
pub struct WebApiClient {
    http: reqwest::blocking::Client,
}

impl WebApiClient {
    /// Create a client with the given per-request timeout
    ///
    /// # Arguments
    /// * `timeout` - Upper bound for a complete request/response round trip
    /// * `verify_tls` - When `false`, invalid or self-signed certificates are accepted
    pub fn new(timeout: Duration, verify_tls: bool) -> Result<Self, WebApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(|e| WebApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http })
    }

    /// Create a client around an already configured HTTP client
    pub fn with_http_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }

    /// Send a GET request and return the response body untouched
    ///
    /// Non-2xx statuses are reported as [`WebApiError::HttpStatus`].
    pub fn get_raw(&self, url: &str, params: &[(String, String)]) -> Result<Vec<u8>, WebApiError> {
        trace!(url = %url, "GET");

        let response = self.http.get(url).query(params).send()?.error_for_status()?;
        let body = response.bytes()?;

        Ok(body.to_vec())
    }

    /// Send a GET request, parse the body as JSON and validate the envelope
    ///
    /// # Returns
    /// The complete response object when `success` is `true`
    pub fn get_json(&self, url: &str, params: &[(String, String)]) -> Result<Value, WebApiError> {
        let body = self.get_raw(url, params)?;

        let content: Value = serde_json::from_slice(&body)
            .map_err(|e| WebApiError::Parse(e.to_string()))?;

        validate_envelope(content)
    }
}

/// Check the `success` flag of a response envelope
///
/// A missing or non-`true` flag is a failure; the code is read from
/// `error.code` when the service provides one.
pub fn validate_envelope(content: Value) -> Result<Value, WebApiError> {
    let success = content
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if success {
        return Ok(content);
    }

    let code = content
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(Value::as_i64);

    Err(WebApiError::Failed { code, body: content })
}
