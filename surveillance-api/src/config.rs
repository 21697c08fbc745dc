//! Connection configuration for the Surveillance Station client

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{ApiError, Result};

/// Path appended to the station URL to reach the Web API
pub const WEBAPI_PATH: &str = "/webapi/";

/// Connection settings for [`SurveillanceClient`](crate::SurveillanceClient)
#[derive(Clone)]
pub struct ClientConfig {
    /// Station URL, e.g. `https://nas.local:5001`
    pub url: String,

    pub username: String,

    pub password: String,

    /// Per-request timeout
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Verify TLS certificates
    /// Default: true
    pub verify_tls: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            timeout: Duration::from_secs(10),
            verify_tls: true,
        }
    }
}

// Manual impl keeps the password out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config with default timeout and TLS verification
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL every capability path is appended to
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), WEBAPI_PATH)
    }

    /// Check that the configuration can be used to connect
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.url)
            .map_err(|e| ApiError::InvalidParameter(format!("Invalid url '{}': {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidParameter(format!(
                "Unsupported url scheme '{}'",
                url.scheme()
            )));
        }

        if self.username.is_empty() {
            return Err(ApiError::InvalidParameter("username must not be empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::InvalidParameter("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

/// Fluent builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Disable only for stations using self-signed certificates
    pub fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.config.verify_tls = verify_tls;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
