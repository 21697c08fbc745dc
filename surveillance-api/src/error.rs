use serde_json::Value;
use thiserror::Error;
use webapi_client::WebApiError;

/// High-level API errors for Surveillance Station operations
///
/// This enum abstracts the underlying HTTP and envelope handling and maps
/// every failure into a category the caller can act on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Endpoint resolution against the API info service failed
    ///
    /// Raised while connecting when the info query itself fails or the
    /// response lacks a path for one of the registered capabilities.
    #[error("Initialization error: {0}")]
    InitializationError(String),

    /// Login was rejected or its response carried no session id
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Network communication error
    ///
    /// Connection refused, DNS resolution failures, TLS handshake errors and
    /// similar transport-level issues.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-2xx HTTP status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Response body could not be parsed as JSON
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// The session was still rejected after re-authenticating once
    #[error("Session expired")]
    SessionExpired,

    /// The service reported a failure for a reason other than session expiry
    ///
    /// `body` holds the complete response for diagnostics.
    #[error("Remote operation failed: error code {code:?}")]
    RemoteOperationError { code: Option<i64>, body: Value },

    /// Response is valid JSON but lacks a field the operation requires
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Invalid input supplied by the caller
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Whether this error originates in the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::NetworkError(_) | ApiError::Timeout | ApiError::HttpStatus(_)
        )
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        ApiError::MalformedData(format!("Missing field '{}'", field))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from WebApiError to ApiError
impl From<WebApiError> for ApiError {
    fn from(error: WebApiError) -> Self {
        match error {
            WebApiError::Network(msg) => ApiError::NetworkError(msg),
            WebApiError::Timeout => ApiError::Timeout,
            WebApiError::HttpStatus(status) => ApiError::HttpStatus(status),
            WebApiError::Parse(msg) => ApiError::ProtocolError(msg),
            WebApiError::Failed { code, body } => ApiError::RemoteOperationError { code, body },
        }
    }
}
