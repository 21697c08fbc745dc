//! Operation framework for Surveillance Station requests
//!
//! Every remote call is described by a type implementing either
//! [`SurveillanceOperation`] (JSON envelope responses) or [`RawOperation`]
//! (binary responses such as snapshot images). The client supplies the
//! session id and resolved endpoint; operations only describe their own
//! parameters and how to read the response.

use serde_json::Value;
use url::Url;

use crate::endpoint::EndpointDescriptor;
use crate::error::{ApiError, Result};
use crate::params::Params;
use crate::service::Service;

/// Format requested for video streams unless the caller asks otherwise
pub const DEFAULT_STREAM_FORMAT: &str = "mjpeg";

/// Query parameter carrying the session id
pub const SESSION_PARAM: &str = "_sid";

/// A request answered with a `{success, data}` JSON envelope
pub trait SurveillanceOperation {
    /// The typed request data
    type Request;

    /// The value produced from a successful response
    type Response;

    /// The capability this operation is sent to
    const SERVICE: Service;

    /// The `method` parameter
    const METHOD: &'static str;

    /// Protocol version override; `None` uses the capability's registered version
    const VERSION: Option<u32> = None;

    /// Operation-specific parameters, without `api`, `method`, `version` or session id
    fn build_params(request: &Self::Request) -> Params;

    /// Convert the validated response body into the typed response
    fn parse_response(
        request: &Self::Request,
        body: &Value,
        context: &ResponseContext<'_>,
    ) -> Result<Self::Response>;
}

/// A request whose response body is returned as raw bytes
pub trait RawOperation {
    type Request;

    const SERVICE: Service;
    const METHOD: &'static str;
    const VERSION: Option<u32> = None;

    fn build_params(request: &Self::Request) -> Params;
}

/// Defaults shared by all operations: `api`, `method` and `version`
pub fn default_params(service: Service, method: &str, version: Option<u32>) -> Params {
    let info = service.info();
    Params::new()
        .with("api", info.api_name)
        .with("method", method)
        .with("version", version.unwrap_or(info.version))
}

/// Full default parameter set for a JSON operation
pub fn operation_params<Op: SurveillanceOperation>(request: &Op::Request) -> Params {
    default_params(Op::SERVICE, Op::METHOD, Op::VERSION).merged(Op::build_params(request))
}

/// Full default parameter set for a raw operation
pub fn raw_operation_params<Op: RawOperation>(request: &Op::Request) -> Params {
    default_params(Op::SERVICE, Op::METHOD, Op::VERSION).merged(Op::build_params(request))
}

/// Builds video stream URLs for a fixed session
///
/// Pure string construction; nothing is fetched.
#[derive(Debug, Clone, Copy)]
pub struct StreamUrlBuilder<'a> {
    endpoint: &'a EndpointDescriptor,
    session_id: &'a str,
}

impl<'a> StreamUrlBuilder<'a> {
    pub fn new(endpoint: &'a EndpointDescriptor, session_id: &'a str) -> Self {
        Self {
            endpoint,
            session_id,
        }
    }

    /// Stream URL for `camera_id` in the given format
    pub fn url(&self, camera_id: i64, format: &str) -> Result<String> {
        let params = Params::new()
            .with(SESSION_PARAM, self.session_id)
            .with("api", self.endpoint.api_name())
            .with("method", "Stream")
            .with("version", self.endpoint.version())
            .with("cameraId", camera_id)
            .with("format", format);

        let url = Url::parse_with_params(self.endpoint.url(), params.iter())
            .map_err(|e| ApiError::InvalidParameter(format!("Invalid stream URL: {}", e)))?;

        Ok(url.into())
    }
}

/// Data available to operations while parsing a response
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    stream: StreamUrlBuilder<'a>,
}

impl<'a> ResponseContext<'a> {
    pub fn new(stream: StreamUrlBuilder<'a>) -> Self {
        Self { stream }
    }

    /// Stream URL for `camera_id` in [`DEFAULT_STREAM_FORMAT`]
    pub fn stream_url(&self, camera_id: i64) -> Result<String> {
        self.stream.url(camera_id, DEFAULT_STREAM_FORMAT)
    }
}

/// Look up `data.<field>` in a response body
pub(crate) fn data_field<'v>(body: &'v Value, field: &str) -> Result<&'v Value> {
    body.get("data")
        .and_then(|data| data.get(field))
        .ok_or_else(|| ApiError::missing_field(&format!("data.{}", field)))
}
