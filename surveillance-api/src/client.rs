use serde_json::Value;
use tracing::{debug, info, warn};
use webapi_client::{WebApiClient, WebApiError};

use crate::config::ClientConfig;
use crate::endpoint::{EndpointDescriptor, ResolvedEndpoints};
use crate::models::{Camera, HomeModeState, MotionSetting, SnapshotSize};
use crate::operation::{
    operation_params, raw_operation_params, RawOperation, ResponseContext, StreamUrlBuilder,
    SurveillanceOperation, DEFAULT_STREAM_FORMAT, SESSION_PARAM,
};
use crate::operations::camera::{CameraRequest, GetCameraInfoRequest};
use crate::operations::home_mode::SwitchHomeModeRequest;
use crate::operations::snapshot::{LoadSnapshotRequest, TakeSnapshotRequest};
use crate::operations::{
    DisableCameraOperation, EnableCameraOperation, GetCameraInfoOperation,
    GetCameraSnapshotOperation, GetHomeModeInfoOperation, ListCamerasOperation,
    LoadSnapshotOperation, MdParamSaveOperation, MotionEnumOperation, SwitchHomeModeOperation,
    TakeSnapshotOperation,
};
use crate::params::Params;
use crate::service::{names_to_query, Service, INFO_API_NAME, INFO_API_PATH, INFO_API_VERSION};
use crate::{ApiError, Result};

/// Error code the service returns once a session id is no longer valid
pub const ERROR_CODE_SESSION_EXPIRED: i64 = 105;

/// Session label sent with every login
pub const SESSION_NAME: &str = "SurveillanceStation";

/// Outcome of a single JSON request, before the retry decision
#[derive(Debug)]
enum RequestFailure {
    /// The service rejected the session id
    SessionExpired,
    Other(ApiError),
}

impl From<WebApiError> for RequestFailure {
    fn from(error: WebApiError) -> Self {
        match error {
            WebApiError::Failed {
                code: Some(ERROR_CODE_SESSION_EXPIRED),
                ..
            } => RequestFailure::SessionExpired,
            other => RequestFailure::Other(other.into()),
        }
    }
}

impl From<RequestFailure> for ApiError {
    fn from(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::SessionExpired => ApiError::SessionExpired,
            RequestFailure::Other(error) => error,
        }
    }
}

/// A client session against one Surveillance Station
///
/// Connecting resolves every capability endpoint and logs in. Afterwards each
/// operation carries the current session id; if the service reports the
/// session as expired the client logs in again and retries the request once.
///
/// Operations that talk to the service take `&mut self` because a retry may
/// replace the session id. Share one client between threads only behind a
/// lock, or create one client per thread.
///
/// ```rust,no_run
/// use surveillance_api::{ClientConfig, Params, SurveillanceClient};
///
/// let config = ClientConfig::new("https://nas.local:5001", "admin", "secret");
/// let mut client = SurveillanceClient::connect(config)?;
///
/// for camera in client.camera_list(Params::new())? {
///     println!("{} recording={}", camera.name(), camera.is_recording());
/// }
/// # Ok::<(), surveillance_api::ApiError>(())
/// ```
#[derive(Debug)]
pub struct SurveillanceClient {
    webapi: WebApiClient,
    config: ClientConfig,
    endpoints: ResolvedEndpoints,
    session_id: String,
}

impl SurveillanceClient {
    /// Resolve endpoints and log in
    ///
    /// # Errors
    ///
    /// * `ApiError::InvalidParameter` if the configuration is invalid
    /// * `ApiError::InitializationError` if endpoint resolution fails
    /// * `ApiError::AuthenticationError` if login fails
    pub fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let webapi = WebApiClient::new(config.timeout, config.verify_tls)?;
        Self::connect_with(webapi, config)
    }

    /// Connect using a preconfigured Web API client (for advanced use cases)
    ///
    /// The timeout and TLS settings in `config` are ignored; the ones of
    /// `webapi` apply.
    pub fn connect_with(webapi: WebApiClient, config: ClientConfig) -> Result<Self> {
        let endpoints = Self::resolve_endpoints(&webapi, &config.api_base_url())?;

        let mut client = Self {
            webapi,
            config,
            endpoints,
            session_id: String::new(),
        };
        client.authenticate()?;

        Ok(client)
    }

    fn resolve_endpoints(webapi: &WebApiClient, base_url: &str) -> Result<ResolvedEndpoints> {
        let params = Params::new()
            .with("api", INFO_API_NAME)
            .with("method", "query")
            .with("version", INFO_API_VERSION)
            .with("query", names_to_query().join(","));

        let info_url = format!("{}{}", base_url, INFO_API_PATH);
        debug!(url = %info_url, "Querying API info");

        let info = webapi
            .get_json(&info_url, params.as_pairs())
            .map_err(|e| ApiError::InitializationError(format!("API info query failed: {}", e)))?;

        let endpoints = ResolvedEndpoints::resolve(base_url, &info)?;
        for endpoint in endpoints.iter() {
            debug!(service = endpoint.logical_name(), url = endpoint.url(), "Resolved endpoint");
        }

        Ok(endpoints)
    }

    /// Log in and store the new session id
    ///
    /// This is the only place the session id changes.
    fn authenticate(&mut self) -> Result<()> {
        let endpoint = self.endpoints.get(Service::Auth);
        let params = Params::new()
            .with("api", endpoint.api_name())
            .with("method", "login")
            .with("version", endpoint.version())
            .with("account", &self.config.username)
            .with("passwd", &self.config.password)
            .with("session", SESSION_NAME)
            .with("format", "sid");

        let response = self
            .webapi
            .get_json(endpoint.url(), params.as_pairs())
            .map_err(|e| ApiError::AuthenticationError(format!("Login failed: {}", e)))?;

        let sid = response
            .get("data")
            .and_then(|data| data.get("sid"))
            .and_then(Value::as_str)
            .filter(|sid| !sid.is_empty())
            .ok_or_else(|| {
                ApiError::AuthenticationError("Login response contains no session id".to_string())
            })?;

        self.session_id = sid.to_string();
        info!("Authenticated with Surveillance Station");

        Ok(())
    }

    /// Request parameters with the current session id applied last
    fn with_session(&self, params: &Params) -> Params {
        params.clone().with(SESSION_PARAM, &self.session_id)
    }

    fn get_json(&self, service: Service, params: &Params) -> std::result::Result<Value, RequestFailure> {
        let endpoint = self.endpoints.get(service);
        debug!(service = service.name(), method = ?params.get("method"), "Sending request");

        let params = self.with_session(params);
        Ok(self.webapi.get_json(endpoint.url(), params.as_pairs())?)
    }

    /// Send a JSON request, re-authenticating and retrying once on session expiry
    fn get_json_with_retry(&mut self, service: Service, params: &Params) -> Result<Value> {
        match self.get_json(service, params) {
            Err(RequestFailure::SessionExpired) => {
                warn!(service = service.name(), "Session expired, re-authenticating");
                self.authenticate()?;
                Ok(self.get_json(service, params)?)
            }
            result => Ok(result?),
        }
    }

    /// Execute a JSON operation
    ///
    /// `overrides` are merged over the operation's defaults (last write wins).
    /// The session id is always applied after the overrides.
    ///
    /// # Example
    /// ```rust,no_run
    /// use surveillance_api::operations::ListCamerasOperation;
    /// # use surveillance_api::{ClientConfig, Params, SurveillanceClient};
    /// # let mut client = SurveillanceClient::connect(ClientConfig::new("https://nas", "u", "p"))?;
    ///
    /// let cameras = client.execute::<ListCamerasOperation>(&(), Params::from([("limit", 5)]))?;
    /// # Ok::<(), surveillance_api::ApiError>(())
    /// ```
    pub fn execute<Op: SurveillanceOperation>(
        &mut self,
        request: &Op::Request,
        overrides: Params,
    ) -> Result<Op::Response> {
        let params = operation_params::<Op>(request).merged(overrides);
        let body = self.get_json_with_retry(Op::SERVICE, &params)?;

        let context = ResponseContext::new(self.stream_url_builder());
        Op::parse_response(request, &body, &context)
    }

    /// Execute a raw operation and return the response body
    ///
    /// Session expiry is not detected here: the body is returned without
    /// looking at it.
    pub fn fetch<Op: RawOperation>(&self, request: &Op::Request, overrides: Params) -> Result<Vec<u8>> {
        let params = raw_operation_params::<Op>(request).merged(overrides);
        let endpoint = self.endpoints.get(Op::SERVICE);
        debug!(service = Op::SERVICE.name(), method = Op::METHOD, "Fetching raw response");

        let params = self.with_session(&params);
        Ok(self.webapi.get_raw(endpoint.url(), params.as_pairs())?)
    }

    fn stream_url_builder(&self) -> StreamUrlBuilder<'_> {
        StreamUrlBuilder::new(self.endpoints.get(Service::VideoStream), &self.session_id)
    }

    /// Set home mode
    ///
    /// # Arguments
    /// * `state` - Exactly `"true"` or `"false"`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidParameter` for any other `state`, without
    /// contacting the service.
    pub fn home_mode_set_state(&mut self, state: &str, overrides: Params) -> Result<bool> {
        let state: HomeModeState = state.parse()?;
        self.execute::<SwitchHomeModeOperation>(&SwitchHomeModeRequest { state }, overrides)
    }

    /// Typed variant of [`home_mode_set_state`](Self::home_mode_set_state)
    pub fn home_mode_switch(&mut self, state: HomeModeState, overrides: Params) -> Result<bool> {
        self.execute::<SwitchHomeModeOperation>(&SwitchHomeModeRequest { state }, overrides)
    }

    /// Whether home mode is currently on
    pub fn home_mode_status(&mut self, overrides: Params) -> Result<bool> {
        self.execute::<GetHomeModeInfoOperation>(&(), overrides)
    }

    /// Every camera known to the station
    pub fn camera_list(&mut self, overrides: Params) -> Result<Vec<Camera>> {
        self.execute::<ListCamerasOperation>(&(), overrides)
    }

    /// Cameras matching `camera_ids`
    pub fn camera_info(&mut self, camera_ids: &[i64], overrides: Params) -> Result<Vec<Camera>> {
        let request = GetCameraInfoRequest {
            camera_ids: camera_ids.to_vec(),
        };
        self.execute::<GetCameraInfoOperation>(&request, overrides)
    }

    /// Live JPEG image from a camera
    pub fn camera_snapshot(&self, camera_id: i64, overrides: Params) -> Result<Vec<u8>> {
        self.fetch::<GetCameraSnapshotOperation>(&CameraRequest { camera_id }, overrides)
    }

    /// Trigger a snapshot capture; returns the full response body
    pub fn take_camera_snapshot(&mut self, camera_id: i64, save: bool, overrides: Params) -> Result<Value> {
        self.execute::<TakeSnapshotOperation>(&TakeSnapshotRequest { camera_id, save }, overrides)
    }

    /// Image of a stored snapshot
    pub fn get_camera_snapshot(
        &self,
        snapshot_id: i64,
        size: SnapshotSize,
        overrides: Params,
    ) -> Result<Vec<u8>> {
        self.fetch::<LoadSnapshotOperation>(&LoadSnapshotRequest { snapshot_id, size }, overrides)
    }

    /// Enable a camera; returns the envelope success flag
    pub fn camera_enable(&mut self, camera_id: i64, overrides: Params) -> Result<bool> {
        self.execute::<EnableCameraOperation>(&CameraRequest { camera_id }, overrides)
    }

    /// Disable a camera; returns the envelope success flag
    pub fn camera_disable(&mut self, camera_id: i64, overrides: Params) -> Result<bool> {
        self.execute::<DisableCameraOperation>(&CameraRequest { camera_id }, overrides)
    }

    /// Motion detection settings of a camera
    pub fn camera_event_motion_enum(&mut self, camera_id: i64, overrides: Params) -> Result<MotionSetting> {
        self.execute::<MotionEnumOperation>(&CameraRequest { camera_id }, overrides)
    }

    /// Save motion detection settings given as `overrides`; returns the camera id
    pub fn camera_event_md_param_save(&mut self, camera_id: i64, overrides: Params) -> Result<i64> {
        self.execute::<MdParamSaveOperation>(&CameraRequest { camera_id }, overrides)
    }

    /// Start a manual recording
    ///
    /// Not implemented: this does nothing and sends no request.
    pub fn camera_start_recording(&self, _camera_id: i64, _overrides: Params) {}

    /// Stop a manual recording
    ///
    /// Not implemented: this does nothing and sends no request.
    pub fn camera_stop_recording(&self, _camera_id: i64, _overrides: Params) {}

    /// Video stream URL for a camera using the current session id
    ///
    /// `format` defaults to `mjpeg`. No request is made.
    pub fn video_stream_url(&self, camera_id: i64, format: Option<&str>) -> Result<String> {
        self.stream_url_builder()
            .url(camera_id, format.unwrap_or(DEFAULT_STREAM_FORMAT))
    }

    /// Current session id
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Resolved endpoint for a capability
    pub fn endpoint(&self, service: Service) -> &EndpointDescriptor {
        self.endpoints.get(service)
    }

    /// Configuration this client was connected with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_expired_classification() {
        let failure: RequestFailure = WebApiError::Failed {
            code: Some(ERROR_CODE_SESSION_EXPIRED),
            body: json!({"success": false, "error": {"code": 105}}),
        }
        .into();
        assert!(matches!(failure, RequestFailure::SessionExpired));
        assert!(matches!(ApiError::from(failure), ApiError::SessionExpired));
    }

    #[test]
    fn test_other_failures_are_not_session_expiry() {
        let failure: RequestFailure = WebApiError::Failed {
            code: Some(99),
            body: json!({"success": false, "error": {"code": 99}}),
        }
        .into();
        assert!(matches!(
            ApiError::from(failure),
            ApiError::RemoteOperationError { code: Some(99), .. }
        ));

        let failure: RequestFailure = WebApiError::Timeout.into();
        assert!(matches!(ApiError::from(failure), ApiError::Timeout));
    }

    #[test]
    fn test_connect_rejects_invalid_config() {
        let result = SurveillanceClient::connect(ClientConfig::new("not a url", "admin", "pw"));
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }
}
