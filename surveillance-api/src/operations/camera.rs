//! Camera operations: listing, info, enable/disable and live snapshots

use serde_json::Value;

use super::success_flag;
use crate::models::Camera;
use crate::operation::{data_field, RawOperation, ResponseContext, SurveillanceOperation};
use crate::{ApiError, Params, Result, Service};

/// Version the camera API requires for `Enable`/`Disable`
pub const CAMERA_TOGGLE_VERSION: u32 = 9;

/// List every camera
pub struct ListCamerasOperation;

/// Request for a subset of cameras by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCameraInfoRequest {
    pub camera_ids: Vec<i64>,
}

/// Get details for specific cameras
pub struct GetCameraInfoOperation;

/// Request targeting a single camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraRequest {
    pub camera_id: i64,
}

/// Enable a camera
pub struct EnableCameraOperation;

/// Disable a camera
pub struct DisableCameraOperation;

/// Fetch a live JPEG snapshot from a camera
pub struct GetCameraSnapshotOperation;

fn parse_cameras(body: &Value, context: &ResponseContext<'_>) -> Result<Vec<Camera>> {
    let cameras = data_field(body, "cameras")?
        .as_array()
        .ok_or_else(|| ApiError::MalformedData("data.cameras is not an array".to_string()))?;

    cameras
        .iter()
        .map(|data| Camera::from_json(data, |id| context.stream_url(id)))
        .collect()
}

impl SurveillanceOperation for ListCamerasOperation {
    type Request = ();
    type Response = Vec<Camera>;

    const SERVICE: Service = Service::Camera;
    const METHOD: &'static str = "List";

    fn build_params(_request: &Self::Request) -> Params {
        Params::new()
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        parse_cameras(body, context)
    }
}

impl SurveillanceOperation for GetCameraInfoOperation {
    type Request = GetCameraInfoRequest;
    type Response = Vec<Camera>;

    const SERVICE: Service = Service::Camera;
    const METHOD: &'static str = "GetInfo";

    fn build_params(request: &Self::Request) -> Params {
        let ids: Vec<String> = request.camera_ids.iter().map(i64::to_string).collect();
        Params::new().with("cameraIds", ids.join(", "))
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        parse_cameras(body, context)
    }
}

impl SurveillanceOperation for EnableCameraOperation {
    type Request = CameraRequest;
    type Response = bool;

    const SERVICE: Service = Service::Camera;
    const METHOD: &'static str = "Enable";
    const VERSION: Option<u32> = Some(CAMERA_TOGGLE_VERSION);

    fn build_params(request: &Self::Request) -> Params {
        Params::new().with("idList", request.camera_id)
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        _context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        Ok(success_flag(body))
    }
}

impl SurveillanceOperation for DisableCameraOperation {
    type Request = CameraRequest;
    type Response = bool;

    const SERVICE: Service = Service::Camera;
    const METHOD: &'static str = "Disable";
    const VERSION: Option<u32> = Some(CAMERA_TOGGLE_VERSION);

    fn build_params(request: &Self::Request) -> Params {
        Params::new().with("idList", request.camera_id)
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        _context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        Ok(success_flag(body))
    }
}

impl RawOperation for GetCameraSnapshotOperation {
    type Request = CameraRequest;

    const SERVICE: Service = Service::Camera;
    const METHOD: &'static str = "GetSnapshot";

    fn build_params(request: &Self::Request) -> Params {
        Params::new().with("cameraId", request.camera_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointDescriptor;
    use crate::operation::{operation_params, raw_operation_params, StreamUrlBuilder};
    use serde_json::json;

    fn with_context<T>(f: impl FnOnce(&ResponseContext<'_>) -> T) -> T {
        let endpoint = EndpointDescriptor::new(Service::VideoStream, "http://nas/webapi/entry.cgi");
        let context = ResponseContext::new(StreamUrlBuilder::new(&endpoint, "sid-1"));
        f(&context)
    }

    #[test]
    fn test_camera_info_params() {
        let request = GetCameraInfoRequest { camera_ids: vec![1, 4, 9] };
        let params = operation_params::<GetCameraInfoOperation>(&request);

        assert_eq!(params.get("api"), Some("SYNO.SurveillanceStation.Camera"));
        assert_eq!(params.get("method"), Some("GetInfo"));
        assert_eq!(params.get("cameraIds"), Some("1, 4, 9"));
    }

    #[test]
    fn test_toggle_params_use_version_nine() {
        let request = CameraRequest { camera_id: 3 };

        let enable = operation_params::<EnableCameraOperation>(&request);
        assert_eq!(enable.get("method"), Some("Enable"));
        assert_eq!(enable.get("version"), Some("9"));
        assert_eq!(enable.get("idList"), Some("3"));

        let disable = operation_params::<DisableCameraOperation>(&request);
        assert_eq!(disable.get("method"), Some("Disable"));
        assert_eq!(disable.get("version"), Some("9"));
    }

    #[test]
    fn test_snapshot_params() {
        let params = raw_operation_params::<GetCameraSnapshotOperation>(&CameraRequest { camera_id: 2 });
        assert_eq!(params.get("method"), Some("GetSnapshot"));
        assert_eq!(params.get("cameraId"), Some("2"));
    }

    #[test]
    fn test_parse_camera_list() {
        let body = json!({
            "success": true,
            "data": {
                "cameras": [
                    {"id": 1, "name": "Front", "enabled": true, "recStatus": 5},
                    {"id": 2, "name": "Back", "enabled": false, "recStatus": 0}
                ]
            }
        });

        let cameras = with_context(|ctx| ListCamerasOperation::parse_response(&(), &body, ctx)).unwrap();

        assert_eq!(cameras.len(), 2);
        assert!(cameras[0].is_recording());
        assert!(!cameras[1].is_recording());
        assert!(!cameras[1].is_enabled());
        assert!(cameras[0].video_stream_url().contains("cameraId=1"));
        assert!(cameras[1].video_stream_url().contains("_sid=sid-1"));
    }

    #[test]
    fn test_parse_camera_list_missing_cameras() {
        let body = json!({"success": true, "data": {}});
        let result = with_context(|ctx| ListCamerasOperation::parse_response(&(), &body, ctx));
        assert!(matches!(result, Err(ApiError::MalformedData(_))));
    }

    #[test]
    fn test_parse_camera_list_bad_entry() {
        let body = json!({"success": true, "data": {"cameras": [{"id": 1, "name": "Front"}]}});
        let request = GetCameraInfoRequest { camera_ids: vec![1] };
        let result = with_context(|ctx| GetCameraInfoOperation::parse_response(&request, &body, ctx));
        assert!(matches!(result, Err(ApiError::MalformedData(_))));
    }

    #[test]
    fn test_parse_toggle_success() {
        let body = json!({"success": true});
        let request = CameraRequest { camera_id: 1 };
        let enabled = with_context(|ctx| EnableCameraOperation::parse_response(&request, &body, ctx));
        assert!(enabled.unwrap());
    }
}
