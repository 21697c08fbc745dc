//! Camera event operations: motion detection parameters

use serde_json::Value;

use super::camera::CameraRequest;
use crate::models::MotionSetting;
use crate::operation::{data_field, ResponseContext, SurveillanceOperation};
use crate::{ApiError, Params, Result, Service};

/// Read the motion detection parameters of a camera
pub struct MotionEnumOperation;

/// Save motion detection parameters of a camera
///
/// The parameters to change are passed as overrides; the response is the
/// id of the camera that was updated.
pub struct MdParamSaveOperation;

impl SurveillanceOperation for MotionEnumOperation {
    type Request = CameraRequest;
    type Response = MotionSetting;

    const SERVICE: Service = Service::CameraEvent;
    const METHOD: &'static str = "MotionEnum";

    fn build_params(request: &Self::Request) -> Params {
        Params::new().with("camId", request.camera_id)
    }

    fn parse_response(
        request: &Self::Request,
        body: &Value,
        _context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        MotionSetting::from_json(request.camera_id, data_field(body, "MDParam")?)
    }
}

impl SurveillanceOperation for MdParamSaveOperation {
    type Request = CameraRequest;
    type Response = i64;

    const SERVICE: Service = Service::CameraEvent;
    const METHOD: &'static str = "MDParamSave";

    fn build_params(request: &Self::Request) -> Params {
        Params::new().with("camId", request.camera_id)
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        _context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        let cam_id = data_field(body, "camId")?;

        // Some firmware versions return the id as a string
        cam_id
            .as_i64()
            .or_else(|| cam_id.as_str().and_then(|s| s.parse().ok()))
            .ok_or_else(|| ApiError::MalformedData("data.camId is not an integer".to_string()))
    }
}
