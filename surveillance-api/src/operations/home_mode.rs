//! Home mode operations

use serde_json::Value;

use super::success_flag;
use crate::models::HomeModeState;
use crate::operation::{data_field, ResponseContext, SurveillanceOperation};
use crate::{ApiError, Params, Result, Service};

/// Switch home mode on or off
pub struct SwitchHomeModeOperation;

/// Request for [`SwitchHomeModeOperation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchHomeModeRequest {
    pub state: HomeModeState,
}

/// Read whether home mode is on
pub struct GetHomeModeInfoOperation;

impl SurveillanceOperation for SwitchHomeModeOperation {
    type Request = SwitchHomeModeRequest;
    type Response = bool;

    const SERVICE: Service = Service::HomeMode;
    const METHOD: &'static str = "Switch";

    fn build_params(request: &Self::Request) -> Params {
        Params::new().with("on", request.state.as_str())
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        _context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        Ok(success_flag(body))
    }
}

impl SurveillanceOperation for GetHomeModeInfoOperation {
    type Request = ();
    type Response = bool;

    const SERVICE: Service = Service::HomeMode;
    const METHOD: &'static str = "GetInfo";

    fn build_params(_request: &Self::Request) -> Params {
        Params::new()
    }

    fn parse_response(
        _request: &Self::Request,
        body: &Value,
        _context: &ResponseContext<'_>,
    ) -> Result<Self::Response> {
        data_field(body, "on")?
            .as_bool()
            .ok_or_else(|| ApiError::MalformedData("data.on is not a boolean".to_string()))
    }
}
