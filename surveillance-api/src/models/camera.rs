use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Recording status codes that mean a camera is actively recording
pub const RECORDING_STATUS_ACTIVE: [i64; 7] = [
    1, // continuous schedule
    2, // motion detection schedule
    3, // digital input schedule
    4, // digital input schedule (alternate)
    5, // manual recording
    6, // external trigger
    7, // analytics
];

/// A Surveillance Station camera
///
/// Immutable snapshot of remote state. The stream URL embeds the session id
/// that was current when the camera was fetched; it goes stale once the
/// client re-authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    id: i64,
    name: String,
    is_enabled: bool,
    recording_status: i64,
    video_stream_url: String,
}

/// Camera fields as delivered in `data.cameras[]`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CameraData {
    id: i64,
    name: String,
    enabled: bool,
    rec_status: i64,
}

impl Camera {
    /// Build a camera from one `data.cameras[]` entry
    ///
    /// # Arguments
    /// * `data` - The camera object
    /// * `stream_url` - Produces the video stream URL for the camera id
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MalformedData` if `id`, `name`, `enabled` or
    /// `recStatus` is missing or has the wrong type.
    pub fn from_json<F>(data: &Value, stream_url: F) -> Result<Self>
    where
        F: FnOnce(i64) -> Result<String>,
    {
        let data = CameraData::deserialize(data)
            .map_err(|e| ApiError::MalformedData(format!("Invalid camera entry: {}", e)))?;

        Ok(Self {
            video_stream_url: stream_url(data.id)?,
            id: data.id,
            name: data.name,
            is_enabled: data.enabled,
            recording_status: data.rec_status,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Raw `recStatus` code
    pub fn recording_status(&self) -> i64 {
        self.recording_status
    }

    /// True when the recording status is one of [`RECORDING_STATUS_ACTIVE`]
    pub fn is_recording(&self) -> bool {
        RECORDING_STATUS_ACTIVE.contains(&self.recording_status)
    }

    pub fn video_stream_url(&self) -> &str {
        &self.video_stream_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn stream(id: i64) -> Result<String> {
        Ok(format!("http://nas/webapi/entry.cgi?cameraId={}", id))
    }

    #[test]
    fn test_from_json() {
        let data = json!({"id": 3, "name": "Driveway", "enabled": true, "recStatus": 2, "model": "IPCam"});
        let camera = Camera::from_json(&data, stream).unwrap();

        assert_eq!(camera.id(), 3);
        assert_eq!(camera.name(), "Driveway");
        assert!(camera.is_enabled());
        assert_eq!(camera.recording_status(), 2);
        assert_eq!(camera.video_stream_url(), "http://nas/webapi/entry.cgi?cameraId=3");
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(5, true)]
    #[case(7, true)]
    #[case(8, false)]
    #[case(-1, false)]
    fn test_is_recording(#[case] rec_status: i64, #[case] expected: bool) {
        let data = json!({"id": 1, "name": "Porch", "enabled": true, "recStatus": rec_status});
        let camera = Camera::from_json(&data, stream).unwrap();
        assert_eq!(camera.is_recording(), expected);
    }

    #[rstest]
    #[case("id")]
    #[case("name")]
    #[case("enabled")]
    #[case("recStatus")]
    fn test_missing_field(#[case] field: &str) {
        let mut data = json!({"id": 1, "name": "Porch", "enabled": true, "recStatus": 0});
        data.as_object_mut().unwrap().remove(field);

        match Camera::from_json(&data, stream).unwrap_err() {
            ApiError::MalformedData(msg) => assert!(msg.contains(field), "{}", msg),
            other => panic!("Expected MalformedData, got {:?}", other),
        }
    }

    #[test]
    fn test_stream_url_error_propagates() {
        let data = json!({"id": 1, "name": "Porch", "enabled": false, "recStatus": 0});
        let result = Camera::from_json(&data, |_| Err(ApiError::InvalidParameter("bad url".to_string())));
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }
}
