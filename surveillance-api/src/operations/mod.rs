//! Surveillance Station operations organized by capability
//!
//! Each module contains the operations for one remote sub-API.

pub mod camera;
pub mod camera_event;
pub mod home_mode;
pub mod snapshot;

pub use camera::{
    DisableCameraOperation, EnableCameraOperation, GetCameraInfoOperation,
    GetCameraSnapshotOperation, ListCamerasOperation,
};
pub use camera_event::{MdParamSaveOperation, MotionEnumOperation};
pub use home_mode::{GetHomeModeInfoOperation, SwitchHomeModeOperation};
pub use snapshot::{LoadSnapshotOperation, TakeSnapshotOperation};

use serde_json::Value;

/// The envelope `success` flag as a plain boolean
pub(crate) fn success_flag(body: &Value) -> bool {
    body.get("success").and_then(Value::as_bool).unwrap_or(false)
}
