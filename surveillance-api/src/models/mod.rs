//! Value objects built from Surveillance Station responses

mod camera;
mod home_mode;
mod motion_setting;
mod snapshot;

pub use camera::{Camera, RECORDING_STATUS_ACTIVE};
pub use home_mode::HomeModeState;
pub use motion_setting::{MotionDetectionSource, MotionSetting};
pub use snapshot::SnapshotSize;
