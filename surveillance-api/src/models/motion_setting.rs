use serde_json::Value;

use crate::error::{ApiError, Result};

/// Where motion detection for a camera is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionDetectionSource {
    /// Motion detection is switched off (`-1`)
    Disabled,
    /// Detected by the camera itself (`0`)
    ByCamera,
    /// Detected by Surveillance Station (`1`)
    BySurveillance,
    /// Any code this client does not know about
    Other(i64),
}

impl From<i64> for MotionDetectionSource {
    fn from(source: i64) -> Self {
        match source {
            -1 => MotionDetectionSource::Disabled,
            0 => MotionDetectionSource::ByCamera,
            1 => MotionDetectionSource::BySurveillance,
            other => MotionDetectionSource::Other(other),
        }
    }
}

impl MotionDetectionSource {
    pub fn code(&self) -> i64 {
        match self {
            MotionDetectionSource::Disabled => -1,
            MotionDetectionSource::ByCamera => 0,
            MotionDetectionSource::BySurveillance => 1,
            MotionDetectionSource::Other(code) => *code,
        }
    }
}

/// Motion detection settings of one camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSetting {
    camera_id: i64,
    source: MotionDetectionSource,
}

impl MotionSetting {
    /// Build from the `data.MDParam` object of a `MotionEnum` response
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MalformedData` if `source` is missing or not an integer.
    pub fn from_json(camera_id: i64, data: &Value) -> Result<Self> {
        let source = data
            .get("source")
            .and_then(Value::as_i64)
            .ok_or_else(|| ApiError::missing_field("source"))?;

        Ok(Self {
            camera_id,
            source: source.into(),
        })
    }

    pub fn camera_id(&self) -> i64 {
        self.camera_id
    }

    pub fn source(&self) -> MotionDetectionSource {
        self.source
    }

    /// True unless the source is [`MotionDetectionSource::Disabled`]
    pub fn is_enabled(&self) -> bool {
        self.source != MotionDetectionSource::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(-1, false)]
    #[case(0, true)]
    #[case(1, true)]
    #[case(4, true)]
    fn test_is_enabled(#[case] source: i64, #[case] expected: bool) {
        let setting = MotionSetting::from_json(12, &json!({"source": source})).unwrap();
        assert_eq!(setting.camera_id(), 12);
        assert_eq!(setting.is_enabled(), expected);
        assert_eq!(setting.source().code(), source);
    }

    #[test]
    fn test_missing_source() {
        let result = MotionSetting::from_json(1, &json!({"sensitivity": 50}));
        assert!(matches!(result, Err(ApiError::MalformedData(_))));
    }
}
