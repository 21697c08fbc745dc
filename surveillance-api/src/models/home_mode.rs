use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// Target state for the home mode switch
///
/// The service expects the lowercase literals `"true"` / `"false"` rather
/// than JSON booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeModeState {
    On,
    Off,
}

impl HomeModeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeModeState::On => "true",
            HomeModeState::Off => "false",
        }
    }
}

impl From<bool> for HomeModeState {
    fn from(on: bool) -> Self {
        if on {
            HomeModeState::On
        } else {
            HomeModeState::Off
        }
    }
}

impl FromStr for HomeModeState {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(HomeModeState::On),
            "false" => Ok(HomeModeState::Off),
            other => Err(ApiError::InvalidParameter(format!(
                "Invalid home mode state '{}', expected \"true\" or \"false\"",
                other
            ))),
        }
    }
}

impl fmt::Display for HomeModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!("true".parse::<HomeModeState>().unwrap(), HomeModeState::On);
        assert_eq!("false".parse::<HomeModeState>().unwrap(), HomeModeState::Off);
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for input in ["True", "FALSE", "on", "1", ""] {
            assert!(
                matches!(input.parse::<HomeModeState>(), Err(ApiError::InvalidParameter(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_display_and_bool() {
        assert_eq!(HomeModeState::from(true).to_string(), "true");
        assert_eq!(HomeModeState::from(false).to_string(), "false");
    }
}
