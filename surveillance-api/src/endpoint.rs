//! Capability endpoints resolved against a live service
//!
//! The info service maps each remote API name to a path relative to the Web
//! API base URL. Resolution happens once per client; the resulting URLs never
//! change for the lifetime of that client.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::service::Service;

/// A capability together with its resolved request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    service: Service,
    url: String,
}

impl EndpointDescriptor {
    pub fn new(service: Service, url: impl Into<String>) -> Self {
        Self {
            service,
            url: url.into(),
        }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    /// Logical capability name, e.g. `camera_event`
    pub fn logical_name(&self) -> &'static str {
        self.service.name()
    }

    /// Remote API identifier, e.g. `SYNO.SurveillanceStation.Camera`
    pub fn api_name(&self) -> &'static str {
        self.service.info().api_name
    }

    /// Registered protocol version
    pub fn version(&self) -> u32 {
        self.service.info().version
    }

    /// Fully qualified URL requests for this capability are sent to
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Resolved endpoints for every registered capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoints {
    auth: EndpointDescriptor,
    camera: EndpointDescriptor,
    camera_event: EndpointDescriptor,
    video_stream: EndpointDescriptor,
    home_mode: EndpointDescriptor,
    snapshot: EndpointDescriptor,
}

impl ResolvedEndpoints {
    /// Build the endpoint table from an info query response
    ///
    /// Each URL is `base_url` followed by `data.<api_name>.path`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InitializationError` if any capability is absent.
    pub fn resolve(base_url: &str, info: &Value) -> Result<Self> {
        let describe = |service: Service| -> Result<EndpointDescriptor> {
            let api_name = service.info().api_name;
            let path = info
                .get("data")
                .and_then(|data| data.get(api_name))
                .and_then(|entry| entry.get("path"))
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ApiError::InitializationError(format!(
                        "API info response has no path for {}",
                        api_name
                    ))
                })?;

            Ok(EndpointDescriptor::new(service, format!("{}{}", base_url, path)))
        };

        Ok(Self {
            auth: describe(Service::Auth)?,
            camera: describe(Service::Camera)?,
            camera_event: describe(Service::CameraEvent)?,
            video_stream: describe(Service::VideoStream)?,
            home_mode: describe(Service::HomeMode)?,
            snapshot: describe(Service::Snapshot)?,
        })
    }

    pub fn get(&self, service: Service) -> &EndpointDescriptor {
        match service {
            Service::Auth => &self.auth,
            Service::Camera => &self.camera,
            Service::CameraEvent => &self.camera_event,
            Service::VideoStream => &self.video_stream,
            Service::HomeMode => &self.home_mode,
            Service::Snapshot => &self.snapshot,
        }
    }

    /// All descriptors in registry order
    pub fn iter(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        Service::ALL.into_iter().map(move |service| self.get(service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::names_to_query;
    use serde_json::{json, Map};

    const BASE: &str = "https://nas.local:5001/webapi/";

    fn info_response(skip: Option<&str>) -> Value {
        let mut data = Map::new();
        for name in names_to_query() {
            if Some(name) == skip {
                continue;
            }
            let path = if name == "SYNO.API.Auth" { "auth.cgi" } else { "entry.cgi" };
            data.insert(name.to_string(), json!({"path": path, "minVersion": 1, "maxVersion": 9}));
        }
        json!({"success": true, "data": data})
    }

    #[test]
    fn test_resolve_joins_base_and_path() {
        let endpoints = ResolvedEndpoints::resolve(BASE, &info_response(None)).unwrap();

        assert_eq!(endpoints.get(Service::Auth).url(), "https://nas.local:5001/webapi/auth.cgi");
        for endpoint in endpoints.iter().filter(|e| e.service() != Service::Auth) {
            assert_eq!(endpoint.url(), "https://nas.local:5001/webapi/entry.cgi");
        }
    }

    #[test]
    fn test_resolve_missing_capability() {
        let info = info_response(Some("SYNO.SurveillanceStation.HomeMode"));
        match ResolvedEndpoints::resolve(BASE, &info).unwrap_err() {
            ApiError::InitializationError(msg) => {
                assert!(msg.contains("SYNO.SurveillanceStation.HomeMode"))
            }
            other => panic!("Expected InitializationError, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_data() {
        let result = ResolvedEndpoints::resolve(BASE, &json!({"success": true}));
        assert!(matches!(result, Err(ApiError::InitializationError(_))));
    }

    #[test]
    fn test_descriptor_accessors() {
        let endpoints = ResolvedEndpoints::resolve(BASE, &info_response(None)).unwrap();
        let camera_event = endpoints.get(Service::CameraEvent);

        assert_eq!(camera_event.logical_name(), "camera_event");
        assert_eq!(camera_event.api_name(), "SYNO.SurveillanceStation.Camera.Event");
        assert_eq!(camera_event.version(), 1);
        assert_eq!(endpoints.iter().count(), 6);
    }
}
