/// API name of the info service used to look up capability paths
pub const INFO_API_NAME: &str = "SYNO.API.Info";

/// Protocol version of the info service
pub const INFO_API_VERSION: u32 = 1;

/// Path of the info service, relative to the Web API base URL
pub const INFO_API_PATH: &str = "entry.cgi";

/// Represents the capabilities exposed by the Surveillance Station Web API
///
/// Each capability is a separate remote sub-API with its own identifier,
/// protocol version and (after resolution) request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Authentication - login and session issuance
    Auth,

    /// Camera - listing, info, enable/disable and live snapshots
    Camera,

    /// Camera events - motion detection parameters
    CameraEvent,

    /// Video streaming - MJPEG stream URLs
    VideoStream,

    /// Home mode - global operating mode toggle
    HomeMode,

    /// Snapshots - capturing and loading stored snapshots
    Snapshot,
}

/// Remote identifier and protocol version of a capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// The `api` parameter sent with every request to this capability
    pub api_name: &'static str,

    /// The `version` parameter sent with every request to this capability
    pub version: u32,
}

impl Service {
    /// Every registered capability, in query order
    pub const ALL: [Service; 6] = [
        Service::Auth,
        Service::Camera,
        Service::CameraEvent,
        Service::VideoStream,
        Service::HomeMode,
        Service::Snapshot,
    ];

    /// Logical name of this capability
    pub fn name(&self) -> &'static str {
        match self {
            Service::Auth => "auth",
            Service::Camera => "camera",
            Service::CameraEvent => "camera_event",
            Service::VideoStream => "video_stream",
            Service::HomeMode => "home_mode",
            Service::Snapshot => "snapshot",
        }
    }

    /// Get the remote API name and protocol version for this capability
    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::Auth => ServiceInfo {
                api_name: "SYNO.API.Auth",
                version: 3,
            },
            Service::Camera => ServiceInfo {
                api_name: "SYNO.SurveillanceStation.Camera",
                version: 1,
            },
            Service::CameraEvent => ServiceInfo {
                api_name: "SYNO.SurveillanceStation.Camera.Event",
                version: 1,
            },
            Service::VideoStream => ServiceInfo {
                api_name: "SYNO.SurveillanceStation.VideoStreaming",
                version: 1,
            },
            Service::HomeMode => ServiceInfo {
                api_name: "SYNO.SurveillanceStation.HomeMode",
                version: 1,
            },
            Service::Snapshot => ServiceInfo {
                api_name: "SYNO.SurveillanceStation.SnapShot",
                version: 1,
            },
        }
    }
}

/// Remote API names to include in the info query, in registry order
pub fn names_to_query() -> Vec<&'static str> {
    Service::ALL.iter().map(|service| service.info().api_name).collect()
}
