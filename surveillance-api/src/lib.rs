//! High-level client for the Synology Surveillance Station Web API
//!
//! This crate provides a typed, blocking API for querying and controlling a
//! Surveillance Station: cameras, motion detection settings, snapshots and
//! home mode. It uses the private `webapi-client` crate for HTTP and JSON
//! envelope handling.
//!
//! # Sessions
//!
//! [`SurveillanceClient::connect`] resolves the URL of every capability and
//! logs in. Session ids issued by the station are short-lived; when a request
//! is rejected because the session expired, the client logs in again and
//! retries that request exactly once.
//!
//! ```rust,no_run
//! use surveillance_api::{ClientConfig, HomeModeState, Params, SurveillanceClient};
//!
//! let config = ClientConfig::builder()
//!     .url("https://nas.local:5001")
//!     .username("admin")
//!     .password("secret")
//!     .verify_tls(false)
//!     .build()?;
//!
//! let mut client = SurveillanceClient::connect(config)?;
//!
//! client.home_mode_switch(HomeModeState::On, Params::new())?;
//! let motion = client.camera_event_motion_enum(1, Params::new())?;
//! println!("motion detection enabled: {}", motion.is_enabled());
//! # Ok::<(), surveillance_api::ApiError>(())
//! ```
//!
//! # Overrides
//!
//! Every operation accepts a [`Params`] of extra query parameters. They are
//! merged over the operation's defaults, so a caller can both add fields the
//! client does not model and replace defaults such as `version`.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod models;
pub mod operation;
pub mod operations;
pub mod params;
pub mod service;

pub use client::{SurveillanceClient, ERROR_CODE_SESSION_EXPIRED};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::{EndpointDescriptor, ResolvedEndpoints};
pub use error::{ApiError, Result};
pub use models::{Camera, HomeModeState, MotionDetectionSource, MotionSetting, SnapshotSize};
pub use operation::{RawOperation, SurveillanceOperation};
pub use params::Params;
pub use service::{names_to_query, Service, ServiceInfo};
