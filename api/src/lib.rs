//! HTTP client for the hydromap monitoring API.
//!
//! One [`ApiClient`] per application, pointed at a fixed base URL and bound
//! to a [`session::Session`]. Outgoing requests carry the stored bearer
//! token; a `401` on any path clears the session and emits
//! `SessionEvent::Expired` for the host to act on.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod monitoring;

pub use client::ApiClient;
pub use config::{ApiConfig, Timeouts};
pub use error::ApiError;
pub use monitoring::{LatestMeasurement, Measurement, MeasurementStats, MonitorPoint, PointDetail};
