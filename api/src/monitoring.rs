//! Read endpoints the map viewer uses to place and chart monitoring points.
//!
//! Timestamps are kept as the server's ISO 8601 strings; the viewer only
//! displays them.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// A monitoring point as plotted on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorPoint {
    pub point_code: String,
    pub point_name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
    pub device_type: String,
}

/// A point plus its most recent reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDetail {
    #[serde(flatten)]
    pub point: MonitorPoint,
    #[serde(default)]
    pub latest_value: Option<f64>,
    #[serde(default)]
    pub latest_time: Option<String>,
    #[serde(default)]
    pub data_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub point_code: String,
    pub value: f64,
    pub time: String,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub measurement_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementStats {
    pub point_code: String,
    pub max_value: f64,
    pub min_value: f64,
    pub avg_value: f64,
    pub count: u64,
    #[serde(default)]
    pub latest_time: Option<String>,
    #[serde(default)]
    pub earliest_time: Option<String>,
}

/// Latest reading for one point, as listed by `/measurements/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestMeasurement {
    pub point_code: String,
    pub point_name: String,
    pub value: f64,
    pub time: String,
}

pub const POINTS_PATH: &str = "/points/";
pub const LATEST_MEASUREMENTS_PATH: &str = "/measurements/latest";

pub(crate) fn point_path(point_code: &str) -> String {
    format!("/points/{}", urlencoding::encode(point_code))
}

pub(crate) fn measurements_path(point_code: &str) -> String {
    format!("/measurements/{}", urlencoding::encode(point_code))
}

pub(crate) fn measurement_stats_path(point_code: &str) -> String {
    format!("{}/stats", measurements_path(point_code))
}

impl ApiClient {
    /// All monitoring points.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn points(&self) -> Result<Vec<MonitorPoint>, ApiError> {
        self.get_json(POINTS_PATH).await
    }

    /// One point with its latest reading and reading count.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`]; an unknown code is a `404` status error.
    pub async fn point_detail(&self, point_code: &str) -> Result<PointDetail, ApiError> {
        self.get_json(&point_path(point_code)).await
    }

    /// Full reading history for a point, oldest first.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn measurements(&self, point_code: &str) -> Result<Vec<Measurement>, ApiError> {
        self.get_json(&measurements_path(point_code)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`]; a point without readings is a `404`.
    pub async fn measurement_stats(&self, point_code: &str) -> Result<MeasurementStats, ApiError> {
        self.get_json(&measurement_stats_path(point_code)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn latest_measurements(&self) -> Result<Vec<LatestMeasurement>, ApiError> {
        self.get_json(LATEST_MEASUREMENTS_PATH).await
    }
}

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod tests;
