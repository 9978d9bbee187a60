//! API client configuration.
//!
//! The browser bundle has no process environment, so its base URL is fixed
//! at compile time (`HYDROMAP_API_URL` in the build env). Native hosts read
//! the same variable at runtime through [`ApiConfig::from_env`].

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = match option_env!("HYDROMAP_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ApiConfig {
    /// Config pointed at `base_url` with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] if the URL is blank.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, timeouts: Timeouts::default() })
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HYDROMAP_API_URL`: default [`DEFAULT_API_URL`]
    /// - `HYDROMAP_REQUEST_TIMEOUT_SECS`: default 30
    /// - `HYDROMAP_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] if the URL is blank or a timeout is
    /// not a number.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw_url = std::env::var("HYDROMAP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("HYDROMAP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_u64("HYDROMAP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self { base_url: normalize_base_url(&raw_url)?, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> Result<u64, ApiError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ApiError::ConfigParse(format!("{key} must be a whole number of seconds, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ApiError::ConfigParse("API base URL is empty".to_owned()));
    }
    Ok(url.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
