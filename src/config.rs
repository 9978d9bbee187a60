//! Dev server configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Parse { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT, dist_dir: PathBuf::from(DEFAULT_DIST_DIR) }
    }
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// - `HYDROMAP_HOST`: default `0.0.0.0`
    /// - `PORT`: default `5173`
    /// - `HYDROMAP_DIST_DIR`: default `dist`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = non_empty_var("HYDROMAP_HOST").unwrap_or(defaults.host);
        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Parse { var: "PORT", message: format!("`{raw}`: {e}") })?,
            None => defaults.port,
        };
        let dist_dir = non_empty_var("HYDROMAP_DIST_DIR").map_or(defaults.dist_dir, PathBuf::from);
        Ok(Self { host, port, dist_dir })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
