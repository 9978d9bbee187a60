//! Errors surfaced by [`crate::ApiClient`].

use session::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The server rejected the credential. The session has already been
    /// cleared and `SessionEvent::Expired` emitted by the time this is seen.
    #[error("unauthorized: session expired")]
    Unauthorized { body: String },

    /// The server answered with a non-success status other than `401`.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The session store refused to persist a login.
    #[error(transparent)]
    Session(#[from] StoreError),
}

impl ApiError {
    /// HTTP status carried by the error, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
