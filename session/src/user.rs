//! Profile of the signed-in user, as returned by the backend.

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "user".to_owned()
}

fn default_active() -> bool {
    true
}

/// User profile stored next to the token.
///
/// Informational only: authorization decisions never look at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Creation timestamp as sent by the server (ISO 8601, no zone).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
