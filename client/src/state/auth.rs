//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of the persisted session for user-aware rendering
//! (header name, admin link). The guard does not read it; it asks the
//! session directly on every navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Session, UserProfile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self { authenticated: session.is_authenticated(), user: session.user() }
    }

    /// Name shown in the header; falls back when no profile was stored.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| "signed in".to_owned(), |u| u.username.clone())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserProfile::is_admin)
    }
}
