//! Client-side session state for the hydromap frontend.
//!
//! Two persisted keys make up the whole session: `token` (bearer credential)
//! and `user` (JSON profile). Presence of a non-empty `token` is the only
//! signal consulted for "is authenticated"; there is no client-side expiry
//! check, expiry is discovered when the server answers `401`.
//!
//! [`Session`] wraps an injected [`SessionStore`] together with a
//! [`SessionEvents`] registry, so the same lifecycle runs over browser
//! storage, a file on disk, or plain memory.

pub mod events;
pub mod store;
pub mod user;

use std::fmt;
use std::sync::Arc;

pub use events::{SessionEvent, SessionEvents, Subscription};
pub use store::{MemoryStore, SessionStore, StoreError, TOKEN_KEY, USER_KEY};
pub use user::UserProfile;

/// Shared handle to the persisted session. Clones observe the same state.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    events: SessionEvents,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    #[must_use]
    pub fn from_shared(store: Arc<dyn SessionStore>) -> Self {
        Self { store, events: SessionEvents::new() }
    }

    /// Session over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Stored bearer token. An empty string counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Raw serialized profile, exactly as stored.
    #[must_use]
    pub fn user_json(&self) -> Option<String> {
        self.store.get(USER_KEY)
    }

    /// Stored profile, if present and well-formed.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.user_json()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "stored user profile is malformed");
                None
            }
        }
    }

    /// Persist a freshly issued token and, when the server sent one, the
    /// user profile. A login without a profile drops any profile left over
    /// from an earlier session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects a write. The token is
    /// removed again when the profile write fails.
    pub fn begin(&self, token: &str, user: Option<&serde_json::Value>) -> Result<(), StoreError> {
        self.store.set(TOKEN_KEY, token)?;
        let profile = match user {
            Some(user) => self.store.set(USER_KEY, &user.to_string()),
            None => self.store.remove(USER_KEY),
        };
        if let Err(e) = profile {
            // A token without its profile must not count as signed in.
            if let Err(undo) = self.store.remove(TOKEN_KEY) {
                tracing::warn!(error = %undo, "failed to roll back token after profile write failed");
            }
            return Err(e);
        }
        self.events.emit(SessionEvent::SignedIn);
        Ok(())
    }

    /// Drop both keys. Safe to call with no session stored.
    pub fn clear(&self) {
        self.remove_all();
        self.events.emit(SessionEvent::SignedOut);
    }

    /// Drop both keys because the server rejected the token.
    pub fn expire(&self) {
        self.remove_all();
        self.events.emit(SessionEvent::Expired);
    }

    #[must_use]
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    fn remove_all(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear session key");
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
