//! Key/value persistence behind the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps `token` and `user` in `localStorage`, the CLI keeps them
//! in a JSON file, tests keep them in memory. Everything above this module
//! talks to the [`SessionStore`] trait and never to a concrete backend.

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Key holding the opaque bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Errors produced by a [`SessionStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage could not be reached (no window, no file access).
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    /// A write or removal was rejected by the backend.
    #[error("session storage write failed for `{key}`: {message}")]
    Write { key: String, message: String },
}

/// String key/value storage for session state.
///
/// Implementations must be shareable across tasks; the browser build is
/// single-threaded but the CLI and tests run on a multi-threaded runtime.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store used by tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
