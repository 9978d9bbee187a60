//! Browser `localStorage` backing for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the `csr` build touches `web-sys`. Native builds (tests, tooling)
//! fall back to an in-memory session so pages still render.

use session::Session;
#[cfg(feature = "csr")]
use session::{SessionStore, StoreError};

/// [`SessionStore`] over `window.localStorage`.
///
/// Storage is looked up per call; `web_sys::Storage` is not `Send`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))
    }
}

#[cfg(feature = "csr")]
impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }
}

/// The session the app runs on: `localStorage` in the browser, memory elsewhere.
#[must_use]
pub fn browser_session() -> Session {
    #[cfg(feature = "csr")]
    {
        Session::new(LocalStorageStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Session::in_memory()
    }
}

/// Pathname the browser is showing; `/` outside the browser.
#[must_use]
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| crate::router::AppRoute::Home.path().to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        crate::router::AppRoute::Home.path().to_owned()
    }
}

/// Full page load of `path`, dropping all in-memory app state.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        tracing::debug!(path, "hard redirect skipped outside the browser");
    }
}
