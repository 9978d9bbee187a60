//! Session lifecycle notifications.
//!
//! DESIGN
//! ======
//! The API client never navigates. When a `401` forces the session closed it
//! emits [`SessionEvent::Expired`] and whoever hosts the client (browser app,
//! CLI) decides what that means for its UI.
//!
//! Listeners are snapshotted before dispatch, so a listener may subscribe or
//! unsubscribe from inside its own callback without deadlocking.

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Something happened to the stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A token was persisted after a successful login.
    SignedIn,
    /// The session was cleared on request.
    SignedOut,
    /// The server rejected the token; the session was cleared.
    Expired,
}

/// Handle returned by [`SessionEvents::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Arc<dyn Fn(SessionEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Subscriber registry shared by every clone of a [`crate::Session`].
#[derive(Clone, Default)]
pub struct SessionEvents {
    inner: Arc<Mutex<Listeners>>,
}

impl SessionEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it is called for every subsequent event.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(SessionEvent) + Send + Sync + 'static,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = guard.next_id;
        guard.next_id += 1;
        guard.entries.push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = guard.entries.len();
        guard.entries.retain(|(id, _)| *id != subscription.0);
        guard.entries.len() != before
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn emit(&self, event: SessionEvent) {
        let listeners: Vec<Listener> = {
            let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            guard.entries.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        tracing::debug!(?event, listeners = listeners.len(), "session event");
        for listener in listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

impl fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
