//! API client construction for pages.
//!
//! Pages capture the [`ApiConfig`] and [`Session`] from context when they
//! are built and create a client per action; both are cheap to clone.

use api::{ApiClient, ApiConfig};
use session::Session;

/// Build a client bound to the app session, logging instead of failing.
pub fn connect(config: &ApiConfig, session: &Session) -> Option<ApiClient> {
    match ApiClient::new(config.clone(), session.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!(error = %e, "API client unavailable");
            None
        }
    }
}
