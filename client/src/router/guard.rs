//! Pre-navigation guard.
//!
//! One decision per navigation, from two inputs: whether the target route
//! requires auth and whether a token is stored.
//!
//! | target                  | token | decision                           |
//! |-------------------------|-------|------------------------------------|
//! | requires auth           | no    | `/login?redirect=<target path>`    |
//! | requires auth           | yes   | allow                              |
//! | `/login`                | yes   | `/`                                |
//! | anything else           | any   | allow                              |

use std::fmt;

use super::AppRoute;

/// Query parameter carrying the originally requested path.
pub const REDIRECT_PARAM: &str = "redirect";

/// Where a navigation is headed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTarget<'a> {
    pub path: &'a str,
    pub requires_auth: bool,
}

impl<'a> NavigationTarget<'a> {
    /// Look `path` up in the route table. Paths outside the table are public.
    #[must_use]
    pub fn resolve(path: &'a str) -> Self {
        let requires_auth = AppRoute::from_path(path).is_some_and(AppRoute::requires_auth);
        Self { path, requires_auth }
    }
}

/// A path plus query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), query: Vec::new() }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The originally requested path carried by a login redirect.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.query_value(REDIRECT_PARAM)
    }

    /// Path and percent-encoded query, ready for the router. `/` stays
    /// literal in values, so redirects read `/login?redirect=/admin`.
    #[must_use]
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_query_part(k), encode_query_part(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

fn encode_query_part(raw: &str) -> String {
    urlencoding::encode(raw).replace("%2F", "/")
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(Location),
}

/// Decide what happens to a navigation toward `target`.
#[must_use]
pub fn decide(target: NavigationTarget<'_>, authenticated: bool) -> NavigationDecision {
    let decision = if target.requires_auth && !authenticated {
        NavigationDecision::Redirect(
            Location::new(AppRoute::Login.path()).with_query(REDIRECT_PARAM, target.path),
        )
    } else if authenticated && AppRoute::from_path(target.path) == Some(AppRoute::Login) {
        NavigationDecision::Redirect(Location::new(AppRoute::Home.path()))
    } else {
        NavigationDecision::Allow
    };

    match &decision {
        NavigationDecision::Allow => {
            tracing::debug!(to = target.path, authenticated, "navigation allowed");
        }
        NavigationDecision::Redirect(location) => {
            tracing::info!(to = target.path, redirect = %location, authenticated, "navigation redirected");
        }
    }
    decision
}

/// Where the login page sends the user after a successful sign-in.
///
/// Only local absolute paths are honoured; anything else (missing, a full
/// URL, a protocol-relative `//host` path, or `/login` itself) goes home.
#[must_use]
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && AppRoute::from_path(path) != Some(AppRoute::Login) =>
        {
            path.to_owned()
        }
        _ => AppRoute::Home.path().to_owned(),
    }
}

/// Where to send the browser after the server rejected the stored token.
///
/// `None` when the user is already on the login page: a rejected sign-in
/// attempt stays put so its error message and `redirect` query survive.
#[must_use]
pub fn expiry_redirect(current_path: &str) -> Option<&'static str> {
    if AppRoute::from_path(current_path) == Some(AppRoute::Login) {
        tracing::debug!(current_path, "session expired on login page; staying");
        None
    } else {
        Some(AppRoute::Login.path())
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
