//! Route table for the single-page app.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` mounts one Leptos route per [`AppRoute`]; `guard` consults
//! [`AppRoute::requires_auth`] before any of them renders.

pub mod guard;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Every page the app knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Map viewer landing page.
    Home,
    Login,
    /// User and point administration.
    Admin,
}

/// Declaration order, which is also the order routes are mounted in.
pub const ROUTES: [AppRoute; 3] = [AppRoute::Home, AppRoute::Login, AppRoute::Admin];

impl AppRoute {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Admin => "/admin",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn requires_auth(self) -> bool {
        match self {
            Self::Home | Self::Admin => true,
            Self::Login => false,
        }
    }

    /// Match a location path against the table. A single trailing slash is
    /// tolerated (`/admin/` is `Admin`).
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        ROUTES.into_iter().find(|route| route.path() == trimmed)
    }
}
