//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per `AppRoute`. Pages assume the guard already ran; they never
//! check the token themselves.

pub mod admin;
pub mod home;
pub mod login;
