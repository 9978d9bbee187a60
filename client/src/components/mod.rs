//! Reusable UI component modules.

pub mod route_guard;
pub mod session_bar;
