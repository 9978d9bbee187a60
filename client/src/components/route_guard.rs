//! Wraps a routed page in the navigation guard.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use session::Session;

use crate::router::AppRoute;
use crate::router::guard::{self, NavigationDecision, NavigationTarget};

/// Render `children` only if the guard allows the current location.
///
/// Re-evaluated whenever the path changes; the token is read fresh from the
/// session each time.
#[component]
pub fn RouteGuard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let target = NavigationTarget { path: &path, requires_auth: route.requires_auth() };
        match guard::decide(target, session.is_authenticated()) {
            NavigationDecision::Allow => children().into_any(),
            NavigationDecision::Redirect(to) => view! { <Redirect path=to.href()/> }.into_any(),
        }
    }
}
