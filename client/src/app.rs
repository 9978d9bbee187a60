//! Root application component with routing and context providers.

use api::ApiConfig;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::SessionEvent;

use crate::components::route_guard::RouteGuard;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage};
use crate::router::AppRoute;
use crate::router::guard::expiry_redirect;
use crate::state::auth::AuthState;
use crate::storage::{browser_session, current_path, hard_redirect};

/// Root application component.
///
/// Provides the session, API config, and auth mirror as context, reacts to
/// session expiry with a full reload of `/login` (unless already there),
/// and mounts every route behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = browser_session();
    let auth = RwSignal::new(AuthState::from_session(&session));

    session.events().subscribe(move |event| match event {
        SessionEvent::Expired => {
            auth.set(AuthState::default());
            if let Some(to) = expiry_redirect(&current_path()) {
                hard_redirect(to);
            }
        }
        SessionEvent::SignedOut => auth.set(AuthState::default()),
        SessionEvent::SignedIn => {}
    });

    provide_context(session);
    provide_context(ApiConfig::default());
    provide_context(auth);

    view! {
        <Title text="Hydromap"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard route=AppRoute::Home><HomePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard route=AppRoute::Login><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RouteGuard route=AppRoute::Admin><AdminPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
